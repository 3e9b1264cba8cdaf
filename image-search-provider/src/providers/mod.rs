//! Image search provider implementations

/// Shared utilities used by provider implementations.
pub mod common;

mod pixabay;

pub use pixabay::PixabayProvider;
