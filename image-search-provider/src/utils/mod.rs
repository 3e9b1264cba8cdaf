//! Utility modules.

/// Log sanitization utilities to prevent API key exposure.
pub mod log_sanitizer;
