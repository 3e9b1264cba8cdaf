//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use image_search_provider::ProviderError;

/// A single page fetch that did not produce results.
///
/// This is the only failure kind a [`SearchSession`](crate::services::SearchSession)
/// ever sees from the remote API.
#[derive(Error, Debug, Clone, Serialize)]
#[error("Fetch of page {page} for {query:?} failed: {source}")]
pub struct FetchFailure {
    /// Query the page was requested for.
    pub query: String,
    /// Requested page number.
    pub page: u32,
    /// Underlying provider error.
    #[source]
    pub source: ProviderError,
}

impl FetchFailure {
    /// See [`ProviderError::is_expected`].
    #[must_use]
    pub fn is_expected(&self) -> bool {
        self.source.is_expected()
    }
}

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// A page fetch failed
    #[error("{0}")]
    Fetch(#[from] FetchFailure),

    /// Provider error (converting from library)
    #[error("{0}")]
    Provider(#[from] ProviderError),
}

impl CoreError {
    /// Whether it is expected behavior (user input, bad credentials, etc.), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Validation(_) => true,
            Self::Fetch(e) => e.is_expected(),
            Self::Provider(e) => e.is_expected(),
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
