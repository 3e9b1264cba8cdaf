//! Provider factory functions.

use std::sync::Arc;

use crate::error::{ProviderError, Result};
use crate::providers::PixabayProvider;
use crate::traits::ImageSearchProvider;
use crate::types::ProviderCredentials;

/// Creates an [`ImageSearchProvider`] instance from the given credentials.
///
/// The concrete provider type is determined by the [`ProviderCredentials`] variant.
/// The returned provider is wrapped in `Arc<dyn ImageSearchProvider>` for easy
/// sharing across async tasks.
///
/// An empty (or whitespace-only) key is rejected up front with
/// [`ProviderError::InvalidCredentials`] instead of being sent to the API.
///
/// # Examples
///
/// ```rust,no_run
/// use image_search_provider::{create_provider, ProviderCredentials};
///
/// let provider = create_provider(ProviderCredentials::Pixabay {
///     api_key: "your-key".to_string(),
/// }).unwrap();
/// ```
pub fn create_provider(credentials: ProviderCredentials) -> Result<Arc<dyn ImageSearchProvider>> {
    match credentials {
        ProviderCredentials::Pixabay { api_key } => {
            if api_key.trim().is_empty() {
                return Err(ProviderError::InvalidCredentials {
                    provider: "pixabay".to_string(),
                    raw_message: Some("API key must not be empty".to_string()),
                });
            }
            Ok(Arc::new(PixabayProvider::new(api_key)?))
        }
    }
}
