//! # image-search-provider
//!
//! A typed client for keyword image search APIs.
//!
//! ## Supported Providers
//!
//! | Provider | Auth Method |
//! |----------|-------------|
//! | [Pixabay](https://pixabay.com/api/docs/) | API key (`key` query parameter) |
//!
//! ## Feature Flags
//!
//! ### TLS Backend
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation targets.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use image_search_provider::{create_provider, ProviderCredentials, SearchParams};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = create_provider(ProviderCredentials::Pixabay {
//!         api_key: "your-key".to_string(),
//!     })?;
//!
//!     let page = provider.search(&SearchParams::for_page("yellow flowers", 1)).await?;
//!     for image in &page.items {
//!         println!("{} {} ({})", image.id, image.preview_url, image.tags);
//!     }
//!     println!("{} reachable in total, more: {}", page.total_count, page.has_more);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All provider operations return [`Result<T, ProviderError>`](ProviderError).
//!
//! - [`ProviderError::InvalidCredentials`] — the API key was rejected
//! - [`ProviderError::InvalidParameter`] — e.g. a page beyond the accessible range
//! - [`ProviderError::RateLimited`] — API rate limit exceeded
//! - [`ProviderError::NetworkError`] — network connectivity issue
//!
//! Requests are never retried automatically. [`ProviderError::is_transient`]
//! tells callers which failures are worth asking again for.

mod error;
mod factory;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export factory functions
pub use factory::create_provider;

// Re-export core trait only (internal traits are not exported)
pub use traits::ImageSearchProvider;

// Re-export types
pub use types::{
    DEFAULT_PAGE_SIZE, ImageRecord, ImageType, Orientation, PaginatedResponse, ProviderCredentials,
    ProviderType, SearchPage, SearchParams,
};

// Re-export log helpers
pub use utils::log_sanitizer;

// Re-export concrete providers
pub use providers::PixabayProvider;
