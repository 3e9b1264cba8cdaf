//! Pixabay image search provider

mod error;
mod http;
mod provider;
mod types;

use reqwest::Client;

use crate::error::Result;
use crate::providers::common::create_http_client;

pub(crate) use types::{PixabayHit, PixabayResponse};

pub(crate) const PIXABAY_API_BASE: &str = "https://pixabay.com/api/";
/// Pixabay 单页最小记录数
pub(crate) const MIN_PAGE_SIZE: u32 = 3;
/// Pixabay 单页最大记录数
pub(crate) const MAX_PAGE_SIZE: u32 = 200;

/// Pixabay image search provider
pub struct PixabayProvider {
    pub(crate) client: Client,
    pub(crate) api_key: String,
    pub(crate) base_url: String,
}

impl PixabayProvider {
    /// Create a provider talking to the public Pixabay endpoint.
    pub fn new(api_key: String) -> Result<Self> {
        Self::with_base_url(api_key, PIXABAY_API_BASE)
    }

    /// Create a provider against a different endpoint (proxies, local test servers).
    pub fn with_base_url(api_key: String, base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: create_http_client("pixabay")?,
            api_key,
            base_url: base_url.into(),
        })
    }
}
