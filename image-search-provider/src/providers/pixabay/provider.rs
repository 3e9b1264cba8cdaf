//! Pixabay `ImageSearchProvider` trait 实现

use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::providers::common::split_tags;
use crate::traits::{ImageSearchProvider, ProviderErrorMapper};
use crate::types::{ImageRecord, PaginatedResponse, SearchPage, SearchParams};

use super::{MAX_PAGE_SIZE, MIN_PAGE_SIZE, PixabayHit, PixabayProvider};

impl PixabayProvider {
    /// 将 Pixabay hit 转换为 `ImageRecord`
    pub(crate) fn hit_to_record(hit: PixabayHit) -> ImageRecord {
        ImageRecord {
            id: hit.id,
            preview_url: hit.webformat_url,
            full_url: hit.large_image_url,
            tags: split_tags(&hit.tags).join(", "),
        }
    }
}

#[async_trait]
impl ImageSearchProvider for PixabayProvider {
    fn id(&self) -> &'static str {
        "pixabay"
    }

    async fn validate_credentials(&self) -> Result<bool> {
        let params = SearchParams {
            per_page: MIN_PAGE_SIZE,
            ..SearchParams::default()
        };
        match self.get_search(&params).await {
            Ok(_) => Ok(true),
            Err(ProviderError::InvalidCredentials { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    async fn search(&self, params: &SearchParams) -> Result<SearchPage> {
        let params = params.validated(MIN_PAGE_SIZE, MAX_PAGE_SIZE);
        let response = self.get_search(&params).await?;

        log::debug!(
            "[{}] page {} returned {} hits of {}",
            self.provider_name(),
            params.page,
            response.hits.len(),
            response.total_hits
        );

        let items = response
            .hits
            .into_iter()
            .map(Self::hit_to_record)
            .collect();

        Ok(PaginatedResponse::new(
            items,
            params.page,
            params.per_page,
            response.total_hits,
        ))
    }
}
