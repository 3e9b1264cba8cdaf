//! 业务逻辑服务层

mod search_session;

pub use search_session::SearchSession;

use std::sync::Arc;

use image_search_provider::{
    create_provider, ImageSearchProvider, ProviderCredentials, SearchPage, SearchParams,
};

use crate::error::{CoreError, CoreResult, FetchFailure};

/// 请求 `query` 的第 `page` 页（无状态）
///
/// 查询词原样传给 Provider，页大小固定为 12。
pub async fn fetch_page(
    provider: &dyn ImageSearchProvider,
    query: &str,
    page: u32,
) -> Result<SearchPage, FetchFailure> {
    let params = SearchParams::for_page(query, page);
    provider
        .search(&params)
        .await
        .map_err(|source| FetchFailure {
            query: query.to_string(),
            page,
            source,
        })
}

/// 根据 API key 创建默认（Pixabay）Provider
pub fn connect_provider(api_key: &str) -> CoreResult<Arc<dyn ImageSearchProvider>> {
    let api_key = api_key.trim();
    if api_key.is_empty() {
        return Err(CoreError::Validation("API key is empty".to_string()));
    }
    let provider = create_provider(ProviderCredentials::Pixabay {
        api_key: api_key.to_string(),
    })?;
    log::info!("Using image search provider: {}", provider.id());
    Ok(provider)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{page_of, MockProvider};
    use image_search_provider::ProviderError;

    #[tokio::test]
    async fn fetch_page_passes_query_and_page_through() {
        let provider = MockProvider::new();
        provider.respond("cats", 3, Ok(page_of(24..36, 3, 40))).await;

        let page = fetch_page(&provider, "cats", 3).await.unwrap();
        assert_eq!(page.items.len(), 12);
        assert_eq!(page.total_count, 40);

        let requests = provider.requests().await;
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].query, "cats");
        assert_eq!(requests[0].page, 3);
        assert_eq!(requests[0].per_page, 12);
    }

    #[tokio::test]
    async fn fetch_page_wraps_provider_error() {
        let provider = MockProvider::new();
        provider
            .respond(
                "cats",
                1,
                Err(ProviderError::NetworkError {
                    provider: "mock".to_string(),
                    detail: "refused".to_string(),
                }),
            )
            .await;

        let failure = fetch_page(&provider, "cats", 1).await.unwrap_err();
        assert_eq!(failure.query, "cats");
        assert_eq!(failure.page, 1);
        assert!(matches!(failure.source, ProviderError::NetworkError { .. }));
    }

    #[test]
    fn connect_provider_rejects_blank_key() {
        assert!(matches!(
            connect_provider("  "),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn connect_provider_builds_pixabay() {
        let provider = connect_provider(" key ").unwrap();
        assert_eq!(provider.id(), "pixabay");
    }
}
