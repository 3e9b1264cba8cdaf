//! Backend 层：配置读写与后台请求
//!
//! Update 层保持同步、无副作用；需要 I/O 的操作由主循环通过这里执行。

mod config_service;
mod fetcher;

pub use config_service::{AppConfig, ConfigService, LocalConfigService};
pub use fetcher::{BackendEvent, Fetcher};

#[cfg(test)]
pub(crate) mod test_support {
    use async_trait::async_trait;
    use image_search_provider::{
        ImageRecord, ImageSearchProvider, PaginatedResponse, SearchPage, SearchParams,
    };

    use super::config_service::ConfigError;
    use super::{AppConfig, ConfigService};

    /// 每页 2 条、共 10 条的固定 Provider，标签即查询词
    pub struct StubProvider;

    #[async_trait]
    impl ImageSearchProvider for StubProvider {
        fn id(&self) -> &'static str {
            "stub"
        }

        async fn validate_credentials(&self) -> image_search_provider::Result<bool> {
            Ok(true)
        }

        async fn search(&self, params: &SearchParams) -> image_search_provider::Result<SearchPage> {
            let first = u64::from(params.page.saturating_sub(1)) * 2;
            let items = (first..first + 2)
                .map(|id| ImageRecord {
                    id,
                    preview_url: format!("https://cdn.example/{id}_640.jpg"),
                    full_url: format!("https://cdn.example/{id}_1280.jpg"),
                    tags: params.query.clone(),
                })
                .collect();
            Ok(PaginatedResponse::new(items, params.page, 2, 10))
        }
    }

    /// 不读写任何文件
    pub struct NullConfigService;

    impl ConfigService for NullConfigService {
        fn load(&self) -> Result<AppConfig, ConfigError> {
            Ok(AppConfig::default())
        }

        fn save(&self, _config: &AppConfig) -> Result<(), ConfigError> {
            Ok(())
        }
    }
}
