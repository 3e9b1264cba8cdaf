//! Pixabay HTTP 请求方法

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};
use crate::types::SearchParams;
use crate::utils::log_sanitizer::{redact_query_param, truncate_for_log};

use super::{MAX_PAGE_SIZE, MIN_PAGE_SIZE, PixabayProvider, PixabayResponse};

impl PixabayProvider {
    /// 构建搜索 URL
    ///
    /// 参数顺序：`q`, `page`, `key`, `image_type`, `orientation`, `per_page`。
    pub(crate) fn build_search_url(&self, params: &SearchParams) -> String {
        format!(
            "{}?q={}&page={}&key={}&image_type={}&orientation={}&per_page={}",
            self.base_url,
            urlencoding::encode(&params.query),
            params.page,
            urlencoding::encode(&self.api_key),
            params.image_type.as_str(),
            params.orientation.as_str(),
            params.per_page,
        )
    }

    /// 执行搜索请求并解析响应
    pub(crate) async fn get_search(&self, params: &SearchParams) -> Result<PixabayResponse> {
        let params = params.validated(MIN_PAGE_SIZE, MAX_PAGE_SIZE);
        let url = self.build_search_url(&params);
        let url_for_log = redact_query_param(&url, "key");

        let (status, body) = HttpUtils::execute_request(
            self.client.get(&url),
            self.provider_name(),
            "GET",
            &url_for_log,
        )
        .await?;

        if !(200..300).contains(&status) {
            log::debug!(
                "[{}] API error (HTTP {status}): {}",
                self.provider_name(),
                truncate_for_log(&body)
            );
            return Err(self.map_error(
                RawApiError::with_code(status.to_string(), body.trim()),
                ErrorContext {
                    page: Some(params.page),
                },
            ));
        }

        HttpUtils::parse_json(&body, self.provider_name())
    }
}
