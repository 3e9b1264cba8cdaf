use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::{SearchPage, SearchParams};

/// 原始 API 错误（内部使用）
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// 错误码（HTTP 状态码）
    pub code: Option<String>,
    /// 原始错误消息（响应体）
    pub message: String,
}

impl RawApiError {
    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

/// 错误上下文信息（内部使用）
/// 用于在映射错误时提供额外信息
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// 请求的页码（用于 `InvalidParameter` 错误）
    pub page: Option<u32>,
}

/// Provider 错误映射 Trait（内部使用）
/// 各 Provider 实现此 trait 以将原始 API 错误映射到统一错误类型
pub(crate) trait ProviderErrorMapper {
    /// 返回 Provider 标识符
    fn provider_name(&self) -> &'static str;

    /// 将原始 API 错误映射到统一错误类型
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    /// 快捷方法：未知错误（fallback）
    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::Unknown {
            provider: self.provider_name().to_string(),
            raw_code: raw.code,
            raw_message: raw.message,
        }
    }
}

/// 图片搜索提供商 Trait
#[async_trait]
pub trait ImageSearchProvider: Send + Sync {
    /// 提供商标识符
    fn id(&self) -> &'static str;

    /// 验证 API key 是否有效
    ///
    /// 凭证被拒绝时返回 `Ok(false)`，其他失败原样返回。
    async fn validate_credentials(&self) -> Result<bool>;

    /// 按关键词搜索一页图片
    ///
    /// 查询词不做 trim 或改写，原样发送。
    async fn search(&self, params: &SearchParams) -> Result<SearchPage>;
}
