//! 测试辅助模块
//!
//! 提供 mock Provider 和便捷的测试工厂方法。

use std::collections::HashMap;
use std::ops::Range;
use std::sync::Arc;

use async_trait::async_trait;
use image_search_provider::{
    ImageRecord, ImageSearchProvider, PaginatedResponse, ProviderError, SearchPage, SearchParams,
    DEFAULT_PAGE_SIZE,
};
use tokio::sync::{Notify, RwLock};

type ScriptedResponse = Result<SearchPage, ProviderError>;

/// 构造测试图片
pub fn record(id: u64) -> ImageRecord {
    ImageRecord {
        id,
        preview_url: format!("https://cdn.example/{id}_640.jpg"),
        full_url: format!("https://cdn.example/{id}_1280.jpg"),
        tags: format!("tag{id}, test"),
    }
}

/// 构造一页结果，`ids` 决定条目
pub fn page_of(ids: Range<u64>, page: u32, total: u32) -> SearchPage {
    PaginatedResponse::new(ids.map(record).collect(), page, DEFAULT_PAGE_SIZE, total)
}

// ===== MockProvider =====

/// 按 `(query, page)` 预设响应的 Provider
pub struct MockProvider {
    responses: RwLock<HashMap<(String, u32), ScriptedResponse>>,
    requests: RwLock<Vec<SearchParams>>,
    /// 对应查询的请求会等待 `Notify` 放行
    gates: RwLock<HashMap<String, Arc<Notify>>>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self {
            responses: RwLock::new(HashMap::new()),
            requests: RwLock::new(Vec::new()),
            gates: RwLock::new(HashMap::new()),
        }
    }

    /// 预设一次性响应
    pub async fn respond(&self, query: &str, page: u32, response: ScriptedResponse) {
        self.responses
            .write()
            .await
            .insert((query.to_string(), page), response);
    }

    /// 让 `query` 的请求挂起，直到返回的 `Notify` 被触发
    pub async fn gate(&self, query: &str) -> Arc<Notify> {
        let notify = Arc::new(Notify::new());
        self.gates
            .write()
            .await
            .insert(query.to_string(), Arc::clone(&notify));
        notify
    }

    /// 已收到的请求（按到达顺序）
    pub async fn requests(&self) -> Vec<SearchParams> {
        self.requests.read().await.clone()
    }
}

#[async_trait]
impl ImageSearchProvider for MockProvider {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn validate_credentials(&self) -> image_search_provider::Result<bool> {
        Ok(true)
    }

    async fn search(&self, params: &SearchParams) -> image_search_provider::Result<SearchPage> {
        self.requests.write().await.push(params.clone());

        let gate = self.gates.read().await.get(&params.query).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        self.responses
            .write()
            .await
            .remove(&(params.query.clone(), params.page))
            .unwrap_or_else(|| {
                Err(ProviderError::ParseError {
                    provider: "mock".to_string(),
                    detail: format!("no scripted response for {params:?}"),
                })
            })
    }
}
