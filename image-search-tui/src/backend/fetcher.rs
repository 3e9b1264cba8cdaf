//! 后台请求
//!
//! 主循环是同步的。搜索请求在 tokio 运行时上执行，完成后通过
//! mpsc 通道把 [`BackendEvent`] 送回主循环，由 Update 层交付给会话。

use std::sync::Arc;

use image_search_core::{fetch_page, FetchFailure, FetchTicket};
use image_search_provider::{ImageSearchProvider, ProviderError, SearchPage};
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// 后台任务结果
#[derive(Debug, Clone)]
pub enum BackendEvent {
    /// 一页搜索结果（或失败）
    PageFetched {
        ticket: FetchTicket,
        outcome: Result<SearchPage, FetchFailure>,
    },
    /// 启动时的 API key 检查结果
    CredentialsChecked(Result<bool, ProviderError>),
}

/// 在运行时上派发请求
pub struct Fetcher {
    provider: Arc<dyn ImageSearchProvider>,
    handle: Handle,
    tx: UnboundedSender<BackendEvent>,
}

impl Fetcher {
    /// 创建派发器及接收结果的通道
    pub fn new(
        provider: Arc<dyn ImageSearchProvider>,
        handle: Handle,
    ) -> (Self, UnboundedReceiver<BackendEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                provider,
                handle,
                tx,
            },
            rx,
        )
    }

    /// 请求 `ticket` 对应的页
    pub fn spawn_fetch(&self, ticket: FetchTicket) {
        let provider = Arc::clone(&self.provider);
        let tx = self.tx.clone();
        self.handle.spawn(async move {
            let outcome = fetch_page(provider.as_ref(), &ticket.query, ticket.page).await;
            deliver(&tx, BackendEvent::PageFetched { ticket, outcome });
        });
    }

    /// 验证 API key
    pub fn spawn_credential_check(&self) {
        let provider = Arc::clone(&self.provider);
        let tx = self.tx.clone();
        self.handle.spawn(async move {
            let result = provider.validate_credentials().await;
            match &result {
                Ok(true) => log::info!("API key accepted by {}", provider.id()),
                Ok(false) => log::warn!("API key rejected by {}", provider.id()),
                Err(e) => log::warn!("Credential check failed: {e}"),
            }
            deliver(&tx, BackendEvent::CredentialsChecked(result));
        });
    }
}

/// 把结果送回主循环；主循环已退出时记录并丢弃
fn deliver(tx: &UnboundedSender<BackendEvent>, event: BackendEvent) -> bool {
    match tx.send(event) {
        Ok(()) => true,
        Err(err) => {
            let what = match err.0 {
                BackendEvent::PageFetched { .. } => "page result",
                BackendEvent::CredentialsChecked(_) => "credential check result",
            };
            log::debug!("Main loop gone, dropping {what}");
            false
        }
    }
}
