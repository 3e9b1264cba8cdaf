//! Image Search TUI
//!
//! 在终端中搜索 Pixabay 图片。
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置与后台请求 (`backend/`)
//!
//! ## 启动顺序
//!
//! 1. 读取配置（缺少 API key 时在进入 TUI 之前报错退出）
//! 2. 初始化文件日志，应用语言和主题
//! 3. 创建 tokio 运行时和 Provider，后台验证 API key
//! 4. 初始化终端，运行主循环，最后恢复终端

mod app;
mod backend;
mod event;
pub mod i18n;
mod logging;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::{Context, Result};
use image_search_core::{connect_provider, DismissalSignal};

use backend::{ConfigService, Fetcher, LocalConfigService};
use util::{init_terminal, install_panic_hook, restore_terminal};

fn main() -> Result<()> {
    // 1. 配置
    let config_service = LocalConfigService::new();
    let config = config_service.load().with_context(|| {
        format!(
            "Failed to load configuration from {}",
            config_service.path().display()
        )
    })?;

    // 2. 日志（guard 存活到 main 结束）
    let _log_guard = logging::init(&config.log_dir)?;
    tracing::info!("Image Search v{} starting", env!("CARGO_PKG_VERSION"));
    i18n::set_language(config.language);
    view::theme::set_theme(config.theme);

    // 3. 运行时与 Provider
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    let provider = connect_provider(&config.api_key)?;
    let (fetcher, mut events) = Fetcher::new(provider, runtime.handle().clone());
    fetcher.spawn_credential_check();

    // 4. 终端
    install_panic_hook();
    let mut terminal = init_terminal()?;
    let mut app = model::App::new(config, DismissalSignal::global().clone());

    let result = app::run(
        &mut terminal,
        &mut app,
        &fetcher,
        &mut events,
        &config_service,
    );

    if let Err(e) = &result {
        tracing::error!("Main loop failed: {e:#}");
    }

    // 无论成功失败都恢复终端
    finish(result, restore_terminal(&mut terminal))
}

/// 合并主循环与终端恢复的结果，主循环的错误优先
fn finish(result: Result<()>, restored: Result<()>) -> Result<()> {
    match (result, restored) {
        (Err(e), Err(restore_err)) => {
            tracing::error!("Failed to restore terminal: {restore_err:#}");
            Err(e)
        }
        (Ok(()), Err(restore_err)) => Err(restore_err),
        (result, Ok(())) => result,
    }
}
