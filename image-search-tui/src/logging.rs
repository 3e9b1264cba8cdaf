//! 日志初始化
//!
//! 终端被 TUI 占用，日志写入 `<log_dir>/image-search.log.<日期>`。
//! 级别由 `RUST_LOG` 控制，默认 `info`。库中的 `log` 记录经由
//! tracing-subscriber 的 `tracing-log` 桥接一并输出。

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE_PREFIX: &str = "image-search.log";

/// 安装全局日志订阅者
///
/// 返回的 guard 必须存活到程序退出，否则缓冲中的日志会丢失。
pub fn init(log_dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .with(filter)
        .try_init()
        .context("Failed to install log subscriber")?;

    Ok(guard)
}
