//! 应用主循环
//!
//! ```text
//! loop {
//!     交付后台结果        // BackendEvent -> update
//!     处理关闭信号        // session.pump_dismissals()
//!     执行副作用          // pending_fetch / preferences_changed
//!     渲染 UI
//!     if should_quit { break }
//!     轮询按键（100ms）   // Event -> AppMessage -> update
//! }
//! ```

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::backend::{BackendEvent, ConfigService, Fetcher};
use crate::event;
use crate::i18n::set_language;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;
use crate::view::theme::set_theme;

/// 运行应用主循环
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    fetcher: &Fetcher,
    events: &mut UnboundedReceiver<BackendEvent>,
    config_service: &dyn ConfigService,
) -> Result<()> {
    let size = terminal.size()?;
    update::update(
        app,
        AppMessage::Resize {
            width: size.width,
            height: size.height,
        },
    );

    loop {
        // 1. 交付后台结果
        while let Ok(backend_event) = events.try_recv() {
            update::update(app, AppMessage::Backend(backend_event));
        }

        // 2. 其他地方发出的关闭信号
        app.session.pump_dismissals();

        // 3. 执行 Update 层留下的副作用
        dispatch_effects(app, fetcher, config_service);

        // 4. 渲染 UI
        terminal.draw(|frame| view::render(app, frame))?;

        if app.should_quit {
            break;
        }

        // 5. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            let msg = event::handle_event(event, app);
            update::update(app, msg);
        }
    }

    log::info!("Exiting");
    Ok(())
}

fn dispatch_effects(app: &mut App, fetcher: &Fetcher, config_service: &dyn ConfigService) {
    if let Some(ticket) = app.take_pending_fetch() {
        fetcher.spawn_fetch(ticket);
    }

    if app.take_preferences_changed() {
        set_language(app.config.language);
        set_theme(app.config.theme);
        if let Err(e) = config_service.save(&app.config) {
            log::warn!("Failed to save preferences: {e}");
            app.set_error(e.to_string());
        }
    }
}
