//! Update 层：唯一修改 [`App`] 的地方
//!
//! 这里不做 I/O。需要请求网络或写配置时，只在 `App` 上留下标记
//! （`pending_fetch` / `preferences_changed`），由主循环执行。

mod backend;
mod preview;
mod results;
mod search;

use ratatui::layout::Rect;

use crate::message::AppMessage;
use crate::model::App;
use crate::view::layout::results_inner_area;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            if !app.preview_open() {
                app.focus = app.focus.toggle();
            }
        }

        AppMessage::FocusSearch => {
            app.focus = crate::model::FocusPanel::SearchBar;
        }

        AppMessage::Search(search_msg) => search::update(app, search_msg),

        AppMessage::Results(results_msg) => results::update(app, results_msg),

        AppMessage::Preview(preview_msg) => preview::update(app, preview_msg),

        AppMessage::Backend(event) => backend::update(app, event),

        AppMessage::Resize { width, height } => {
            let inner = results_inner_area(Rect::new(0, 0, width, height));
            app.grid.set_viewport(inner.width, inner.height);
        }

        AppMessage::ToggleTheme => {
            app.config.theme = app.config.theme.toggle();
            app.preferences_changed = true;
        }

        AppMessage::ToggleLanguage => {
            app.config.language = app.config.language.next();
            app.preferences_changed = true;
        }

        AppMessage::ClearStatus => {
            app.clear_status();
        }

        AppMessage::Noop => {}
    }
}
