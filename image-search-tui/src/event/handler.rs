//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, PreviewMessage, ResultsMessage, SearchMessage};
use crate::model::App;

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        Event::Resize(width, height) => AppMessage::Resize { width, height },
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat（Windows 终端会重复上报）
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 预览打开时独占输入
    if app.preview_open() {
        return handle_preview_keys(key);
    }

    if DefaultKeymap::TOGGLE_THEME.matches(&key) {
        return AppMessage::ToggleTheme;
    }
    if DefaultKeymap::TOGGLE_LANGUAGE.matches(&key) {
        return AppMessage::ToggleLanguage;
    }
    if DefaultKeymap::SWITCH_FOCUS.matches(&key) {
        return AppMessage::ToggleFocus;
    }

    if app.focus.is_search_bar() {
        handle_search_keys(key)
    } else {
        handle_results_keys(key)
    }
}

/// 预览弹窗按键
fn handle_preview_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::DISMISS.matches(&key) {
        return AppMessage::Preview(PreviewMessage::Escape);
    }
    if DefaultKeymap::CLOSE.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Preview(PreviewMessage::Close);
    }
    AppMessage::Noop
}

/// 搜索框按键
fn handle_search_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::SUBMIT.matches(&key) {
        return AppMessage::Search(SearchMessage::Submit);
    }
    if DefaultKeymap::CLEAR.matches(&key) {
        return AppMessage::Search(SearchMessage::Clear);
    }

    match key.code {
        KeyCode::Backspace => AppMessage::Search(SearchMessage::Backspace),
        // ↓ 进入结果网格
        KeyCode::Down => AppMessage::ToggleFocus,
        KeyCode::Char(c)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            AppMessage::Search(SearchMessage::Input(c))
        }
        _ => AppMessage::Noop,
    }
}

/// 结果网格按键
fn handle_results_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::OPEN.matches(&key) {
        return AppMessage::Results(ResultsMessage::Open);
    }
    if DefaultKeymap::LOAD_MORE.matches(&key) {
        return AppMessage::Results(ResultsMessage::LoadMore);
    }
    if DefaultKeymap::FOCUS_SEARCH.matches(&key) {
        return AppMessage::FocusSearch;
    }
    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if !key.modifiers.is_empty() {
        return AppMessage::Noop;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Results(ResultsMessage::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Results(ResultsMessage::MoveDown),
        KeyCode::Left | KeyCode::Char('h') => AppMessage::Results(ResultsMessage::MoveLeft),
        KeyCode::Right | KeyCode::Char('l') => AppMessage::Results(ResultsMessage::MoveRight),
        KeyCode::Home => AppMessage::Results(ResultsMessage::First),
        KeyCode::End => AppMessage::Results(ResultsMessage::Last),
        KeyCode::Esc => AppMessage::ClearStatus,
        _ => AppMessage::Noop,
    }
}
