//! 快捷键配置

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const SWITCH_FOCUS: KeyBinding = KeyBinding::key(KeyCode::Tab);
    pub const TOGGLE_THEME: KeyBinding = KeyBinding::alt(KeyCode::Char('t'));
    pub const TOGGLE_LANGUAGE: KeyBinding = KeyBinding::alt(KeyCode::Char('l'));

    // 搜索框
    pub const SUBMIT: KeyBinding = KeyBinding::key(KeyCode::Enter);
    pub const CLEAR: KeyBinding = KeyBinding::key(KeyCode::Esc);

    // 结果网格
    pub const OPEN: KeyBinding = KeyBinding::key(KeyCode::Enter);
    pub const LOAD_MORE: KeyBinding = KeyBinding::key(KeyCode::Char('m'));
    pub const FOCUS_SEARCH: KeyBinding = KeyBinding::key(KeyCode::Char('/'));

    // 预览
    pub const DISMISS: KeyBinding = KeyBinding::key(KeyCode::Esc);
    pub const CLOSE: KeyBinding = KeyBinding::key(KeyCode::Enter);
}
