//! Event 层：把终端事件翻译成 [`AppMessage`](crate::message::AppMessage)
//!
//! 翻译只读取状态，不做修改。按键含义取决于焦点所在面板，
//! 预览弹窗打开时由弹窗独占输入。

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
