//! Model 层：应用状态
//!
//! 只有 Update 层修改这里的状态；View 层只读。

mod app;
mod focus;
mod grid;

pub use app::App;
pub use focus::FocusPanel;
pub use grid::{GridState, CARD_HEIGHT, CARD_WIDTH};
