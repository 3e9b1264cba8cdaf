//! Util 层：与业务无关的基础设施
//!
//! 负责终端的初始化和恢复。`main` 在进入主循环前调用
//! [`install_panic_hook`] 和 [`init_terminal`]，主循环返回后（无论成败）立即调用 [`restore_terminal`]。

mod terminal;

pub use terminal::{init_terminal, install_panic_hook, restore_terminal, Term};
