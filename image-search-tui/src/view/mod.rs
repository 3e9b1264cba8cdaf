//! View 层：根据 Model 渲染界面，只读
//!
//! ```text
//! ┌ Image Search ─────────────────────────┐  标题栏
//! │ Search: yellow flowers_               │  搜索框
//! ├───────────────────────────────────────┤
//! │ ┌────────┐ ┌────────┐ ┌────────┐      │  结果网格
//! │ └────────┘ └────────┘ └────────┘      │
//! ├───────────────────────────────────────┤
//! │        m  Load more (12/30)           │  分页提示
//! │ Tab Switch │ Enter Open │ ...         │  状态栏
//! └───────────────────────────────────────┘
//! ```
//!
//! 预览弹窗最后绘制，覆盖在最上层。

pub mod components;
pub mod layout;
pub mod theme;

pub use layout::render;
