//! Message 层：Event 层翻译出的、Update 层消费的消息
//!
//! ```text
//!  按键 ─▶ Event ─▶ AppMessage ─▶ Update ─▶ Model ─▶ View
//!                      ▲
//!  Backend 任务 ───────┘ (BackendEvent)
//! ```

mod app;
mod preview;
mod results;
mod search;

pub use app::AppMessage;
pub use preview::PreviewMessage;
pub use results::ResultsMessage;
pub use search::SearchMessage;
