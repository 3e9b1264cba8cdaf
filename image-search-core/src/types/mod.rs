//! 类型定义模块

mod search;

pub use search::{FetchTicket, SearchState, SessionEvent, ViewModel};

// Re-export provider 库的公共类型
pub use image_search_provider::{ImageRecord, SearchPage, SearchParams};
