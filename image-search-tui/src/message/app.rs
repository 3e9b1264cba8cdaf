use super::{PreviewMessage, ResultsMessage, SearchMessage};
use crate::backend::BackendEvent;

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 在搜索框和结果网格之间切换焦点
    ToggleFocus,

    /// 焦点回到搜索框
    FocusSearch,

    /// 搜索框相关消息
    Search(SearchMessage),

    /// 结果网格相关消息
    Results(ResultsMessage),

    /// 预览弹窗相关消息
    Preview(PreviewMessage),

    /// 后台任务完成
    Backend(BackendEvent),

    /// 终端窗口大小改变
    Resize { width: u16, height: u16 },

    /// 切换深色 / 浅色主题
    ToggleTheme,

    /// 切换界面语言
    ToggleLanguage,

    /// 清除状态消息
    ClearStatus,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
