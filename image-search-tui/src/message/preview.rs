/// 预览弹窗消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewMessage {
    /// 直接关闭（Enter / q）
    Close,
    /// Esc：通过全局关闭信号关闭
    Escape,
}
