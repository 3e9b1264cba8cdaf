/// 结果网格消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultsMessage {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    /// 跳到第一张
    First,
    /// 跳到最后一张
    Last,
    /// 打开光标处图片的预览
    Open,
    /// 加载下一页
    LoadMore,
}
