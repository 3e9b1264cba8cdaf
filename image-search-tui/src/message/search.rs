/// 搜索框消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchMessage {
    /// 输入一个字符
    Input(char),
    /// 删除最后一个字符
    Backspace,
    /// 清空输入
    Clear,
    /// 提交查询
    Submit,
}
