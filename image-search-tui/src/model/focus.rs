//! 焦点面板

/// 当前接收按键的面板
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// 顶部搜索框
    #[default]
    SearchBar,
    /// 结果网格
    Results,
}

impl FocusPanel {
    /// 切换到另一个面板
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            FocusPanel::SearchBar => FocusPanel::Results,
            FocusPanel::Results => FocusPanel::SearchBar,
        }
    }

    pub fn is_search_bar(self) -> bool {
        matches!(self, FocusPanel::SearchBar)
    }

    pub fn is_results(self) -> bool {
        matches!(self, FocusPanel::Results)
    }
}
