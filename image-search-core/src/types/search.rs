//! 搜索会话相关类型

use serde::Serialize;

use image_search_provider::ImageRecord;

/// 搜索会话的全部可变状态
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchState {
    /// 最近一次提交的查询词（已 trim，非空；初始为空串）
    pub query: String,
    /// 最近一次请求的页码，从 1 开始
    pub page: u32,
    /// 当前查询已累积的结果，按到达顺序排列
    pub results: Vec<ImageRecord>,
    /// API 报告的可访问结果总数
    pub total_available: u32,
    /// 是否有请求在途
    pub is_loading: bool,
    /// 预览层中展示的图片
    pub selected_image: Option<ImageRecord>,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            query: String::new(),
            page: 1,
            results: Vec::new(),
            total_available: 0,
            is_loading: false,
            selected_image: None,
        }
    }
}

/// 一次页面请求的凭据
///
/// 只有与会话当前在途凭据相同的结果才会被接受。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    /// 发起请求时的查询代数
    pub generation: u64,
    /// 请求的查询词
    pub query: String,
    /// 请求的页码
    pub page: u32,
}

/// 会话向展示层发出的一次性事件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// 追加页到达，展示层应滚动到第一条新结果
    ScrollToAppended {
        /// 第一条新结果在 `results` 中的下标
        first_new_index: usize,
    },
}

/// 从 [`SearchState`] 派生的只读视图，每次按需计算
#[derive(Debug, Clone, Copy)]
pub struct ViewModel<'a> {
    pub query: &'a str,
    pub page: u32,
    pub results: &'a [ImageRecord],
    pub total_available: u32,
    pub is_loading: bool,
    pub selected_image: Option<&'a ImageRecord>,
    /// 至少有一条结果
    pub has_results: bool,
    /// 还有更多结果可加载（显示 "加载更多"）
    pub has_more: bool,
    /// 结果已全部加载（显示 "没有更多结果"）
    pub exhausted: bool,
}

impl<'a> ViewModel<'a> {
    /// 从状态派生视图
    pub fn derive(state: &'a SearchState) -> Self {
        let has_results = !state.results.is_empty();
        let loaded = state.results.len();
        let total = state.total_available as usize;

        Self {
            query: &state.query,
            page: state.page,
            results: &state.results,
            total_available: state.total_available,
            is_loading: state.is_loading,
            selected_image: state.selected_image.as_ref(),
            has_results,
            has_more: has_results && loaded < total && !state.is_loading,
            exhausted: has_results && loaded >= total && !state.is_loading,
        }
    }
}
