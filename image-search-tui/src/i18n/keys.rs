//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **跨组件复用归 `common.*`**：多处使用的通用词汇
//! 3. **键盘提示归 `hints.*`**：按键动作说明
//! 4. **状态栏消息归 `status.*`**：含 `{query}` / `{error}` 占位符

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 搜索栏文本
    pub search: SearchTexts,
    /// 结果网格文本
    pub results: ResultsTexts,
    /// 分页提示文本
    pub pagination: PaginationTexts,
    /// 预览弹窗文本
    pub preview: PreviewTexts,
    /// 键盘提示
    pub hints: HintTexts,
    /// 状态栏消息
    pub status: StatusTexts,
}

/// 通用文本
pub struct CommonTexts {
    pub app_name: &'static str,
    pub loading: &'static str,
}

/// 搜索栏
pub struct SearchTexts {
    pub title: &'static str,
    pub placeholder: &'static str,
}

/// 结果网格
pub struct ResultsTexts {
    pub title: &'static str,
    /// 尚未搜索时的提示
    pub prompt: &'static str,
    /// 查询没有任何结果
    pub no_results: &'static str,
}

/// 分页提示
pub struct PaginationTexts {
    pub load_more: &'static str,
    pub no_more: &'static str,
}

/// 预览弹窗
pub struct PreviewTexts {
    pub title: &'static str,
    pub id: &'static str,
    pub tags: &'static str,
    pub full_url: &'static str,
    pub preview_url: &'static str,
    pub close_hint: &'static str,
}

/// 键盘提示（动作词）
pub struct HintTexts {
    pub switch_focus: &'static str,
    pub submit: &'static str,
    pub clear: &'static str,
    pub move_cursor: &'static str,
    pub open: &'static str,
    pub load_more: &'static str,
    pub close: &'static str,
    pub theme: &'static str,
    pub language: &'static str,
    pub quit: &'static str,
}

/// 状态栏消息
pub struct StatusTexts {
    /// 含 `{error}`
    pub fetch_failed: &'static str,
    /// 含 `{query}`
    pub no_results_for: &'static str,
    pub key_ok: &'static str,
    pub key_rejected: &'static str,
    /// 含 `{error}`
    pub key_check_failed: &'static str,
}
