//! 简体中文翻译 (zh-CN)

use super::keys::{
    CommonTexts, HintTexts, PaginationTexts, PreviewTexts, ResultsTexts, SearchTexts, StatusTexts,
    Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "图片搜索",
        loading: "加载中...",
    },

    search: SearchTexts {
        title: "搜索",
        placeholder: "搜索图片和照片",
    },

    results: ResultsTexts {
        title: "结果",
        prompt: "输入关键词后按 Enter",
        no_results: "没有找到图片",
    },

    pagination: PaginationTexts {
        load_more: "加载更多",
        no_more: "没有更多结果",
    },

    preview: PreviewTexts {
        title: "预览",
        id: "ID",
        tags: "标签",
        full_url: "大图",
        preview_url: "缩略图",
        close_hint: "Esc / Enter 关闭",
    },

    hints: HintTexts {
        switch_focus: "切换",
        submit: "搜索",
        clear: "清空",
        move_cursor: "移动",
        open: "打开",
        load_more: "更多",
        close: "关闭",
        theme: "主题",
        language: "语言",
        quit: "退出",
    },

    status: StatusTexts {
        fetch_failed: "搜索失败：{error}",
        no_results_for: "没有找到与“{query}”相关的图片",
        key_ok: "API key 有效",
        key_rejected: "API key 无效，请检查 PIXABAY_API_KEY",
        key_check_failed: "无法验证 API key：{error}",
    },
};
