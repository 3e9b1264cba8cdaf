//! 英文翻译 (en-US)

use super::keys::{
    CommonTexts, HintTexts, PaginationTexts, PreviewTexts, ResultsTexts, SearchTexts, StatusTexts,
    Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "Image Search",
        loading: "Loading...",
    },

    search: SearchTexts {
        title: "Search",
        placeholder: "Search images and photos",
    },

    results: ResultsTexts {
        title: "Results",
        prompt: "Type a query and press Enter",
        no_results: "No images found",
    },

    pagination: PaginationTexts {
        load_more: "Load more",
        no_more: "No more results",
    },

    preview: PreviewTexts {
        title: "Preview",
        id: "ID",
        tags: "Tags",
        full_url: "Image",
        preview_url: "Preview",
        close_hint: "Esc / Enter to close",
    },

    hints: HintTexts {
        switch_focus: "Switch",
        submit: "Search",
        clear: "Clear",
        move_cursor: "Move",
        open: "Open",
        load_more: "More",
        close: "Close",
        theme: "Theme",
        language: "Language",
        quit: "Quit",
    },

    status: StatusTexts {
        fetch_failed: "Search failed: {error}",
        no_results_for: "No images found for \"{query}\"",
        key_ok: "API key accepted",
        key_rejected: "API key rejected, check PIXABAY_API_KEY",
        key_check_failed: "Could not verify API key: {error}",
    },
};
