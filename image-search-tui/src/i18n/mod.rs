//! 国际化（i18n）
//!
//! 通过全局原子变量保存当前语言，`t()` 返回对应的翻译表。
//! 翻译表是编译期常量，切换语言只是切换引用。

use std::sync::atomic::{AtomicUsize, Ordering};

mod en_us;
pub mod keys;
mod zh_cn;

pub use keys::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// 英语（美国）
    #[default]
    EnUs,
    /// 简体中文（中国）
    ZhCn,
}

impl Language {
    /// 获取语言的显示名称（使用该语言本身的文字）
    pub fn display_name(self) -> &'static str {
        match self {
            Language::EnUs => "English",
            Language::ZhCn => "简体中文",
        }
    }

    /// 获取语言代码（BCP 47 标准）
    pub fn code(self) -> &'static str {
        match self {
            Language::EnUs => "en-US",
            Language::ZhCn => "zh-CN",
        }
    }

    /// 从语言代码解析
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "en-US" | "en" => Some(Language::EnUs),
            "zh-CN" | "zh" => Some(Language::ZhCn),
            _ => None,
        }
    }

    /// 获取下一个语言（用于循环切换）
    #[must_use]
    pub fn next(self) -> Language {
        match self {
            Language::EnUs => Language::ZhCn,
            Language::ZhCn => Language::EnUs,
        }
    }

    /// 该语言的翻译表
    pub fn translations(self) -> &'static Translations {
        match self {
            Language::EnUs => &en_us::TRANSLATIONS,
            Language::ZhCn => &zh_cn::TRANSLATIONS,
        }
    }
}

static CURRENT_LANGUAGE: AtomicUsize = AtomicUsize::new(0); // 0 = EnUs

pub fn t() -> &'static Translations {
    current_language().translations()
}

pub fn set_language(lang: Language) {
    let index = match lang {
        Language::EnUs => 0,
        Language::ZhCn => 1,
    };
    CURRENT_LANGUAGE.store(index, Ordering::Relaxed);
}

pub fn current_language() -> Language {
    match CURRENT_LANGUAGE.load(Ordering::Relaxed) {
        1 => Language::ZhCn,
        _ => Language::EnUs,
    }
}

/// 用实际值替换 `{name}` 占位符
pub fn fill(template: &str, name: &str, value: &str) -> String {
    template.replace(&format!("{{{name}}}"), value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_codes_round_trip() {
        for lang in [Language::EnUs, Language::ZhCn] {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
        assert_eq!(Language::from_code("zh"), Some(Language::ZhCn));
        assert_eq!(Language::from_code("fr"), None);
    }

    #[test]
    fn next_cycles() {
        assert_eq!(Language::EnUs.next(), Language::ZhCn);
        assert_eq!(Language::ZhCn.next().next(), Language::ZhCn);
    }

    #[test]
    fn tables_differ_per_language() {
        assert_eq!(Language::EnUs.translations().pagination.no_more, "No more results");
        assert_eq!(Language::ZhCn.translations().pagination.no_more, "没有更多结果");
    }

    #[test]
    fn status_templates_carry_placeholders() {
        for lang in [Language::EnUs, Language::ZhCn] {
            let s = &lang.translations().status;
            assert!(s.fetch_failed.contains("{error}"));
            assert!(s.no_results_for.contains("{query}"));
            assert!(s.key_check_failed.contains("{error}"));
        }
    }

    #[test]
    fn fill_replaces_placeholder() {
        assert_eq!(fill("No images for \"{query}\"", "query", "cats"), "No images for \"cats\"");
    }
}
