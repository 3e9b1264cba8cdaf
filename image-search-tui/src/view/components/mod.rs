//! UI 组件

pub mod pagination;
pub mod preview;
pub mod results;
pub mod search_bar;
pub mod statusbar;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// 按显示宽度截断，超出时以 `…` 结尾
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate_to_width("cat, kitten", 20), "cat, kitten");
    }

    #[test]
    fn long_text_gets_ellipsis() {
        assert_eq!(truncate_to_width("yellow flowers", 8), "yellow …");
        assert_eq!(truncate_to_width("anything", 0), "");
    }

    #[test]
    fn wide_characters_count_double() {
        // 每个汉字宽 2
        assert_eq!(truncate_to_width("黄色花朵", 5), "黄色…");
    }
}
