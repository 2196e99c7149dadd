//! 文本宽度工具

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// 省略号
const ELLIPSIS: char = '…';

/// 按显示宽度截断，超出时以 `…` 结尾
pub fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut width = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > budget {
            break;
        }
        width += w;
        out.push(ch);
    }
    out.push(ELLIPSIS);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_unchanged() {
        assert_eq!(truncate("Ada Lovelace", 20), "Ada Lovelace");
        assert_eq!(truncate("Ada", 3), "Ada");
    }

    #[test]
    fn long_text_ends_with_ellipsis() {
        assert_eq!(truncate("Ada Lovelace", 6), "Ada L…");
        assert_eq!(truncate("Ada Lovelace", 0), "");
    }

    #[test]
    fn wide_characters_count_double() {
        // 每个汉字宽度为 2
        assert_eq!(truncate("客户门户系统", 7), "客户门…");
        assert_eq!(truncate("客户门户系统", 7).width(), 7);
    }
}
