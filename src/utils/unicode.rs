use unicode_width::UnicodeWidthStr;

pub fn display_width(s: &str) -> u16 {
    u16::try_from(s.width()).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_width_ascii() {
        assert_eq!(display_width("Copy Code"), 9);
        assert_eq!(display_width(""), 0);
    }

    #[test]
    fn test_display_width_wide_chars() {
        assert_eq!(display_width("コピー"), 6);
        assert_eq!(display_width("👋"), 2);
    }
}
