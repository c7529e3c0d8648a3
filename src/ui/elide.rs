/// Shorten `text` to at most `max_chars` characters by cutting out its middle.
///
/// Counts chars, not bytes, so multi-byte URLs are never split inside a code point.
pub fn elide_middle(text: &str, max_chars: usize) -> String {
    const ELLIPSIS: char = '…';

    let len = text.chars().count();
    if len <= max_chars {
        return text.to_string();
    }
    if max_chars == 0 {
        return String::new();
    }

    let keep = max_chars - 1;
    let head = keep.div_ceil(2);
    let tail = keep - head;

    let mut elided: String = text.chars().take(head).collect();
    elided.push(ELLIPSIS);
    elided.extend(text.chars().skip(len - tail));
    elided
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_untouched() {
        assert_eq!(elide_middle("http://a", 40), "http://a");
        assert_eq!(elide_middle("abcde", 5), "abcde");
    }

    #[test]
    fn long_text_loses_its_middle() {
        let elided = elide_middle("https://example.com/a/very/long/path", 11);
        assert_eq!(elided, "https…/path");
        assert_eq!(elided.chars().count(), 11);
    }

    #[test]
    fn multibyte_safe() {
        let elided = elide_middle("https://例え.jp/日本語のページ", 9);
        assert_eq!(elided.chars().count(), 9);
        assert!(elided.starts_with("http"));
        assert!(elided.ends_with("ページ"));
    }

    #[test]
    fn degenerate_widths() {
        assert_eq!(elide_middle("abcdef", 0), "");
        assert_eq!(elide_middle("abcdef", 1), "…");
        assert_eq!(elide_middle("abcdef", 2), "a…");
    }
}
