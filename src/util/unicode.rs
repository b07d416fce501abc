use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width in terminal cells
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate to at most `max_cells` cells, ending in `…` when shortened.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells == 0 {
        return String::new();
    }
    let budget = max_cells - 1;
    let mut used = 0;
    let mut out = String::new();
    for g in s.graphemes(true) {
        let w = display_width(g);
        if used + w > budget {
            break;
        }
        used += w;
        out.push_str(g);
    }
    out.push('\u{2026}');
    out
}

/// Byte offset of the grapheme after the one at `offset`, or None at the end.
pub fn next_grapheme_boundary(s: &str, offset: usize) -> Option<usize> {
    let rest = s.get(offset..)?;
    let first = rest.graphemes(true).next()?;
    Some(offset + first.len())
}

/// Byte offset of the grapheme before `offset`, or None at the start.
pub fn prev_grapheme_boundary(s: &str, offset: usize) -> Option<usize> {
    let head = s.get(..offset)?;
    let last = head.graphemes(true).next_back()?;
    Some(offset - last.len())
}

/// Start of the word ending at `offset`, skipping trailing whitespace first.
pub fn word_start_before(s: &str, offset: usize) -> usize {
    let head = &s[..offset.min(s.len())];
    let trimmed = head.trim_end();
    match trimmed.rfind(char::is_whitespace) {
        Some(i) => i + trimmed[i..].chars().next().map_or(1, char::len_utf8),
        None => 0,
    }
}

/// Cells between the start of `s` and byte `offset`
pub fn width_before(s: &str, offset: usize) -> usize {
    display_width(&s[..offset.min(s.len())])
}

/// First byte to show so that the cursor at `cursor` fits in `width` cells
/// (one cell is kept free for the cursor block itself).
pub fn scroll_start(s: &str, cursor: usize, width: usize) -> usize {
    let room = width.saturating_sub(1);
    let mut start = 0;
    while width_before(s, cursor) - width_before(s, start) > room {
        match next_grapheme_boundary(s, start) {
            Some(next) => start = next,
            None => break,
        }
    }
    start
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_counts_wide_chars() {
        assert_eq!(display_width("milk"), 4);
        assert_eq!(display_width("牛乳"), 4);
        assert_eq!(display_width("🎉"), 2);
        assert_eq!(display_width(""), 0);
    }

    #[test]
    fn truncate_short_text_untouched() {
        assert_eq!(truncate_to_width("milk", 10), "milk");
        assert_eq!(truncate_to_width("milk", 4), "milk");
    }

    #[test]
    fn truncate_adds_ellipsis() {
        assert_eq!(truncate_to_width("walk the dog", 8), "walk th\u{2026}");
        assert_eq!(truncate_to_width("牛乳を買う", 5), "牛乳\u{2026}");
        assert_eq!(truncate_to_width("milk", 1), "\u{2026}");
        assert_eq!(truncate_to_width("milk", 0), "");
    }

    #[test]
    fn grapheme_steps() {
        let s = "a🎉e\u{0301}";
        assert_eq!(next_grapheme_boundary(s, 0), Some(1));
        assert_eq!(next_grapheme_boundary(s, 1), Some(5));
        assert_eq!(next_grapheme_boundary(s, 5), Some(s.len()));
        assert_eq!(next_grapheme_boundary(s, s.len()), None);
        assert_eq!(prev_grapheme_boundary(s, s.len()), Some(5));
        assert_eq!(prev_grapheme_boundary(s, 5), Some(1));
        assert_eq!(prev_grapheme_boundary(s, 0), None);
    }

    #[test]
    fn word_start() {
        let s = "buy oat milk  ";
        assert_eq!(word_start_before(s, s.len()), 8);
        assert_eq!(word_start_before(s, 7), 4);
        assert_eq!(word_start_before(s, 3), 0);
        assert_eq!(word_start_before(s, 0), 0);
    }

    #[test]
    fn scroll_keeps_cursor_visible() {
        let s = "abcdefghij";
        assert_eq!(scroll_start(s, 3, 10), 0);
        assert_eq!(scroll_start(s, 10, 5), 6);
        assert_eq!(scroll_start(s, 10, 11), 0);
    }
}
