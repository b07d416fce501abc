use ratatui::style::Style;
use ratatui::text::Span;

use crate::tui::app::TextInput;
use crate::util::unicode;

/// Cursor block drawn at the insertion point
pub(super) const CURSOR_GLYPH: &str = "\u{258C}";

/// Compute total display width of a slice of spans
pub(super) fn spans_width(spans: &[Span]) -> usize {
    spans
        .iter()
        .map(|s| unicode::display_width(&s.content))
        .sum()
}

/// Spans for a text input squeezed into `width` cells. When focused, the
/// view scrolls horizontally to keep the cursor visible.
pub(super) fn input_spans(
    input: &TextInput,
    width: usize,
    focused: bool,
    text_style: Style,
    cursor_style: Style,
) -> Vec<Span<'static>> {
    if !focused {
        return vec![Span::styled(
            unicode::truncate_to_width(&input.buffer, width),
            text_style,
        )];
    }
    if width == 0 {
        return Vec::new();
    }
    let start = unicode::scroll_start(&input.buffer, input.cursor, width);
    let before = &input.buffer[start..input.cursor];
    let room = width.saturating_sub(unicode::display_width(before) + 1);
    let after = unicode::truncate_to_width(&input.buffer[input.cursor..], room);
    vec![
        Span::styled(before.to_string(), text_style),
        Span::styled(CURSOR_GLYPH, cursor_style),
        Span::styled(after, text_style),
    ]
}

/// Pad `left` with spaces so that `right` ends at `width`. If both don't fit,
/// `right` is dropped.
pub(super) fn justify<'a>(
    mut left: Vec<Span<'a>>,
    right: Vec<Span<'a>>,
    width: usize,
    fill: Style,
) -> Vec<Span<'a>> {
    let used = spans_width(&left) + spans_width(&right);
    if used < width {
        left.push(Span::styled(" ".repeat(width - used), fill));
        left.extend(right);
    }
    left
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(spans: &[Span]) -> String {
        spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn unfocused_input_truncates() {
        let input = TextInput::with_text("walk the dog");
        let spans = input_spans(&input, 8, false, Style::default(), Style::default());
        assert_eq!(plain(&spans), "walk th\u{2026}");
    }

    #[test]
    fn focused_input_scrolls_to_cursor() {
        let input = TextInput::with_text("abcdefghij");
        let spans = input_spans(&input, 5, true, Style::default(), Style::default());
        assert_eq!(plain(&spans), "ghij\u{258C}");
    }

    #[test]
    fn focused_input_cursor_mid_text() {
        let mut input = TextInput::with_text("milk");
        input.move_home();
        let spans = input_spans(&input, 10, true, Style::default(), Style::default());
        assert_eq!(plain(&spans), "\u{258C}milk");
    }

    #[test]
    fn justify_drops_right_when_too_wide() {
        let left = vec![Span::raw("left")];
        let right = vec![Span::raw("right")];
        assert_eq!(
            plain(&justify(left.clone(), right.clone(), 12, Style::default())),
            "left   right"
        );
        assert_eq!(plain(&justify(left, right, 9, Style::default())), "left");
    }
}
