use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

use crate::util::unicode;

/// Compute total display width of a slice of spans
pub(super) fn spans_width(spans: &[Span]) -> usize {
    spans
        .iter()
        .map(|s| unicode::display_width(&s.content))
        .sum()
}

/// Pad `spans` with `style`d spaces up to `width` cells
pub(super) fn pad_to(spans: &mut Vec<Span<'static>>, width: usize, style: Style) {
    let used = spans_width(spans);
    if used < width {
        spans.push(Span::styled(" ".repeat(width - used), style));
    }
}

/// Spans for a single-line text field exactly `width` cells wide.
///
/// With a caret, the text scrolls so the caret stays visible and the cell
/// under the caret is drawn reversed. Without one, overlong text is cut
/// with an ellipsis.
pub(super) fn field_spans(
    value: &str,
    caret: Option<usize>,
    width: usize,
    style: Style,
) -> Vec<Span<'static>> {
    let mut spans: Vec<Span<'static>> = Vec::new();
    if width == 0 {
        return spans;
    }
    match caret {
        None => {
            spans.push(Span::styled(
                unicode::truncate_to_width(value, width),
                style,
            ));
        }
        Some(caret) => {
            let caret = caret.min(value.len());
            // Drop leading graphemes until the caret cell fits
            let mut start = 0;
            while unicode::display_width(&value[start..caret]) + 1 > width {
                match unicode::next_grapheme_boundary(value, start) {
                    Some(next) if next <= caret => start = next,
                    _ => break,
                }
            }
            let before = &value[start..caret];
            let under = unicode::grapheme_at(value, caret);
            let after_start = caret + under.len();
            let at = if under.is_empty() { " " } else { under };
            let used = unicode::display_width(before) + unicode::display_width(at);
            let after = unicode::truncate_to_width(&value[after_start..], width.saturating_sub(used));

            spans.push(Span::styled(before.to_string(), style));
            spans.push(Span::styled(
                at.to_string(),
                style.add_modifier(Modifier::REVERSED),
            ));
            spans.push(Span::styled(after, style));
        }
    }
    pad_to(&mut spans, width, style);
    spans
}
