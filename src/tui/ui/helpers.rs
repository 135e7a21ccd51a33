//! Helper functions for UI rendering

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

use crate::select_filter::word_prefix_matcher;

/// Byte ranges of `label` where a word starts with `term`
pub fn term_ranges(label: &str, term: &str) -> Vec<(usize, usize)> {
    if term.is_empty() {
        return Vec::new();
    }
    let Ok(pattern) = word_prefix_matcher(term) else {
        return Vec::new();
    };
    pattern
        .find_iter(label)
        .map(|m| {
            let text = m.as_str();
            let lead = text.len() - text.trim_start().len();
            (m.start() + lead, m.end())
        })
        .collect()
}

/// Create spans for a label with the search term highlighted
pub fn highlight_term(
    label: &str,
    term: &str,
    normal: Color,
    highlight: Color,
) -> Vec<Span<'static>> {
    let ranges = term_ranges(label, term);
    if ranges.is_empty() {
        return vec![Span::styled(label.to_string(), Style::default().fg(normal))];
    }

    let mut spans = Vec::new();
    let mut pos = 0;
    for (start, end) in ranges {
        if start > pos {
            spans.push(Span::styled(
                label[pos..start].to_string(),
                Style::default().fg(normal),
            ));
        }
        spans.push(Span::styled(
            label[start..end].to_string(),
            Style::default()
                .fg(highlight)
                .add_modifier(Modifier::BOLD),
        ));
        pos = end;
    }
    if pos < label.len() {
        spans.push(Span::styled(
            label[pos..].to_string(),
            Style::default().fg(normal),
        ));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_ranges_at_word_starts() {
        assert_eq!(term_ranges("Red rose", "r"), vec![(0, 1), (4, 5)]);
        assert!(term_ranges("carrot", "r").is_empty());
        assert!(term_ranges("anything", "").is_empty());
    }

    #[test]
    fn test_highlight_term_splits_spans() {
        let spans = highlight_term("big red", "re", Color::White, Color::Yellow);
        let parts: Vec<&str> = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(parts, vec!["big ", "re", "d"]);
    }
}
