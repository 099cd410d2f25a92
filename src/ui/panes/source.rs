//! Input code pane rendering with lexeme highlighting
//!
//! Highlighting reuses the lexer's scan pattern, so the colors show exactly
//! what the tokenizer sees. Characters the pattern skips (quotes, dots, `#`,
//! `%`, ...) are dimmed to make the lossy tokenization visible.

use super::utils::render_scrolled_lines;
use crate::parser::lexer::{classify, scan, TokenCategory};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    Frame,
};

/// Style for a lexeme, based on its category
fn lexeme_style(lexeme: &str) -> Style {
    let category = classify(lexeme);
    let style = Style::default().fg(DEFAULT_THEME.category(category));
    match category {
        TokenCategory::Keyword => style.add_modifier(Modifier::BOLD),
        _ => style,
    }
}

/// Split one source line into styled spans
fn highlight_source_line(line: &str) -> Vec<Span<'_>> {
    let mut spans = Vec::new();
    let mut last = 0;

    for m in scan(line) {
        if m.start() > last {
            spans.push(Span::styled(
                &line[last..m.start()],
                Style::default().fg(DEFAULT_THEME.comment),
            ));
        }
        spans.push(Span::styled(m.as_str(), lexeme_style(m.as_str())));
        last = m.end();
    }

    if last < line.len() {
        spans.push(Span::styled(
            &line[last..],
            Style::default().fg(DEFAULT_THEME.comment),
        ));
    }

    spans
}

/// Render the input code pane
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    source_code: &str,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let lines: Vec<Line> = source_code
        .lines()
        .enumerate()
        .map(|(idx, line)| {
            let mut spans = vec![Span::styled(
                format!("{:4} ", idx + 1),
                Style::default().fg(DEFAULT_THEME.comment),
            )];
            spans.extend(highlight_source_line(line));
            Line::from(spans)
        })
        .collect();

    render_scrolled_lines(
        frame,
        area,
        "Input Code",
        lines,
        "(press i to load the selected file)",
        is_focused,
        scroll_offset,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_covers_whole_line() {
        let line = "  printf(\"%d\", x);";
        let spans = highlight_source_line(line);
        let rebuilt: String = spans.iter().map(|s| s.content.as_ref()).collect();

        assert_eq!(rebuilt, line);
    }

    #[test]
    fn test_highlight_dims_dropped_characters() {
        let spans = highlight_source_line("a.b");

        assert_eq!(spans.len(), 3);
        assert_eq!(spans[1].content, ".");
        assert_eq!(spans[1].style.fg, Some(DEFAULT_THEME.comment));
        assert_eq!(spans[0].style.fg, Some(DEFAULT_THEME.identifier));
    }
}
