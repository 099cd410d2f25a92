//! Helpers shared by the scrollable text panes

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Border style for a pane, highlighted when focused
pub fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}

/// Clamp `offset` so the last page of `total` lines stays filled.
///
/// `usize::MAX` is a valid request meaning "scroll to the bottom".
pub fn clamp_scroll(offset: &mut usize, total: usize, visible_height: usize) {
    if total > visible_height {
        let max_scroll = total - visible_height;
        *offset = (*offset).min(max_scroll);
    } else {
        *offset = 0;
    }
}

/// Render `lines` inside a titled, bordered pane with vertical scrolling.
///
/// When `lines` is empty the `placeholder` is shown dimmed instead.
pub fn render_scrolled_lines(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    lines: Vec<Line<'_>>,
    placeholder: &str,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    if lines.is_empty() {
        *scroll_offset = 0;
        let paragraph = Paragraph::new(placeholder.to_string())
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1
    clamp_scroll(scroll_offset, lines.len(), visible_height);

    let visible_lines: Vec<Line> = lines
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_scroll_short_content() {
        let mut offset = 5;
        clamp_scroll(&mut offset, 3, 10);
        assert_eq!(offset, 0);
    }

    #[test]
    fn test_clamp_scroll_to_bottom() {
        let mut offset = usize::MAX;
        clamp_scroll(&mut offset, 30, 10);
        assert_eq!(offset, 20);

        let mut offset = 4;
        clamp_scroll(&mut offset, 30, 10);
        assert_eq!(offset, 4);
    }
}
