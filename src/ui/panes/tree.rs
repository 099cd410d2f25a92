//! Parse tree pane rendering

use super::utils::render_scrolled_lines;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    Frame,
};

/// Render the parse tree pane from its rendered text.
///
/// Field lines (ending in `:`) are highlighted; value lines are plain.
pub fn render_tree_pane(
    frame: &mut Frame,
    area: Rect,
    tree_text: &str,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let lines: Vec<Line> = tree_text
        .lines()
        .map(|line| {
            let style = if line.ends_with(':') {
                Style::default()
                    .fg(DEFAULT_THEME.tree_label)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };
            Line::from(Span::styled(line, style))
        })
        .collect();

    render_scrolled_lines(
        frame,
        area,
        "Parse Tree",
        lines,
        "(press v to visualize)",
        is_focused,
        scroll_offset,
    );
}
