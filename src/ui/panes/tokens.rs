//! Token listing pane rendering

use super::utils::render_scrolled_lines;
use crate::parser::lexer::Token;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    Frame,
};

/// Render the tokens pane, one `lexeme -> Category` row per token
pub fn render_tokens_pane(
    frame: &mut Frame,
    area: Rect,
    tokens: &[Token],
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let lines: Vec<Line> = tokens
        .iter()
        .map(|token| {
            let color = DEFAULT_THEME.category(token.category());
            Line::from(vec![
                Span::styled(token.lexeme(), Style::default().fg(color)),
                Span::styled(" -> ", Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(
                    token.category().name(),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
            ])
        })
        .collect();

    let title = format!("Tokens ({})", tokens.len());
    render_scrolled_lines(
        frame,
        area,
        &title,
        lines,
        "(press v to visualize)",
        is_focused,
        scroll_offset,
    );
}
