//! Compiler / program output pane rendering

use super::utils::render_scrolled_lines;
use crate::toolchain::{RunOutcome, Stage};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    Frame,
};

fn pane_title(outcome: Option<&RunOutcome>) -> String {
    match outcome {
        None => "Output".to_string(),
        Some(outcome) => {
            let stage = match outcome.stage {
                Stage::Compile => "compile failed",
                Stage::Run => "program output",
            };
            match outcome.exit_code {
                Some(code) => format!("Output: {}, exit {}", stage, code),
                None => format!("Output: {}, killed", stage),
            }
        }
    }
}

/// Render the output pane
pub fn render_output_pane(
    frame: &mut Frame,
    area: Rect,
    outcome: Option<&RunOutcome>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let color = match outcome {
        Some(o) if !o.compiled() => DEFAULT_THEME.error,
        _ => DEFAULT_THEME.fg,
    };

    let lines: Vec<Line> = outcome
        .map(|o| o.output.as_str())
        .unwrap_or_default()
        .lines()
        .map(|line| Line::styled(line, Style::default().fg(color)))
        .collect();

    let placeholder = if outcome.is_some() {
        "(no output)"
    } else {
        "(press c to compile and run)"
    };

    render_scrolled_lines(
        frame,
        area,
        &pane_title(outcome),
        lines,
        placeholder,
        is_focused,
        scroll_offset,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pane_title() {
        assert_eq!(pane_title(None), "Output");

        let failed = RunOutcome {
            stage: Stage::Compile,
            exit_code: Some(1),
            output: "error".to_string(),
        };
        assert_eq!(pane_title(Some(&failed)), "Output: compile failed, exit 1");

        let ran = RunOutcome {
            stage: Stage::Run,
            exit_code: None,
            output: String::new(),
        };
        assert_eq!(pane_title(Some(&ran)), "Output: program output, killed");
    }
}
