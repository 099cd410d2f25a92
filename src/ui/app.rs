//! Main TUI application state and logic

use crate::session::Session;
use crate::toolchain::{Compiler, Stage};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;

/// Lines moved by PageUp / PageDown
const PAGE_STEP: usize = 10;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Input,
    Tokens,
    Tree,
    Output,
}

impl FocusedPane {
    /// Move focus to the next pane (clockwise: input -> tokens -> tree -> output)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Input => FocusedPane::Tokens,
            FocusedPane::Tokens => FocusedPane::Tree,
            FocusedPane::Tree => FocusedPane::Output,
            FocusedPane::Output => FocusedPane::Input,
        }
    }

    /// Move focus to the previous pane (counter-clockwise)
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Input => FocusedPane::Output,
            FocusedPane::Tokens => FocusedPane::Input,
            FocusedPane::Tree => FocusedPane::Tokens,
            FocusedPane::Output => FocusedPane::Tree,
        }
    }
}

/// The main application state
pub struct App {
    /// Selected file and pane contents
    pub session: Session,

    /// External compiler used by compile & run
    pub compiler: Compiler,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub input_scroll: usize,
    pub tokens_scroll: usize,
    pub tree_scroll: usize,
    pub output_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether the status message reports a failure
    pub status_is_error: bool,
}

impl App {
    /// Create a new app around a session
    pub fn new(session: Session, compiler: Compiler) -> Self {
        App {
            session,
            compiler,
            focused_pane: FocusedPane::Input,
            input_scroll: 0,
            tokens_scroll: 0,
            tree_scroll: 0,
            output_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            status_is_error: false,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key_event(key);
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Create layout: 4 panes in 2 columns, plus status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(pane_area);

        // Left column: Input Code (top) | Output (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(columns[0]);

        // Right column: Tokens (top) | Parse Tree (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(columns[1]);

        super::panes::render_source_pane(
            frame,
            left_rows[0],
            self.session.input_code(),
            self.focused_pane == FocusedPane::Input,
            &mut self.input_scroll,
        );

        super::panes::render_output_pane(
            frame,
            left_rows[1],
            self.session.last_outcome(),
            self.focused_pane == FocusedPane::Output,
            &mut self.output_scroll,
        );

        super::panes::render_tokens_pane(
            frame,
            right_rows[0],
            self.session.tokens(),
            self.focused_pane == FocusedPane::Tokens,
            &mut self.tokens_scroll,
        );

        let tree_text = self.session.tree_text();
        super::panes::render_tree_pane(
            frame,
            right_rows[1],
            &tree_text,
            self.focused_pane == FocusedPane::Tree,
            &mut self.tree_scroll,
        );

        let file_name = self
            .session
            .selected_file()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned());

        super::panes::render_status_bar(
            frame,
            status_area,
            file_name.as_deref(),
            &self.status_message,
            self.status_is_error,
            self.session.lookup_mode(),
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('i') => self.show_input(),
            KeyCode::Char('v') => self.visualize(),
            KeyCode::Char('c') => self.compile_and_run(),
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Up => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_sub(1);
            }
            KeyCode::Down => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_add(1);
            }
            KeyCode::PageUp => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_sub(PAGE_STEP);
            }
            KeyCode::PageDown => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_add(PAGE_STEP);
            }
            KeyCode::Home => {
                *self.focused_scroll() = 0;
            }
            KeyCode::End => {
                // Clamped to the last page while rendering
                *self.focused_scroll() = usize::MAX;
            }
            _ => {}
        }
    }

    fn focused_scroll(&mut self) -> &mut usize {
        match self.focused_pane {
            FocusedPane::Input => &mut self.input_scroll,
            FocusedPane::Tokens => &mut self.tokens_scroll,
            FocusedPane::Tree => &mut self.tree_scroll,
            FocusedPane::Output => &mut self.output_scroll,
        }
    }

    fn report(&mut self, message: String, is_error: bool) {
        self.status_message = message;
        self.status_is_error = is_error;
    }

    /// Fill the input, tokens and tree panes for the file given at startup.
    /// Returns whether both steps succeeded; a failure is left in the status bar.
    pub fn load(&mut self) -> bool {
        self.show_input();
        if self.status_is_error {
            return false;
        }
        self.visualize();
        !self.status_is_error
    }

    /// Load the selected file into the input pane
    pub fn show_input(&mut self) {
        match self.session.show_input() {
            Ok(()) => {
                self.input_scroll = 0;
                self.report("Loaded input".to_string(), false);
            }
            Err(e) => self.report(e.to_string(), true),
        }
    }

    /// Rebuild the tokens and parse tree panes
    pub fn visualize(&mut self) {
        match self.session.visualize() {
            Ok(count) => {
                self.tokens_scroll = 0;
                self.tree_scroll = 0;
                self.report(format!("Visualized {} token(s)", count), false);
            }
            Err(e) => self.report(format!("Visualization failed: {}", e), true),
        }
    }

    /// Compile the selected file and run the result
    pub fn compile_and_run(&mut self) {
        match self.session.compile_and_run(&self.compiler) {
            Ok(outcome) => {
                self.output_scroll = 0;
                match outcome.stage {
                    Stage::Run => self.report("Program ran".to_string(), false),
                    Stage::Compile => self.report("Compilation failed".to_string(), true),
                }
            }
            Err(e) => self.report(e.to_string(), true),
        }
    }
}
