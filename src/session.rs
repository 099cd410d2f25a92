//! Visualizer session: the selected file and the four display panes
//!
//! A [`Session`] is the UI-independent half of the visualizer. Each action
//! reads what it needs, computes the new pane contents, and only then
//! replaces them, so a failed action leaves every pane as it was.
//!
//! | pane        | filled by                      |
//! |-------------|--------------------------------|
//! | Input Code  | [`Session::show_input`]        |
//! | Tokens      | [`Session::visualize`]         |
//! | Parse Tree  | [`Session::visualize`]         |
//! | Output      | [`Session::compile_and_run`]   |

use crate::errors::VizError;
use crate::parser::lexer::{tokenize, Token};
use crate::parser::render::{render, render_tokens};
use crate::parser::tree::{LookupMode, ParseNode, TreeBuilder};
use crate::toolchain::{Compiler, RunOutcome};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default)]
pub struct Session {
    selected_file: Option<PathBuf>,
    builder: TreeBuilder,

    input_code: String,
    tokens: Vec<Token>,
    tree: Option<ParseNode>,
    outcome: Option<RunOutcome>,
}

impl Session {
    pub fn new(mode: LookupMode) -> Self {
        Session {
            builder: TreeBuilder::new(mode),
            ..Session::default()
        }
    }

    /// Select the file later actions operate on. Panes are left untouched.
    pub fn select_file(&mut self, path: impl Into<PathBuf>) {
        self.selected_file = Some(path.into());
    }

    pub fn selected_file(&self) -> Option<&Path> {
        self.selected_file.as_deref()
    }

    pub fn lookup_mode(&self) -> LookupMode {
        self.builder.mode()
    }

    fn read_selected(&self) -> Result<String, VizError> {
        let path = self.selected_file().ok_or(VizError::NoFileSelected)?;
        fs::read_to_string(path).map_err(|e| VizError::file_access(path, e))
    }

    /// Load the selected file into the Input Code pane.
    pub fn show_input(&mut self) -> Result<(), VizError> {
        let source = self.read_selected()?;
        self.input_code = source;
        Ok(())
    }

    /// Re-read the selected file and rebuild the Tokens and Parse Tree panes.
    ///
    /// Returns the number of tokens found.
    pub fn visualize(&mut self) -> Result<usize, VizError> {
        let source = self.read_selected()?;

        let tokens = tokenize(&source);
        let tree = self.builder.build(&tokens);

        self.tokens = tokens;
        self.tree = Some(tree);
        Ok(self.tokens.len())
    }

    /// Compile and run the selected file, replacing the Output pane.
    pub fn compile_and_run(&mut self, compiler: &Compiler) -> Result<RunOutcome, VizError> {
        let path = self.selected_file().ok_or(VizError::NoFileSelected)?;
        let outcome = compiler.compile_and_run(path)?;
        self.outcome = Some(outcome.clone());
        Ok(outcome)
    }

    pub fn input_code(&self) -> &str {
        &self.input_code
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn tree(&self) -> Option<&ParseNode> {
        self.tree.as_ref()
    }

    /// Text of the Tokens pane.
    pub fn token_listing(&self) -> String {
        render_tokens(&self.tokens)
    }

    /// Text of the Parse Tree pane; empty until the first visualize.
    pub fn tree_text(&self) -> String {
        self.tree.as_ref().map(|t| render(t, 0)).unwrap_or_default()
    }

    /// Text of the Output pane; empty until the first compile.
    pub fn output(&self) -> &str {
        self.outcome.as_ref().map_or("", |o| o.output.as_str())
    }

    pub fn last_outcome(&self) -> Option<&RunOutcome> {
        self.outcome.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn source_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_actions_need_a_file() {
        let mut session = Session::default();

        assert!(matches!(session.show_input(), Err(VizError::NoFileSelected)));
        assert!(matches!(session.visualize(), Err(VizError::NoFileSelected)));
        assert!(matches!(
            session.compile_and_run(&Compiler::default()),
            Err(VizError::NoFileSelected)
        ));
    }

    #[test]
    fn test_show_input_and_visualize() {
        let file = source_file("int main() { x = 1; return x; }");
        let mut session = Session::default();
        session.select_file(file.path());

        session.show_input().unwrap();
        assert_eq!(session.input_code(), "int main() { x = 1; return x; }");
        assert_eq!(session.tree_text(), "");

        let count = session.visualize().unwrap();
        assert_eq!(count, 13);
        assert!(session.token_listing().starts_with("int -> Keyword\nmain -> Identifier"));
        assert!(session.tree_text().contains("Return Statement:\n        x\n"));
    }

    #[test]
    fn test_failed_read_keeps_panes() {
        let file = source_file("main return 7;");
        let mut session = Session::default();
        session.select_file(file.path());
        session.show_input().unwrap();
        session.visualize().unwrap();

        let before_tree = session.tree_text();
        let before_tokens = session.token_listing();

        session.select_file("/nonexistent/cviz/source.c");
        assert!(matches!(session.visualize(), Err(VizError::FileAccess { .. })));
        assert!(matches!(session.show_input(), Err(VizError::FileAccess { .. })));

        assert_eq!(session.input_code(), "main return 7;");
        assert_eq!(session.tree_text(), before_tree);
        assert_eq!(session.token_listing(), before_tokens);
    }

    #[test]
    fn test_lookup_mode_reaches_builder() {
        let file = source_file("main a = 1; b = 2;");
        let mut session = Session::new(LookupMode::FirstOccurrence);
        session.select_file(file.path());
        session.visualize().unwrap();

        assert_eq!(session.lookup_mode(), LookupMode::FirstOccurrence);
        let body = session.tree().unwrap().children()[0].children();
        assert_eq!(
            body[1],
            ParseNode::Assignment {
                variable: "a".to_string(),
                value: "1".to_string(),
            }
        );
    }
}
