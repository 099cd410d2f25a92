//! TUI pane rendering modules
//!
//! Each of the four text panes mirrors one view of the session; the status
//! bar sits underneath them.
//!
//! # Pane Modules
//!
//! - [`source`]: Raw input code with line numbers, lexemes colored by category
//! - [`tokens`]: Token listing, one `lexeme -> Category` row per token
//! - [`tree`]: Indented parse tree with field names highlighted
//! - [`output`]: Compiler diagnostics or the compiled program's output
//! - [`status`]: Status bar with keybindings and the last action's result
//! - `utils`: Scroll clamping and border styling shared by the text panes
//!
//! # Architecture
//!
//! Each pane module exports a single `render_*_pane()` function. Panes hold
//! no state of their own; scroll offsets live in [`App`](crate::ui::App) and
//! are clamped in place while rendering.

mod utils;

pub mod output;
pub mod source;
pub mod status;
pub mod tokens;
pub mod tree;

// Re-export render functions for convenience
pub use output::render_output_pane;
pub use source::render_source_pane;
pub use status::render_status_bar;
pub use tokens::render_tokens_pane;
pub use tree::render_tree_pane;
