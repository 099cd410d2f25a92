//! C-like source decomposition
//!
//! This module turns source text into the two views shown by the visualizer:
//! - [`lexer`]: Tokenization (source text → classified tokens)
//! - [`tree`]: Tree building (tokens → shallow statement tree)
//! - [`render`]: Indented text for both views
//!
//! # Recognized subset
//!
//! Only the body of `main` is modelled, and only four statement forms are
//! picked out of it: `x = v`, `x++`, `x--` and `return v`. Everything else is
//! tokenized but otherwise ignored. There is no expression parsing, no
//! grammar checking and no error reporting; any input produces a result.

pub mod lexer;
pub mod render;
pub mod tree;

pub use lexer::{tokenize, Token, TokenCategory};
pub use render::{render, render_tokens};
pub use tree::{build_tree, LookupMode, ParseNode, TreeBuilder};
