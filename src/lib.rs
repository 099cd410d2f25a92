//! # Introduction
//!
//! cviz shows how a small piece of C-like source decomposes into tokens and a
//! shallow statement tree. It is a teaching aid, not a compiler front end: the
//! tokenizer is a single regular expression, and the tree builder only picks
//! assignments, increments, decrements and returns out of `main`. Actually
//! compiling and running the program is delegated to an external compiler.
//!
//! ## Pipeline
//!
//! ```text
//! File → Lexer → Tokens → Tree builder → ParseNode → Renderer → Panes
//!                                          (gcc) → Output
//! ```
//!
//! 1. [`parser`] — tokenizes the source, builds the tree, renders both as text.
//! 2. [`session`] — the selected file and the contents of the four panes.
//! 3. [`toolchain`] — runs the external compiler and the program it produced.
//! 4. [`errors`] — the failures a user action can report.
//! 5. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Example
//!
//! ```
//! use cviz::parser::{build_tree, render, tokenize};
//!
//! let tokens = tokenize("int main() { int x; x = 5; x++; return x; }");
//! let tree = build_tree(&tokens);
//!
//! assert!(render(&tree, 0).contains("Increment:\n        x\n"));
//! ```

pub mod errors;
pub mod parser;
pub mod session;
pub mod toolchain;
pub mod ui;
