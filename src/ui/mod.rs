//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — application state, keyboard event loop, pane focus and scrolling
//! - **[`panes`]** — stateless render functions for each visible pane (input code,
//!   tokens, parse tree, output, status bar)
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a [`Session`] and a
//! [`Compiler`] and call [`App::run`] to start the event loop.
//!
//! [`Session`]: crate::session::Session
//! [`Compiler`]: crate::toolchain::Compiler
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
