//! Error types for the user-triggered actions
//!
//! Tokenizing, tree building and rendering never fail; only the actions that
//! touch the outside world (reading the selected file, spawning the compiler
//! or the program it produced) can. Every error is reported once and leaves
//! the previous pane contents in place.

use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors surfaced to the user as a one-line message
#[derive(Debug)]
pub enum VizError {
    /// An action needing a source file was triggered before one was selected
    NoFileSelected,

    /// The selected file could not be read
    FileAccess { path: PathBuf, source: io::Error },

    /// A process (the compiler, or the executable it produced) could not be started
    CompilerInvocation { program: String, source: io::Error },
}

impl VizError {
    pub fn file_access(path: impl Into<PathBuf>, source: io::Error) -> Self {
        VizError::FileAccess {
            path: path.into(),
            source,
        }
    }

    pub fn compiler_invocation(program: impl Into<String>, source: io::Error) -> Self {
        VizError::CompilerInvocation {
            program: program.into(),
            source,
        }
    }
}

impl fmt::Display for VizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VizError::NoFileSelected => write!(f, "No C file selected."),
            VizError::FileAccess { path, source } => {
                write!(f, "Failed to load file '{}': {}", path.display(), source)
            }
            VizError::CompilerInvocation { program, source } => {
                write!(f, "Compilation or execution failed: '{}': {}", program, source)
            }
        }
    }
}

impl Error for VizError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            VizError::NoFileSelected => None,
            VizError::FileAccess { source, .. } | VizError::CompilerInvocation { source, .. } => {
                Some(source)
            }
        }
    }
}
