//! External compiler invocation
//!
//! The visualizer never compiles anything itself. It runs
//! `<program> [args...] <source> -o <output>`, waits for it, and on success
//! runs the produced executable with no arguments. The text shown to the user
//! is the executable's stdout on success and the compiler's stderr otherwise.
//! Artifacts left behind by a failed run are not cleaned up.

use crate::errors::VizError;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Compiler used when none is configured.
pub const DEFAULT_COMPILER: &str = "gcc";

/// Which process produced a [`RunOutcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// The compiler failed; the output is its stderr.
    Compile,
    /// The compiled program ran; the output is its stdout.
    Run,
}

/// Result of a compile-and-run request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub stage: Stage,
    /// Exit code of the last process, `None` if it was killed by a signal.
    pub exit_code: Option<i32>,
    pub output: String,
}

impl RunOutcome {
    /// Whether compilation succeeded and the program was started. Says
    /// nothing about the program's own exit code.
    pub fn compiled(&self) -> bool {
        self.stage == Stage::Run
    }
}

/// An external C compiler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compiler {
    program: String,
    args: Vec<String>,
}

impl Default for Compiler {
    fn default() -> Self {
        Compiler::new(DEFAULT_COMPILER)
    }
}

impl Compiler {
    pub fn new(program: impl Into<String>) -> Self {
        Compiler {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Extra arguments placed before the source path.
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Compile `source`, and if that succeeds run the result.
    pub fn compile_and_run(&self, source: &Path) -> Result<RunOutcome, VizError> {
        let executable = output_path(source);

        let compiled = Command::new(&self.program)
            .args(&self.args)
            .arg(source)
            .arg("-o")
            .arg(&executable)
            .output()
            .map_err(|e| VizError::compiler_invocation(&self.program, e))?;

        if !compiled.status.success() {
            return Ok(outcome(Stage::Compile, &compiled));
        }

        let launch = runnable_path(&executable);
        let ran = Command::new(&launch)
            .output()
            .map_err(|e| VizError::compiler_invocation(launch.display().to_string(), e))?;

        Ok(outcome(Stage::Run, &ran))
    }
}

fn outcome(stage: Stage, output: &Output) -> RunOutcome {
    let stream = match stage {
        Stage::Compile => &output.stderr,
        Stage::Run => &output.stdout,
    };
    RunOutcome {
        stage,
        exit_code: output.status.code(),
        output: String::from_utf8_lossy(stream).into_owned(),
    }
}

/// Where the compiled executable is written: the source path with its
/// extension stripped, or with `.out` appended if it has none.
pub fn output_path(source: &Path) -> PathBuf {
    if source.extension().is_some() {
        source.with_extension("")
    } else {
        let mut name = source.as_os_str().to_owned();
        name.push(".out");
        PathBuf::from(name)
    }
}

/// A bare relative name would be looked up on `PATH`; anchor it to the
/// current directory instead.
fn runnable_path(executable: &Path) -> PathBuf {
    if executable.is_relative() {
        Path::new(".").join(executable)
    } else {
        executable.to_path_buf()
    }
}
