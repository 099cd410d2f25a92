// cviz: token and parse-tree visualizer for a tiny C subset

use std::io;
use std::path::PathBuf;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use cviz::parser::LookupMode;
use cviz::session::Session;
use cviz::toolchain::{Compiler, DEFAULT_COMPILER};
use cviz::ui::App;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// C source file to visualize
    file: Option<PathBuf>,

    /// Compiler used by compile & run
    #[arg(long, default_value = DEFAULT_COMPILER)]
    compiler: String,

    /// Extra compiler argument, placed before the source path (repeatable)
    #[arg(long = "compiler-arg", allow_hyphen_values = true)]
    compiler_args: Vec<String>,

    /// Resolve repeated lexemes against their first occurrence in the file
    #[arg(long)]
    first_occurrence: bool,

    /// Print the input, tokens and parse tree to stdout instead of starting the TUI
    #[arg(long)]
    print: bool,

    /// With --print, also compile and run the file and print its output
    #[arg(long, requires = "print")]
    run: bool,
}

fn print_section(title: &str, body: &str) {
    println!("== {} ==", title);
    println!("{}", body.trim_end_matches('\n'));
    println!();
}

fn print_panes(session: &mut Session, compiler: &Compiler, run: bool) -> Result<(), Box<dyn std::error::Error>> {
    session.show_input()?;
    session.visualize()?;

    print_section("Input Code", session.input_code());
    print_section("Tokens", &session.token_listing());
    print_section("Parse Tree", &session.tree_text());

    if run {
        session.compile_and_run(compiler)?;
        print_section("Output", session.output());
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mode = if cli.first_occurrence {
        LookupMode::FirstOccurrence
    } else {
        LookupMode::ScanPosition
    };
    let compiler = Compiler::new(cli.compiler).with_args(cli.compiler_args);

    let mut session = Session::new(mode);
    if let Some(file) = &cli.file {
        session.select_file(file.clone());
    }

    if cli.print {
        if cli.file.is_none() {
            eprintln!("Error: --print needs an input file");
            std::process::exit(1);
        }
        if let Err(e) = print_panes(&mut session, &compiler, cli.run) {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        return Ok(());
    }

    // Load the panes up front so the first frame already shows something;
    // a failure stays in the status bar
    let mut app = App::new(session, compiler);
    if let Some(file) = &cli.file {
        eprintln!("Loading {}...", file.display());
        if app.load() {
            eprintln!("Found {} token(s).", app.session.tokens().len());
        }
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
