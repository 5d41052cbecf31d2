use clap::{Args, Parser, Subcommand};
use log::LevelFilter;
use miette::{IntoDiagnostic, MietteHandlerOpts, Result};
use monkey_interpreter::{Environment, eval};
use monkey_parser::{Lexer, parse_program_with_diagnostics};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

mod repl;

use repl::{ReplConfig, ReplSession};

#[derive(Parser)]
#[command(
    name = "monkey",
    version,
    about = "The Monkey programming language",
    long_about = "A tree-walking interpreter for Monkey: integers, booleans, strings, arrays, hashes and first-class functions."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Log evaluator activity at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Trace every parse routine as it is entered and left
    #[arg(long, global = true)]
    trace_parser: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session (the default)
    Repl(HistoryArgs),

    /// Parse and evaluate a Monkey program
    Run {
        /// Source file to run (use '-' to read from stdin)
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Print the token stream of a Monkey program
    Tokens {
        /// Source file to tokenize (use '-' to read from stdin)
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Print the canonical form of a parsed Monkey program
    Parse {
        /// Source file to parse (use '-' to read from stdin)
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

#[derive(Args, Default)]
struct HistoryArgs {
    /// Do not load or save line history
    #[arg(long)]
    no_history: bool,

    /// History file to use instead of .monkey_history
    #[arg(long, value_name = "PATH", conflicts_with = "no_history")]
    history: Option<PathBuf>,
}

fn main() {
    setup_miette_handler();

    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.trace_parser);

    let outcome = match cli.command {
        None => handle_repl_command(HistoryArgs::default()),
        Some(Commands::Repl(history)) => handle_repl_command(history),
        Some(Commands::Run { file }) => handle_run_command(&file),
        Some(Commands::Tokens { file }) => handle_tokens_command(&file),
        Some(Commands::Parse { file }) => handle_parse_command(&file),
    };

    match outcome {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(report) => {
            eprintln!("{:?}", report);
            process::exit(1);
        }
    }
}

/// Configure miette's graphical handler for diagnostic reports
fn setup_miette_handler() {
    miette::set_hook(Box::new(|_| {
        Box::new(
            MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .tab_width(4)
                .with_cause_chain()
                .build(),
        )
    }))
    .ok();
}

/// Install env_logger; `RUST_LOG` overrides the flag-derived defaults
fn setup_logging(verbose: bool, trace_parser: bool) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    });
    if trace_parser {
        builder.filter_module("monkey_parser::parser", LevelFilter::Trace);
    }
    builder.format_timestamp(None);
    builder.parse_default_env();
    builder.init();
}

fn handle_repl_command(history: HistoryArgs) -> Result<bool> {
    let mut config = ReplConfig::default();
    if history.no_history {
        config.persist_history = false;
    }
    if let Some(path) = history.history {
        config.history_file = Some(path);
    }

    let mut session = ReplSession::with_config(config);
    session.run()?;
    Ok(true)
}

fn handle_run_command(file_path: &Path) -> Result<bool> {
    let (source, source_name) = read_source(file_path)?;

    let Some(program) = parse_or_report(&source, &source_name) else {
        return Ok(false);
    };

    let env = Environment::new();
    let value = eval(&program, &env);
    if value.is_error() {
        eprintln!("{}", value);
        return Ok(false);
    }

    log::debug!("{} finished with {}", source_name, value);
    Ok(true)
}

fn handle_tokens_command(file_path: &Path) -> Result<bool> {
    let (source, _) = read_source(file_path)?;

    for token in Lexer::new(&source) {
        println!("{:>5}..{:<5} {}", token.span.start, token.span.end, token);
    }
    Ok(true)
}

fn handle_parse_command(file_path: &Path) -> Result<bool> {
    let (source, source_name) = read_source(file_path)?;

    match parse_or_report(&source, &source_name) {
        Some(program) => {
            println!("{}", program);
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Parse a whole program, printing every diagnostic when it is rejected
fn parse_or_report(source: &str, source_name: &str) -> Option<monkey_parser::Program> {
    let (program, diagnostics) = parse_program_with_diagnostics(source);
    if !diagnostics.has_errors() {
        return Some(program);
    }

    for report in diagnostics.create_reports_with_filename(source_name) {
        eprintln!("{:?}", report);
    }
    eprintln!(
        "{}: parsing failed with {} error(s)",
        source_name,
        diagnostics.error_count()
    );
    None
}

fn read_source(file_path: &Path) -> Result<(String, String)> {
    if file_path.to_str() == Some("-") {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer).into_diagnostic()?;
        return Ok((buffer, "<stdin>".to_string()));
    }

    if !file_path.exists() {
        return Err(miette::miette!("File not found: {}", file_path.display()));
    }

    let source = fs::read_to_string(file_path).into_diagnostic()?;
    Ok((source, file_path.display().to_string()))
}
