//! Command-line front end for the Lox scanner.
//!
//! Tokenizes a file, or runs a REPL that tokenizes one line at a time, and
//! prints the tokens. Nothing is parsed or evaluated.
#![deny(
    warnings,
)]
#![deny(
    future_incompatible,
    keyword_idents,
    let_underscore,
    nonstandard_style,
)]
#![deny(
    clippy::all,
    clippy::pedantic,
)]
#![deny(
    clippy::absolute_paths,
    clippy::dbg_macro,
    clippy::missing_docs_in_private_items,
    clippy::std_instead_of_core,
    clippy::unwrap_used,
    clippy::wildcard_enum_match_arm
)]
#![warn(unused)]

use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;
use tracing_subscriber::Layer as _;

use lox_scanner::lox::display::LoxStdDisplay as _;
use lox_scanner::lox::errors::EngineError;
use lox_scanner::lox::repl::ReplInput;
use lox_scanner::lox::token::lexer::{tokenize_with, ScanOptions};
use lox_scanner::lox::token::tokens::Token;

use std::fs;
use std::io::{stderr, stdin, stdout, Write as _};
use std::process::{ExitCode, Termination};

/// Load a file, tokenize it and print the tokens.
fn run_file(file: &str, options: ScanOptions, format: OutputFormat) -> Result<(), EngineError> {
    let source = fs::read_to_string(file)?;
    info!(file, bytes = source.len(), "scanning file");

    let tokens = tokenize_with(&source, options)?;
    print_tokens(&tokens, format);
    Ok(())
}

/// Run the REPL Prompt.
///
/// Input that only fails because it ends too early, such as an open string,
/// is kept and continued with the next line instead of being reported.
/// If the input ends while such a line is pending, its errors fail the run.
fn run_prompt(options: ScanOptions, format: OutputFormat) -> Result<(), EngineError> {
    let stdin = stdin();
    let mut input = String::new();
    loop {
        print!("{}", if input.is_empty() { "> " } else { ". " });
        stdout().flush()?;

        if stdin.read_line(&mut input)? == 0 {
            if input.is_empty() {
                return Ok(());
            }
            let tokens = ReplInput::scan(&input, options).finish()?;
            print_tokens(&tokens, format);
            return Ok(());
        }

        match ReplInput::scan(&input, options) {
            ReplInput::Complete(tokens) => print_tokens(&tokens, format),
            ReplInput::Incomplete(_) => continue,
            ReplInput::Invalid(errs) => errs.iter().for_each(|err| eprintln!("{err}")),
        }
        input.clear();
    }
}

/// Print one token per line.
fn print_tokens(tokens: &[Token], format: OutputFormat) {
    for token in tokens {
        match format {
            OutputFormat::Std => println!("{}", token.std_display()),
            OutputFormat::Debug => println!("{token:?}"),
        }
    }
}

/// Install the stderr subscriber: level and message only, no timestamps.
fn init_logging(level: LogLevel) {
    let layer = tracing_subscriber::fmt::layer()
        .without_time()
        .with_target(false)
        .with_writer(stderr)
        .compact()
        .with_filter(LevelFilter::from(level));

    tracing_subscriber::registry().with(layer).init();
}

/// Isomorphic to `Result<(), EngineError>`,
/// this allows for overriding the [Termination]
/// trait impl and report custom exit codes instead.
#[derive(Debug)]
enum EngineResult {
    /// Ok variant.
    Ok,
    /// Error variant
    Err(EngineError),
}

impl Termination for EngineResult {
    fn report(self) -> ExitCode {
        match self {
            EngineResult::Ok => ExitCode::SUCCESS,
            EngineResult::Err(err) => {
                eprintln!("{err}");
                err.into()
            }
        }
    }
}

impl<E> From<Result<(), E>> for EngineResult
where
    EngineError: From<E>,
{
    fn from(value: Result<(), E>) -> Self {
        match value {
            Ok(()) => EngineResult::Ok,
            Err(err) => EngineResult::Err(err.into()),
        }
    }
}

/// How much the scanner and the tool log to standard error.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    /// Only failures of the tool itself.
    Error,
    /// Also warnings.
    Warn,
    /// Also which files are scanned.
    Info,
    /// Also per-scan summaries and every lexing error.
    Debug,
    /// Also every single token.
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

/// How tokens are printed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// `TYPE lexeme literal`, as printed by the reference implementation.
    Std,
    /// The Rust debug representation.
    Debug,
}

/// lox-scanner tokenizes Lox source code and prints the resulting tokens,
/// one per line. Block comments nest.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct LoxArgs {
    /// Subcommands, either this or [`source_file`] needs to be specified.
    #[command(subcommand)]
    command: Option<LoxCommands>,

    /// Source File for the program
    #[arg(required = true)]
    source_file: Option<String>,

    /// Verbosity of the diagnostics written to standard error.
    #[arg(long, global = true, value_enum, env = "LOX_LOG_LEVEL", default_value_t = LogLevel::Warn)]
    log_level: LogLevel,

    /// Report block comments that are still open at the end of the input.
    #[arg(long, global = true, env = "LOX_REPORT_UNTERMINATED_COMMENTS")]
    report_unterminated_comments: bool,

    /// Output format for the tokens.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Std)]
    format: OutputFormat,
}

/// Available commands in lox-scanner
#[derive(Subcommand, Debug)]
#[command(subcommand_negates_reqs = true)]
enum LoxCommands {
    /// run the tokenizing repl.
    Repl,
    /// tokenize the given file and print its tokens.
    Tokenize {
        /// Source File for the program
        source_file: String,
    },
}

fn main() -> EngineResult {
    let LoxArgs {
        command,
        source_file,
        log_level,
        report_unterminated_comments,
        format,
    } = LoxArgs::parse();

    init_logging(log_level);
    let options = ScanOptions::default()
        .with_unterminated_comments_reported(report_unterminated_comments);

    match (command, source_file) {
        (None, Some(source_file))
        | (Some(LoxCommands::Tokenize { source_file }), None) => {
            run_file(&source_file, options, format).into()
        }

        (Some(LoxCommands::Repl), None) => run_prompt(options, format).into(),

        (Some(_), Some(_))
        | (None, None) => unreachable!("clap verifies this cannot happen."),
    }
}
