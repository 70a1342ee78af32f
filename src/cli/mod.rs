//! CLI module for the D front end
//!
//! This module provides the two command-line tools built on `dlang_syntax`.
//!
//! ## Binaries
//!
//! - `dparser [FILE]` - Parse a file (or stdin) and print the AST
//! - `dlexer [FILE]` - Print one line per token
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run_*()` functions handle errors and exit.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::Parser;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definitions
// ============================================================================

/// Parse a D source file and print its abstract syntax tree
#[derive(Parser, Debug)]
#[command(name = "dparser")]
#[command(version = VERSION)]
#[command(about = "Parse a D source file and print its abstract syntax tree", long_about = None)]
pub struct ParserCli {
    /// Source file to parse (reads standard input when omitted)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Render a source-annotated report for lexical and syntax errors
    #[arg(long)]
    pub diagnostics: bool,
}

/// Print the token stream of a D source file
#[derive(Parser, Debug)]
#[command(name = "dlexer")]
#[command(version = VERSION)]
#[command(about = "Print the token stream of a D source file", long_about = None)]
pub struct LexerCli {
    /// Source file to tokenize (reads standard input when omitted)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Render a source-annotated report for lexical errors
    #[arg(long)]
    pub diagnostics: bool,
}

// ============================================================================
// CLI entry points
// ============================================================================

/// Initialize structured logging on stderr with an env-based filter, defaulting to `warn`.
///
/// Stdout carries only the tree or token dump.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

/// `dparser` entry point.
pub fn run_parser() {
    let cli = ParserCli::parse();
    exit_with(commands::parse_file(cli.file.as_deref(), cli.diagnostics));
}

/// `dlexer` entry point.
pub fn run_lexer() {
    let cli = LexerCli::parse();
    exit_with(commands::lex_file(cli.file.as_deref(), cli.diagnostics));
}

/// This is the only place where `process::exit` is called.
fn exit_with(result: CliResult<ExitCode>) {
    match result {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}
