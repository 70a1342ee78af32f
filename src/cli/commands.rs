//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run_*()`.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use dlang_syntax::diagnostics::{self, CompileError};
use dlang_syntax::{parser, printer, token_dump};

use super::{CliError, CliResult, ExitCode};

/// Name used for standard input in diagnostics.
pub const STDIN_NAME: &str = "<stdin>";

/// Message printed by `dparser` for any lexical or syntax failure.
pub const PARSE_FAILED: &str = "Parsing failed.";

/// Read the program text from `file`, or from standard input when no file is given.
///
/// The bytes are decoded lossily: invalid UTF-8 (typically inside a comment or string) becomes U+FFFD instead of
/// failing the read.
///
/// # Errors
///
/// Returns the underlying I/O error; callers turn it into their tool's open-failure message.
pub fn read_source(file: Option<&Path>) -> io::Result<String> {
    let bytes = match file {
        Some(path) => fs::read(path)?,
        None => {
            let mut bytes = Vec::new();
            io::stdin().read_to_end(&mut bytes)?;
            bytes
        }
    };
    Ok(decode_source(bytes))
}

/// Decode source bytes, replacing invalid UTF-8 sequences.
pub fn decode_source(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            let text = String::from_utf8_lossy(err.as_bytes()).into_owned();
            tracing::debug!("input is not valid UTF-8; invalid sequences replaced");
            text
        }
    }
}

/// Display name of the input for diagnostics.
pub fn source_name(file: Option<&Path>) -> String {
    file.map_or_else(|| STDIN_NAME.to_string(), |p| p.display().to_string())
}

/// Parse and print the AST.
pub fn parse_file(file: Option<&Path>, with_report: bool) -> CliResult<ExitCode> {
    let name = source_name(file);
    let source = read_source(file).map_err(|e| {
        tracing::debug!(file = %name, error = %e, "cannot read input");
        CliError::failure(format!("Error: cannot open '{name}'"))
    })?;

    let tree = render_tree(&name, &source, with_report)?;
    print!("{tree}");
    Ok(ExitCode::SUCCESS)
}

/// Lex and print one line per token.
pub fn lex_file(file: Option<&Path>, with_report: bool) -> CliResult<ExitCode> {
    let name = source_name(file);
    let source = read_source(file).map_err(|e| {
        tracing::debug!(file = %name, error = %e, "cannot read input");
        CliError::failure(format!("Cannot open file: {name}"))
    })?;

    let dump = render_tokens(&name, &source, with_report)?;
    print!("{dump}");
    Ok(ExitCode::SUCCESS)
}

/// The printed AST of `source`, or the `dparser` failure message.
pub fn render_tree(name: &str, source: &str, with_report: bool) -> CliResult<String> {
    match parser::parse_source(source) {
        Ok(program) => Ok(printer::print_tree(&program)),
        Err(err) => {
            tracing::debug!(file = %name, position = %err.position(), kind = %err.kind(), "parse failed");
            let mut msg = report_prefix(name, source, &err, with_report);
            msg.push_str(PARSE_FAILED);
            Err(CliError::failure(msg))
        }
    }
}

/// The token dump of `source`, or the lexical error text.
pub fn render_tokens(name: &str, source: &str, with_report: bool) -> CliResult<String> {
    token_dump::dump_tokens(source).map_err(|err| {
        tracing::debug!(file = %name, position = %err.position(), "lexing failed");
        let mut msg = report_prefix(name, source, &err, with_report);
        msg.push_str(&err.to_string());
        CliError::failure(msg)
    })
}

/// Rendered miette report followed by a newline, or nothing when reports are off.
fn report_prefix(name: &str, source: &str, err: &CompileError, with_report: bool) -> String {
    if !with_report {
        return String::new();
    }
    let mut report = diagnostics::format_error(name, source, err);
    if !report.ends_with('\n') {
        report.push('\n');
    }
    report
}
