//! Line-per-token dump of the lexer output.
//!
//! Each line is the token's start position formatted as `{line:>4}:{col:<4}` followed by its dump name, plus
//! `(value)` for valued tokens. The dump ends with a `YYEOF` line. Like the printer output, this text is compared
//! byte-for-byte against golden files.

use crate::diagnostics::CompileError;
use crate::lexer::{self, Token, TokenKind};
use dlang_core::numeric::format_general;

/// Dump every token of `source`, one per line.
///
/// ## Errors
/// A lexical error fails the whole dump; no partial output is returned.
pub fn dump_tokens(source: &str) -> Result<String, CompileError> {
    let tokens = lexer::lex(source)?;
    let mut out = String::new();
    for token in &tokens {
        out.push_str(&token_line(token));
        out.push('\n');
    }
    Ok(out)
}

/// A single token's dump line, without the trailing newline.
pub fn token_line(token: &Token) -> String {
    let location = format!("{:>4}:{:<4}", token.pos.line, token.pos.col);
    let name = token.kind.dump_name();
    match &token.kind {
        TokenKind::Int(v) => format!("{location}{name}({v})"),
        TokenKind::Bool(b) => format!("{location}{name}({})", i64::from(*b)),
        TokenKind::Real(v) => format!("{location}{name}({})", format_general(*v)),
        TokenKind::Str(s) | TokenKind::Ident(s) => format!("{location}{name}({s})"),
        _ => format!("{location}{name}"),
    }
}
