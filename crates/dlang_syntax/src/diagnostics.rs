//! Diagnostics and error reporting for the D front end.
//!
//! Lexing and parsing stop at the first problem, so a single [`CompileError`] is all a failed run ever produces.
//! Its `Display` text is the one-line message the tools print; [`format_error`] renders the same error as a
//! graphical miette report with the offending source highlighted.

use std::fmt;

use miette::{Diagnostic, NamedSource, Report, SourceSpan};
use thiserror::Error;

use crate::ast::{Position, Span};

/// A fatal lexical or syntax error with location information.
#[derive(Debug, Clone, PartialEq, Error, Diagnostic)]
pub enum CompileError {
    /// A character that cannot start any token.
    #[error("syntax error: invalid token at {pos}")]
    #[diagnostic(code(dlang::lex::invalid_token), help("this character does not start any D token"))]
    InvalidToken {
        found: char,
        pos: Position,
        #[label("invalid token")]
        span: SourceSpan,
    },

    /// An integer literal that does not fit in 64 bits.
    #[error("syntax error: integer literal {literal} is out of range at {pos}")]
    #[diagnostic(
        code(dlang::lex::integer_overflow),
        help("integer literals must fit in a signed 64-bit integer")
    )]
    IntegerOverflow {
        literal: String,
        pos: Position,
        #[label("out of range")]
        span: SourceSpan,
    },

    /// A token sequence that does not match the grammar.
    #[error("syntax error: {message} at {pos}")]
    #[diagnostic(code(dlang::parse::syntax))]
    Syntax {
        message: String,
        pos: Position,
        #[label("here")]
        span: SourceSpan,
    },
}

impl CompileError {
    pub fn invalid_token(found: char, pos: Position, span: Span) -> Self {
        CompileError::InvalidToken {
            found,
            pos,
            span: to_source_span(span),
        }
    }

    pub fn integer_overflow(literal: String, pos: Position, span: Span) -> Self {
        CompileError::IntegerOverflow {
            literal,
            pos,
            span: to_source_span(span),
        }
    }

    pub fn syntax(message: String, pos: Position, span: Span) -> Self {
        CompileError::Syntax {
            message,
            pos,
            span: to_source_span(span),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CompileError::InvalidToken { .. } | CompileError::IntegerOverflow { .. } => ErrorKind::Lexical,
            CompileError::Syntax { .. } => ErrorKind::Syntax,
        }
    }

    /// Line/column where the offending token starts.
    pub fn position(&self) -> Position {
        match self {
            CompileError::InvalidToken { pos, .. }
            | CompileError::IntegerOverflow { pos, .. }
            | CompileError::Syntax { pos, .. } => *pos,
        }
    }

    /// Byte range of the offending token.
    pub fn span(&self) -> Span {
        let span = match self {
            CompileError::InvalidToken { span, .. }
            | CompileError::IntegerOverflow { span, .. }
            | CompileError::Syntax { span, .. } => span,
        };
        Span::new(span.offset(), span.offset() + span.len())
    }
}

fn to_source_span(span: Span) -> SourceSpan {
    (span.start, span.len()).into()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lexical,
    Syntax,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Lexical => write!(f, "lexical error"),
            ErrorKind::Syntax => write!(f, "syntax error"),
        }
    }
}

/// Render `error` as a miette report over `source`.
///
/// ## Parameters
/// - `file_name`: Name shown in the report header (a path, or `<stdin>`).
/// - `source`: The full text the error's span points into.
pub fn format_error(file_name: &str, source: &str, error: &CompileError) -> String {
    let report = Report::new(error.clone()).with_source_code(NamedSource::new(file_name, source.to_string()));
    format!("{report:?}")
}
