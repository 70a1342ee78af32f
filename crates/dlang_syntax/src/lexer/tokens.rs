//! Token types for the D lexer.
//!
//! The lexer uses **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for reserved words (including word operators like `and`)
//! - `Operator(OperatorId)` for symbol operators
//! - `Punctuation(PunctuationId)` for punctuation tokens
//!
//! ## Notes
//! - `true`/`false` are reserved words but lex as `Bool` literal tokens.
//! - `crate::token_helpers` adds registry-id predicates and word-operator resolution.

use std::fmt;

use crate::ast::{Position, Span};
use dlang_core::lang::keywords::{self, KeywordId};
use dlang_core::lang::operators::{self, OperatorId};
use dlang_core::lang::punctuation::{self, PunctuationId};

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // ========== Keyword / operator / punctuation (ID-based) ==========
    Keyword(KeywordId),
    Operator(OperatorId),
    Punctuation(PunctuationId),

    // ========== Identifiers and Literals ==========
    Ident(String),
    Int(i64),
    Real(f64),
    Str(String),
    Bool(bool),

    // ========== Special ==========
    Eof,
}

impl TokenKind {
    /// Name printed by the token dump (`TOK_WHILE`, `TOK_INTEGER`, ..., `YYEOF`).
    pub fn dump_name(&self) -> &'static str {
        match self {
            TokenKind::Keyword(id) => keywords::token_name(*id),
            TokenKind::Operator(id) => operators::token_name(*id),
            TokenKind::Punctuation(id) => punctuation::token_name(*id),
            TokenKind::Ident(_) => "TOK_IDENT",
            TokenKind::Int(_) => "TOK_INTEGER",
            TokenKind::Real(_) => "TOK_REAL",
            TokenKind::Str(_) => "TOK_STRING",
            TokenKind::Bool(true) => "TOK_TRUE",
            TokenKind::Bool(false) => "TOK_FALSE",
            TokenKind::Eof => "YYEOF",
        }
    }
}

/// Human-readable description used in syntax error messages.
impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Keyword(id) => write!(f, "'{}'", keywords::as_str(*id)),
            TokenKind::Operator(id) => write!(f, "'{}'", operators::as_str(*id)),
            TokenKind::Punctuation(id) => write!(f, "'{}'", punctuation::as_str(*id)),
            TokenKind::Ident(name) => write!(f, "identifier '{name}'"),
            TokenKind::Int(v) => write!(f, "integer {v}"),
            TokenKind::Real(v) => write!(f, "real {v}"),
            TokenKind::Str(s) => write!(f, "string {s:?}"),
            TokenKind::Bool(v) => write!(f, "'{v}'"),
            TokenKind::Eof => write!(f, "end of input"),
        }
    }
}

/// A token with its kind, start position and source span.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub pos: Position,
    pub span: Span,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, pos: Position, span: Span) -> Self {
        Self { kind, pos, span }
    }
}

/// Resolve an identifier spelling to a keyword id, if reserved.
pub fn keyword_id(name: &str) -> Option<KeywordId> {
    keywords::from_str(name)
}
