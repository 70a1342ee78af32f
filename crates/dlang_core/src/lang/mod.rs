//! D language vocabulary registries.
//!
//! This module is the “front door” for language-level vocabulary: reserved keywords, operators, and punctuation.
//!
//! Callers work with **stable IDs** (e.g. `KeywordId`, `OperatorId`) and look up spellings, token-dump names and
//! metadata via registry tables instead of scattering string comparisons across the lexer and parser.
//!
//! ## Notes
//! - Registries are **pure**: no AST types, no IO, no side effects.
//! - The lexer/parser enforce syntax; registries provide spellings and metadata for shared use (token dump,
//!   diagnostics, precedence tables).
//!
//! ## Examples
//! ```rust
//! use dlang_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("loop"), Some(KeywordId::Loop));
//! assert_eq!(keywords::token_name(KeywordId::Loop), "TOK_LOOP");
//! ```

pub mod keywords;
pub mod operators;
pub mod punctuation;
