//! Syntax front end for the D language: lexer, parser, AST, printer, diagnostics.
//!
//! ## Notes
//! - This crate is “syntax-only”: it does not do name resolution, type checking, or evaluation.
//! - Vocabulary identity (keywords/operators/punctuation) comes from `dlang_core::lang` registries.
//! - The printer and token dump produce byte-exact text used as golden-file oracles.
//!
//! ## Examples
//! ```rust
//! use dlang_syntax::{lexer, parser, printer};
//!
//! let tokens = lexer::lex("for i in 1..5 loop print i; end").unwrap();
//! let program = parser::parse(&tokens).unwrap();
//! assert!(printer::print_tree(&program).contains("[ForRange] name=i  (line 1)"));
//! ```
//!
//! ## See also
//! - `dlang_core::lang` for registry-backed language vocabulary.

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod printer;
pub mod token_dump;
pub mod token_helpers;
