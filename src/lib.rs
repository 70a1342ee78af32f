#![forbid(unsafe_code)]
//! Command-line front end for the D teaching language.
//!
//! The language itself lives in the workspace crates: `dlang_core` holds the vocabulary registries and
//! `dlang_syntax` the lexer, parser, AST and printer. This crate only wires them to the `dparser` and `dlexer`
//! binaries.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;

pub use dlang_syntax::ast;
pub use dlang_syntax::diagnostics;
pub use dlang_syntax::lexer;
pub use dlang_syntax::parser;
pub use dlang_syntax::printer;
pub use dlang_syntax::token_dump;
