//! Provide the canonical language vocabulary and small pure helpers shared by the D front end.
//!
//! This crate is intentionally small and dependency-free. It contains deterministic data and helpers that both:
//! - the lexer/parser use to classify reserved words, operators, and punctuation, and
//! - the printing tools (AST printer, token dump) use to render names and numeric values identically.
//!
//! ## Notes
//!
//! - This is a “vocabulary core” crate: **no IO**, no global mutable state, and no syntax-tree types.
//! - Current scope: keyword/operator/punctuation registries and C-style `%g` float rendering.

pub mod lang;
pub mod numeric;
