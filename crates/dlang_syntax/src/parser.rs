//! Parser for the D programming language
//!
//! Converts a token stream into a [`Node`] tree rooted at a `Program` node. Parsing is single-pass recursive descent
//! with one token of lookahead; the first syntax error aborts the parse and no tree is returned.
//!
//! ## Examples
//!
//! ```rust
//! use dlang_syntax::ast::NodeKind;
//! use dlang_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("var x := 1 + 2;").unwrap();
//! let program = parser::parse(&tokens).unwrap();
//! assert_eq!(program.kind(), NodeKind::Program);
//! assert_eq!(program.children()[0].kind(), NodeKind::VarDecl);
//! ```

use crate::ast::*;
use crate::diagnostics::CompileError;
use crate::lexer::{Token, TokenKind};
use dlang_core::lang::keywords::KeywordId;
use dlang_core::lang::operators::{self, Associativity, Fixity, OperatorId, OperatorInfo};
use dlang_core::lang::punctuation::PunctuationId;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/types.rs");
include!("parser/util.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
