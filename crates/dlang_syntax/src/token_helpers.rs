//! Registry-aware predicates on [`TokenKind`].
//!
//! The parser and the lexer tests match tokens by registry id; these keep those checks to one call.

use crate::lexer::TokenKind;
use dlang_core::lang::keywords::{self, KeywordId};
use dlang_core::lang::operators::{self, OperatorId};
use dlang_core::lang::punctuation::PunctuationId;

impl TokenKind {
    pub fn keyword_id(&self) -> Option<KeywordId> {
        match self {
            TokenKind::Keyword(id) => Some(*id),
            _ => None,
        }
    }

    pub fn is_keyword(&self, id: KeywordId) -> bool {
        self.keyword_id() == Some(id)
    }

    /// `true` only for symbol operators; `and`/`or`/`xor`/`not`/`is` are keyword tokens.
    pub fn is_operator(&self, id: OperatorId) -> bool {
        matches!(self, TokenKind::Operator(o) if *o == id)
    }

    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        matches!(self, TokenKind::Punctuation(p) if *p == id)
    }

    /// Operator this token denotes, resolving word operators through their keyword spelling.
    ///
    /// `TOK_AND` and `TOK_PLUS` both answer here; `true` or `while` do not.
    pub fn operator(&self) -> Option<OperatorId> {
        match self {
            TokenKind::Operator(id) => Some(*id),
            TokenKind::Keyword(id) => operators::from_str(keywords::as_str(*id)),
            _ => None,
        }
    }
}
