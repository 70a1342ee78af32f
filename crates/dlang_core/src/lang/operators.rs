//! Operator vocabulary.
//!
//! This module defines the canonical operator set (symbol operators like `+` and word operators like `and`) along
//! with the metadata the parser's precedence ladder is built from: precedence, associativity, and fixity.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - Some operators are spelled using reserved words (e.g. `"and"`). Those entries have
//!   [`OperatorInfo::is_keyword_spelling`] set to `true` and are lexed as keywords; use this module when you need
//!   operator semantics like precedence.
//! - `:=` and `..` are listed for the token dump but are statement/range syntax, not expression operators. They carry
//!   precedence `0`.
//!
//! ## Examples
//! ```rust
//! use dlang_core::lang::operators::{self, OperatorId};
//!
//! assert_eq!(operators::from_str("/="), Some(OperatorId::NotEq));
//! assert_eq!(operators::info_for(OperatorId::Plus).precedence, 50);
//! ```

/// Define how operators associate when chained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Associativity {
    Left,
    Right,
    None,
}

/// Define whether an operator is infix (binary), prefix (unary), or postfix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fixity {
    Infix,
    Prefix,
    Postfix,
}

/// Stable identifier for every operator.
///
/// ## Notes
/// - Declaration order matches the order of [`OPERATORS`]; [`info_for`] relies on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Arithmetic
    Plus,
    Minus,
    Star,
    Slash,

    // Comparison
    Lt,
    LtEq,
    Gt,
    GtEq,
    Eq,
    NotEq,

    // Statement / range syntax
    Assign,
    DotDot,

    // Word operators
    Or,
    And,
    Xor,
    Not,
    Is,
}

/// Metadata for an operator.
///
/// ## Notes
/// - `precedence` is a relative ordering where higher binds tighter.
/// - `Plus`/`Minus` are both infix (additive) and prefix (unary); the table records the infix role and
///   [`PREFIX_PRECEDENCE`] covers the prefix one.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spelling: &'static str,
    /// Name printed by the token dump (e.g. `TOK_NEQ`).
    pub token_name: &'static str,
    pub precedence: u8,
    pub associativity: Associativity,
    pub fixity: Fixity,
    pub is_keyword_spelling: bool,
}

/// Binding power of the prefix operators `+`, `-`, and `not`.
pub const PREFIX_PRECEDENCE: u8 = 70;

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    // Arithmetic
    op(OperatorId::Plus, "+", "TOK_PLUS", 50, Associativity::Left, Fixity::Infix, false),
    op(OperatorId::Minus, "-", "TOK_MINUS", 50, Associativity::Left, Fixity::Infix, false),
    op(OperatorId::Star, "*", "TOK_STAR", 60, Associativity::Left, Fixity::Infix, false),
    op(OperatorId::Slash, "/", "TOK_SLASH", 60, Associativity::Left, Fixity::Infix, false),
    // Comparison
    op(OperatorId::Lt, "<", "TOK_LT", 40, Associativity::None, Fixity::Infix, false),
    op(OperatorId::LtEq, "<=", "TOK_LE", 40, Associativity::None, Fixity::Infix, false),
    op(OperatorId::Gt, ">", "TOK_GT", 40, Associativity::None, Fixity::Infix, false),
    op(OperatorId::GtEq, ">=", "TOK_GE", 40, Associativity::None, Fixity::Infix, false),
    op(OperatorId::Eq, "=", "TOK_EQ", 40, Associativity::None, Fixity::Infix, false),
    op(OperatorId::NotEq, "/=", "TOK_NEQ", 40, Associativity::None, Fixity::Infix, false),
    // Statement / range syntax
    op(OperatorId::Assign, ":=", "TOK_ASSIGN", 0, Associativity::None, Fixity::Infix, false),
    op(OperatorId::DotDot, "..", "TOK_DOTDOT", 0, Associativity::None, Fixity::Infix, false),
    // Word operators
    op(OperatorId::Or, "or", "TOK_OR", 10, Associativity::Left, Fixity::Infix, true),
    op(OperatorId::And, "and", "TOK_AND", 20, Associativity::Left, Fixity::Infix, true),
    op(OperatorId::Xor, "xor", "TOK_XOR", 30, Associativity::Left, Fixity::Infix, true),
    op(OperatorId::Not, "not", "TOK_NOT", PREFIX_PRECEDENCE, Associativity::Right, Fixity::Prefix, true),
    op(OperatorId::Is, "is", "TOK_IS", 80, Associativity::None, Fixity::Postfix, true),
];

/// Full metadata.
///
/// ## Parameters
/// - `id`: Operator identifier.
///
/// ## Returns
/// - The associated [`OperatorInfo`] from [`OPERATORS`].
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    &OPERATORS[id as usize]
}

/// Canonical spelling.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).spelling
}

/// Token-dump name.
pub fn token_name(id: OperatorId) -> &'static str {
    info_for(id).token_name
}

/// Binding power; higher binds tighter.
pub fn precedence(id: OperatorId) -> u8 {
    info_for(id).precedence
}

/// Resolve an operator spelling to its identifier.
///
/// ## Parameters
/// - `spelling`: Candidate operator token (symbol or word operator).
///
/// ## Returns
/// - `Some(OperatorId)` if the spelling exists in [`OPERATORS`].
/// - `None` otherwise.
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.spelling == spelling).map(|o| o.id)
}

// --- helpers -----------------------------------------------------------------

const fn op(
    id: OperatorId,
    spelling: &'static str,
    token_name: &'static str,
    precedence: u8,
    associativity: Associativity,
    fixity: Fixity,
    is_keyword_spelling: bool,
) -> OperatorInfo {
    OperatorInfo {
        id,
        spelling,
        token_name,
        precedence,
        associativity,
        fixity,
        is_keyword_spelling,
    }
}
