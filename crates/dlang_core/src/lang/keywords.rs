//! Define the reserved keyword vocabulary for the D language.
//!
//! This module is the single source of truth for reserved words: a stable identifier ([`KeywordId`]) plus a const
//! metadata table ([`KEYWORDS`]) that records canonical spellings, categories and token-dump names.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**: `If` is an identifier, `if` is a keyword.
//! - `true` and `false` are listed here so they cannot be used as identifiers; the lexer turns them into boolean
//!   literal tokens.
//! - Some reserved words are also “word operators” (`and`, `or`, `xor`, `not`, `is`). If you need precedence or
//!   fixity, use [`crate::lang::operators`].
//!
//! ## Examples
//! ```rust
//! use dlang_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("while"), Some(KeywordId::While));
//! assert_eq!(keywords::as_str(KeywordId::While), "while");
//! assert_eq!(keywords::from_str("While"), None);
//! ```

/// Stable identifier for every reserved keyword.
///
/// ## Notes
/// - Declaration order matches the order of [`KEYWORDS`]; [`info_for`] relies on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Declarations
    Var,
    Func,

    // Control flow / statements
    If,
    Then,
    Else,
    End,
    While,
    For,
    In,
    Loop,
    Exit,
    Return,
    Print,

    // Word operators
    Is,
    Not,
    And,
    Or,
    Xor,

    // Literals
    None,
    True,
    False,

    // Type indicators
    Int,
    Real,
    Bool,
    String,
}

/// High-level grouping for documentation and tooling.
///
/// ## Notes
/// - Categories are metadata only; they do not enforce parsing context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    Declaration,
    ControlFlow,
    Operator,
    Literal,
    Type,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
    /// Name printed by the token dump (e.g. `TOK_WHILE`).
    pub token_name: &'static str,
}

/// Registry of all keywords.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Declarations
    info(KeywordId::Var, "var", KeywordCategory::Declaration, "TOK_VAR"),
    info(KeywordId::Func, "func", KeywordCategory::Declaration, "TOK_FUNC"),
    // Control flow / statements
    info(KeywordId::If, "if", KeywordCategory::ControlFlow, "TOK_IF"),
    info(KeywordId::Then, "then", KeywordCategory::ControlFlow, "TOK_THEN"),
    info(KeywordId::Else, "else", KeywordCategory::ControlFlow, "TOK_ELSE"),
    info(KeywordId::End, "end", KeywordCategory::ControlFlow, "TOK_END"),
    info(KeywordId::While, "while", KeywordCategory::ControlFlow, "TOK_WHILE"),
    info(KeywordId::For, "for", KeywordCategory::ControlFlow, "TOK_FOR"),
    info(KeywordId::In, "in", KeywordCategory::ControlFlow, "TOK_IN"),
    info(KeywordId::Loop, "loop", KeywordCategory::ControlFlow, "TOK_LOOP"),
    info(KeywordId::Exit, "exit", KeywordCategory::ControlFlow, "TOK_EXIT"),
    info(KeywordId::Return, "return", KeywordCategory::ControlFlow, "TOK_RETURN"),
    info(KeywordId::Print, "print", KeywordCategory::ControlFlow, "TOK_PRINT"),
    // Word operators
    info(KeywordId::Is, "is", KeywordCategory::Operator, "TOK_IS"),
    info(KeywordId::Not, "not", KeywordCategory::Operator, "TOK_NOT"),
    info(KeywordId::And, "and", KeywordCategory::Operator, "TOK_AND"),
    info(KeywordId::Or, "or", KeywordCategory::Operator, "TOK_OR"),
    info(KeywordId::Xor, "xor", KeywordCategory::Operator, "TOK_XOR"),
    // Literals
    info(KeywordId::None, "none", KeywordCategory::Literal, "TOK_NONE"),
    info(KeywordId::True, "true", KeywordCategory::Literal, "TOK_TRUE"),
    info(KeywordId::False, "false", KeywordCategory::Literal, "TOK_FALSE"),
    // Type indicators
    info(KeywordId::Int, "int", KeywordCategory::Type, "TOK_TYPE_INT"),
    info(KeywordId::Real, "real", KeywordCategory::Type, "TOK_TYPE_REAL"),
    info(KeywordId::Bool, "bool", KeywordCategory::Type, "TOK_TYPE_BOOL"),
    info(KeywordId::String, "string", KeywordCategory::Type, "TOK_TYPE_STRING"),
];

/// Canonical spelling.
///
/// ## Parameters
/// - `id`: Keyword identifier.
///
/// ## Returns
/// - The canonical spelling for `id`.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Category.
///
/// ## Returns
/// - The keyword's [`KeywordCategory`].
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Token-dump name (e.g. `TOK_FOR`).
pub fn token_name(id: KeywordId) -> &'static str {
    info_for(id).token_name
}

/// Full metadata.
///
/// ## Parameters
/// - `id`: Keyword identifier.
///
/// ## Returns
/// - The associated [`KeywordInfo`] from [`KEYWORDS`].
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    &KEYWORDS[id as usize]
}

/// Lookup by spelling.
///
/// ## Parameters
/// - `s`: Candidate keyword spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if the spelling matches this registry.
/// - `None` otherwise.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(
    id: KeywordId,
    canonical: &'static str,
    category: KeywordCategory,
    token_name: &'static str,
) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        category,
        token_name,
    }
}
