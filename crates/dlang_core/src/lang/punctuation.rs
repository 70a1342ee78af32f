//! Punctuation vocabulary.
//!
//! This module defines the canonical set of non-operator punctuation tokens used by the lexer/parser: delimiters,
//! separators, the access dot, and the `=>` arrow.
//!
//! ## Notes
//! - This module is vocabulary only (spellings + metadata). It does not tokenize source text.
//!
//! ## Examples
//! ```rust
//! use dlang_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(punctuation::from_str("=>"), Some(PunctuationId::FatArrow));
//! assert_eq!(punctuation::token_name(PunctuationId::FatArrow), "TOK_ARROW");
//! ```

/// Broad syntactic grouping for punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationCategory {
    /// Brackets and braces.
    Delimiter,
    /// Separators like `,` and `;`.
    Separator,
    /// The member/tuple access `.`.
    Access,
    /// The `=>` arrow.
    Arrow,
}

/// Stable identifier for punctuation tokens.
///
/// ## Notes
/// - Declaration order matches the order of [`PUNCTUATION`]; [`info_for`] relies on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationId {
    // Delimiters
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,

    // Separators
    Comma,
    Semicolon,

    // Access
    Dot,

    // Arrow
    FatArrow,
}

/// Metadata for a punctuation token.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub id: PunctuationId,
    pub canonical: &'static str,
    pub category: PunctuationCategory,
    /// Name printed by the token dump (e.g. `TOK_LPAREN`).
    pub token_name: &'static str,
}

/// Registry of all punctuation tokens.
pub const PUNCTUATION: &[PunctuationInfo] = &[
    // Delimiters
    info(PunctuationId::LParen, "(", PunctuationCategory::Delimiter, "TOK_LPAREN"),
    info(PunctuationId::RParen, ")", PunctuationCategory::Delimiter, "TOK_RPAREN"),
    info(PunctuationId::LBracket, "[", PunctuationCategory::Delimiter, "TOK_LBRACKET"),
    info(PunctuationId::RBracket, "]", PunctuationCategory::Delimiter, "TOK_RBRACKET"),
    info(PunctuationId::LBrace, "{", PunctuationCategory::Delimiter, "TOK_LBRACE"),
    info(PunctuationId::RBrace, "}", PunctuationCategory::Delimiter, "TOK_RBRACE"),
    // Separators
    info(PunctuationId::Comma, ",", PunctuationCategory::Separator, "TOK_COMMA"),
    info(PunctuationId::Semicolon, ";", PunctuationCategory::Separator, "TOK_SEMI"),
    // Access
    info(PunctuationId::Dot, ".", PunctuationCategory::Access, "TOK_DOT"),
    // Arrow
    info(PunctuationId::FatArrow, "=>", PunctuationCategory::Arrow, "TOK_ARROW"),
];

/// Canonical spelling.
pub fn as_str(id: PunctuationId) -> &'static str {
    info_for(id).canonical
}

/// Category.
pub fn category(id: PunctuationId) -> PunctuationCategory {
    info_for(id).category
}

/// Token-dump name.
pub fn token_name(id: PunctuationId) -> &'static str {
    info_for(id).token_name
}

/// Full metadata.
///
/// ## Returns
/// - The associated [`PunctuationInfo`] from [`PUNCTUATION`].
pub fn info_for(id: PunctuationId) -> &'static PunctuationInfo {
    &PUNCTUATION[id as usize]
}

/// Lookup by spelling.
///
/// ## Returns
/// - `Some(PunctuationId)` if the spelling matches this registry.
/// - `None` otherwise.
pub fn from_str(s: &str) -> Option<PunctuationId> {
    PUNCTUATION.iter().find(|p| p.canonical == s).map(|p| p.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(
    id: PunctuationId,
    canonical: &'static str,
    category: PunctuationCategory,
    token_name: &'static str,
) -> PunctuationInfo {
    PunctuationInfo {
        id,
        canonical,
        category,
        token_name,
    }
}
