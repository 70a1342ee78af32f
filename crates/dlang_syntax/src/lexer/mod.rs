//! Lexer for the D programming language
//!
//! Handles tokenization including:
//! - Keywords and identifiers (`true`/`false` become boolean literals)
//! - Integer and real literals, with `1..10` split as a range rather than a malformed real
//! - Quoted strings with backslash escapes
//! - Operators and punctuation resolved with one character of lookahead
//! - `//` line comments, skipped like whitespace
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)
//! - `position` - line/column cursor with push-back bookkeeping
//! - `strings` - String literal scanning
//! - `numbers` - Numeric literal scanning

mod numbers;
mod position;
mod strings;
pub mod tokens;

pub use tokens::{Token, TokenKind, keyword_id};

use crate::ast::{Position, Span};
use crate::diagnostics::CompileError;
use dlang_core::lang::keywords::KeywordId;
use dlang_core::lang::operators::OperatorId;
use dlang_core::lang::punctuation::PunctuationId;
use position::Cursor;

// ============================================================================
// LEXER STATE
// ----------------------------------------------------------------------------
// Characters are pulled one at a time and may be pushed back (LIFO). The
// cursor mirrors every pull and push-back, so the start position of a token
// is simply the cursor position before its first character is read.
// ============================================================================

/// Lexer for D source code.
///
/// Produces one token per [`Lexer::next_token`] call; the first lexical error is fatal.
pub struct Lexer<'a> {
    chars: std::str::Chars<'a>,
    pushed_back: Vec<char>,
    cursor: Cursor,
    offset: usize,
    begin: Position,
    begin_offset: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            chars: source.chars(),
            pushed_back: Vec::new(),
            cursor: Cursor::new(),
            offset: 0,
            begin: Position::START,
            begin_offset: 0,
        }
    }

    /// Tokenize the entire source code.
    ///
    /// The token stream always ends with an `Eof` token.
    pub fn tokenize(mut self) -> Result<Vec<Token>, CompileError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let done = token.kind == TokenKind::Eof;
            tokens.push(token);
            if done {
                return Ok(tokens);
            }
        }
    }

    /// Scan and return the next token, or `Eof` once the input is exhausted.
    pub fn next_token(&mut self) -> Result<Token, CompileError> {
        let Some(c) = self.skip_trivia() else {
            return Ok(Token::new(TokenKind::Eof, self.begin, Span::new(self.offset, self.offset)));
        };

        let kind = match c {
            _ if is_ident_start(c) => self.scan_identifier(c),
            _ if c.is_ascii_digit() => self.scan_number(c)?,
            '"' | '\'' => self.scan_string(c),

            '+' => TokenKind::Operator(OperatorId::Plus),
            '-' => TokenKind::Operator(OperatorId::Minus),
            '*' => TokenKind::Operator(OperatorId::Star),
            '/' => self.operator('=', OperatorId::NotEq, OperatorId::Slash),
            '<' => self.operator('=', OperatorId::LtEq, OperatorId::Lt),
            '>' => self.operator('=', OperatorId::GtEq, OperatorId::Gt),
            '=' => {
                if self.match_char('>') {
                    TokenKind::Punctuation(PunctuationId::FatArrow)
                } else {
                    TokenKind::Operator(OperatorId::Eq)
                }
            }
            ':' => {
                if self.match_char('=') {
                    TokenKind::Operator(OperatorId::Assign)
                } else {
                    return Err(self.invalid_token(c));
                }
            }
            '.' => {
                if self.match_char('.') {
                    TokenKind::Operator(OperatorId::DotDot)
                } else {
                    TokenKind::Punctuation(PunctuationId::Dot)
                }
            }

            '(' => TokenKind::Punctuation(PunctuationId::LParen),
            ')' => TokenKind::Punctuation(PunctuationId::RParen),
            '[' => TokenKind::Punctuation(PunctuationId::LBracket),
            ']' => TokenKind::Punctuation(PunctuationId::RBracket),
            '{' => TokenKind::Punctuation(PunctuationId::LBrace),
            '}' => TokenKind::Punctuation(PunctuationId::RBrace),
            ',' => TokenKind::Punctuation(PunctuationId::Comma),
            ';' => TokenKind::Punctuation(PunctuationId::Semicolon),

            _ => return Err(self.invalid_token(c)),
        };

        Ok(Token::new(kind, self.begin, self.token_span()))
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    /// Read one character; `None` at end of input. Always moves the cursor.
    fn getch(&mut self) -> Option<char> {
        let c = self.pushed_back.pop().or_else(|| self.chars.next());
        self.cursor.advance(c);
        if let Some(c) = c {
            self.offset += c.len_utf8();
        }
        c
    }

    /// Push back a character returned by [`Lexer::getch`].
    fn ungetch(&mut self, c: Option<char>) {
        self.cursor.retreat(c);
        if let Some(c) = c {
            self.offset -= c.len_utf8();
            self.pushed_back.push(c);
        }
    }

    fn match_char(&mut self, expected: char) -> bool {
        let c = self.getch();
        if c == Some(expected) {
            true
        } else {
            self.ungetch(c);
            false
        }
    }

    fn mark_begin(&mut self) {
        self.begin = self.cursor.position();
        self.begin_offset = self.offset;
    }

    fn token_span(&self) -> Span {
        Span::new(self.begin_offset, self.offset)
    }

    // ========================================================================
    // Whitespace and comments
    // ========================================================================

    /// Skip whitespace and `//` comments, returning the first character of the next token.
    ///
    /// The token start is re-marked after every skipped whitespace character. A comment that runs into end of input
    /// leaves the start where the comment began.
    fn skip_trivia(&mut self) -> Option<char> {
        self.mark_begin();
        loop {
            let mut c = self.getch()?;
            if c == '/' {
                let next = self.getch();
                if next == Some('/') {
                    if !self.skip_line_comment() {
                        return None;
                    }
                    c = '\n';
                } else {
                    self.ungetch(next);
                }
            }
            if !is_space(c) {
                return Some(c);
            }
            self.mark_begin();
        }
    }

    /// Consume a comment body through its newline. Returns `false` if end of input came first.
    fn skip_line_comment(&mut self) -> bool {
        loop {
            match self.getch() {
                Some('\n') => return true,
                Some(_) => {}
                None => return false,
            }
        }
    }

    // ========================================================================
    // Operator helpers
    // ========================================================================

    /// Two-character operator if `second` follows, else the single-character one.
    fn operator(&mut self, second: char, double: OperatorId, single: OperatorId) -> TokenKind {
        if self.match_char(second) {
            TokenKind::Operator(double)
        } else {
            TokenKind::Operator(single)
        }
    }

    fn invalid_token(&self, found: char) -> CompileError {
        CompileError::invalid_token(found, self.begin, self.token_span())
    }

    // ========================================================================
    // Identifier scanning
    // ========================================================================

    fn scan_identifier(&mut self, first: char) -> TokenKind {
        let mut text = String::from(first);
        loop {
            let c = self.getch();
            match c {
                Some(c) if is_ident_continue(c) => text.push(c),
                _ => {
                    self.ungetch(c);
                    break;
                }
            }
        }

        match keyword_id(&text) {
            Some(KeywordId::True) => TokenKind::Bool(true),
            Some(KeywordId::False) => TokenKind::Bool(false),
            Some(id) => TokenKind::Keyword(id),
            None => TokenKind::Ident(text),
        }
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Check if a character can start an identifier (ASCII-only).
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Check if a character can continue an identifier (ASCII-only).
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// C `isspace`: space, tab, newline, vertical tab, form feed, carriage return.
fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Convenience function to lex a source string.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, CompileError> {
    let result = Lexer::new(source).tokenize();
    match &result {
        Ok(tokens) => tracing::trace!(token_count = tokens.len(), "lexed"),
        Err(err) => tracing::debug!(position = %err.position(), error = %err, "lexing failed"),
    }
    result
}

// ============================================================================
// TESTS
// ============================================================================
