//! Numeric literal scanning.

use super::{Lexer, TokenKind};
use crate::diagnostics::CompileError;

impl<'a> Lexer<'a> {
    /// Scan an integer or real literal whose first digit has been read.
    ///
    /// A `.` needs one more character of lookahead: `..` ends the number (so `1..10` is a range), anything else makes
    /// the literal real and scanning continues. A literal without a `.` is an integer.
    pub(super) fn scan_number(&mut self, first: char) -> Result<TokenKind, CompileError> {
        let mut text = String::from(first);
        let mut is_real = false;

        loop {
            let c = self.getch();
            match c {
                Some(d) if d.is_ascii_digit() => text.push(d),
                Some('.') => {
                    let next = self.getch();
                    if next == Some('.') {
                        self.ungetch(next);
                        self.ungetch(c);
                        break;
                    }
                    is_real = true;
                    text.push('.');
                    self.ungetch(next);
                }
                _ => {
                    self.ungetch(c);
                    break;
                }
            }
        }

        if is_real {
            Ok(TokenKind::Real(real_prefix_value(&text)))
        } else {
            text.parse::<i64>()
                .map(TokenKind::Int)
                .map_err(|_| CompileError::integer_overflow(text, self.begin, self.token_span()))
        }
    }
}

/// Value of the longest valid real prefix of `text` (`1.5.3` is `1.5`).
fn real_prefix_value(text: &str) -> f64 {
    let end = text.match_indices('.').nth(1).map_or(text.len(), |(i, _)| i);
    text[..end].parse().unwrap_or(0.0)
}
