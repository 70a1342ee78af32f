//! String literal scanning.

use super::{Lexer, TokenKind};

impl<'a> Lexer<'a> {
    /// Scan a string literal whose opening `quote` has been read.
    ///
    /// Escapes: `\n`, `\t`, and any other escaped character stands for itself. End of input closes the literal with
    /// whatever was accumulated; no error is raised for a missing closing quote.
    pub(super) fn scan_string(&mut self, quote: char) -> TokenKind {
        let mut value = String::new();

        loop {
            match self.getch() {
                None => break,
                Some(c) if c == quote => break,
                Some('\\') => match self.getch() {
                    Some('n') => value.push('\n'),
                    Some('t') => value.push('\t'),
                    Some(escaped) => value.push(escaped),
                    // The next read sees end of input again and closes the literal.
                    None => {}
                },
                Some(c) => value.push(c),
            }
        }

        TokenKind::Str(value)
    }
}
