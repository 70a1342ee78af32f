//! Line/column bookkeeping that survives push-back across line boundaries.
//!
//! Every character read advances the cursor (a read at end of input included); every push-back retreats it. Columns
//! count bytes, so a multi-byte character moves the column by its UTF-8 length. Pushing back a newline has to land
//! on the last column of the previous line, so the width reached on each visited line is remembered.

use crate::ast::Position;

#[derive(Debug, Clone)]
pub(crate) struct Cursor {
    line: usize,
    col: usize,
    /// Maximum column reached per line; index 0 is unused.
    line_widths: Vec<usize>,
}

impl Cursor {
    pub(crate) fn new() -> Self {
        Self {
            line: 1,
            col: 1,
            line_widths: vec![0, 0],
        }
    }

    pub(crate) fn position(&self) -> Position {
        Position::new(self.line, self.col)
    }

    /// Account for reading `c` (`None` is end of input).
    pub(crate) fn advance(&mut self, c: Option<char>) {
        match c {
            Some('\n') => self.next_line(),
            Some(c) => self.next_col(c.len_utf8()),
            None => self.next_col(1),
        }
    }

    /// Undo [`Cursor::advance`] for `c`.
    pub(crate) fn retreat(&mut self, c: Option<char>) {
        match c {
            Some('\n') => self.prev_line(),
            Some(c) => self.prev_col(c.len_utf8()),
            None => self.prev_col(1),
        }
    }

    fn next_line(&mut self) {
        self.line += 1;
        self.col = 1;
        if self.line_widths.len() <= self.line {
            self.line_widths.push(1);
        }
    }

    fn next_col(&mut self, width: usize) {
        self.col += width;
        let width = &mut self.line_widths[self.line];
        *width = (*width).max(self.col);
    }

    fn prev_line(&mut self) {
        if self.line > 1 {
            self.line -= 1;
            self.col = self.line_widths[self.line];
        }
    }

    fn prev_col(&mut self, width: usize) {
        self.col = self.col.saturating_sub(width);
    }
}
