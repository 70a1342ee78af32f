// Parser core types and entrypoint.
//
// This chunk defines the [`Parser`] type and its top-level `parse()` entrypoint.
//
// ## Notes
// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
//   single module while avoiding a single “god file”.

/// Parser state.
///
/// ## Notes
/// - The parser is single-pass and stops at the first error; there is no recovery.
/// - Most parsing helpers are implemented on `Parser` but split across multiple files.
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    /// Current statement/expression nesting; bounded by [`MAX_NESTING_DEPTH`].
    depth: usize,
    /// Statements a short `if` read past its single statement; they belong to the enclosing list.
    spilled: Vec<Node>,
}

/// Deepest statement/expression nesting accepted before the parse fails.
pub const MAX_NESTING_DEPTH: usize = 128;

impl<'a> Parser<'a> {
    /// Create a new parser for a token stream.
    ///
    /// ## Parameters
    /// - `tokens`: Token stream produced by `dlang_syntax::lexer`; it must end with an `Eof` token.
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
            spilled: Vec::new(),
        }
    }

    /// Parse the entire token stream into a `Program` node.
    ///
    /// ## Errors
    /// Returns the first [`CompileError`] encountered; no partial tree is produced.
    pub fn parse(self) -> Result<Node, CompileError> {
        self.parse_program()
    }

    fn parse_program(mut self) -> Result<Node, CompileError> {
        match self.tokens.last() {
            Some(last) if last.kind == TokenKind::Eof => {}
            last => {
                let (pos, span) = last.map_or((Position::START, Span::default()), |t| (t.pos, t.span));
                return Err(CompileError::syntax(
                    "token stream is not terminated by end of input".to_string(),
                    pos,
                    span,
                ));
            }
        }

        let line = self.peek().pos.line;
        let mut statements = Vec::new();
        while !self.is_at_end() {
            self.push_statement(&mut statements)?;
        }
        Ok(Node::program(line, statements))
    }
}
