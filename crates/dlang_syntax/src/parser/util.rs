/// Miscellaneous parser utilities.
///
/// This chunk contains small shared parsing helpers that don’t cleanly fit into “stmts”, “expr”, or “types”
/// (identifier parsing, comma-separated lists, and the start-set predicates that drive body and `return` parsing).
impl<'a> Parser<'a> {
    // ========================================================================
    // Utilities
    // ========================================================================

    /// Consume an identifier, returning its line and name.
    fn identifier(&mut self) -> Result<(usize, String), CompileError> {
        match &self.peek().kind {
            TokenKind::Ident(name) => {
                let line = self.advance().pos.line;
                Ok((line, name.clone()))
            }
            _ => Err(self.error_here("expected identifier")),
        }
    }

    /// Assignment target: an identifier followed by any postfix chain.
    fn lvalue(&mut self) -> Result<Node, CompileError> {
        let (line, name) = self.identifier()?;
        self.postfix_tail(Node::ident(line, name))
    }

    /// Comma-separated expressions up to (not including) `close`; empty when `close` comes first.
    fn expression_list(&mut self, close: PunctuationId) -> Result<Vec<Node>, CompileError> {
        let mut items = Vec::new();
        if self.check_punct(close) {
            return Ok(items);
        }
        loop {
            items.push(self.expression()?);
            if !self.match_punct(PunctuationId::Comma) {
                return Ok(items);
            }
        }
    }

    /// Check if the current token can start an expression
    fn is_at_expr_start(&self) -> bool {
        matches!(
            self.peek().kind,
            TokenKind::Ident(_)
                | TokenKind::Int(_)
                | TokenKind::Real(_)
                | TokenKind::Str(_)
                | TokenKind::Bool(_)
                | TokenKind::Keyword(KeywordId::None)
                | TokenKind::Keyword(KeywordId::Func)
                | TokenKind::Keyword(KeywordId::Not)
                | TokenKind::Operator(OperatorId::Plus)
                | TokenKind::Operator(OperatorId::Minus)
                | TokenKind::Punctuation(PunctuationId::LParen)
                | TokenKind::Punctuation(PunctuationId::LBracket)
                | TokenKind::Punctuation(PunctuationId::LBrace)
        )
    }

    /// Check if the current token can start a statement
    fn is_at_stmt_start(&self) -> bool {
        matches!(
            self.peek().kind,
            TokenKind::Ident(_)
                | TokenKind::Keyword(KeywordId::Var)
                | TokenKind::Keyword(KeywordId::If)
                | TokenKind::Keyword(KeywordId::While)
                | TokenKind::Keyword(KeywordId::For)
                | TokenKind::Keyword(KeywordId::Loop)
                | TokenKind::Keyword(KeywordId::Exit)
                | TokenKind::Keyword(KeywordId::Return)
                | TokenKind::Keyword(KeywordId::Print)
        )
    }
}
