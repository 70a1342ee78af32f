/// Type indicator parsing.
///
/// Type indicators only appear as the right operand of `is`: `int`, `real`, `bool`, `string`, `none`, `func`,
/// `[]` (array) and `{}` (tuple).
impl<'a> Parser<'a> {
    // ========================================================================
    // Type indicators
    // ========================================================================

    fn type_indicator(&mut self) -> Result<Node, CompileError> {
        let token = self.peek();
        let indicator = match &token.kind {
            TokenKind::Keyword(KeywordId::Int) => TypeIndicator::Int,
            TokenKind::Keyword(KeywordId::Real) => TypeIndicator::Real,
            TokenKind::Keyword(KeywordId::Bool) => TypeIndicator::Bool,
            TokenKind::Keyword(KeywordId::String) => TypeIndicator::String,
            TokenKind::Keyword(KeywordId::None) => TypeIndicator::None,
            TokenKind::Keyword(KeywordId::Func) => TypeIndicator::Func,
            TokenKind::Punctuation(PunctuationId::LBracket) => {
                self.advance();
                self.expect_punct(PunctuationId::RBracket, "expected ']' in array type indicator")?;
                return Ok(Node::type_indicator(token.pos.line, TypeIndicator::Array));
            }
            TokenKind::Punctuation(PunctuationId::LBrace) => {
                self.advance();
                self.expect_punct(PunctuationId::RBrace, "expected '}' in tuple type indicator")?;
                return Ok(Node::type_indicator(token.pos.line, TypeIndicator::Tuple));
            }
            _ => return Err(self.error_here("expected type indicator after 'is'")),
        };
        self.advance();
        Ok(Node::type_indicator(token.pos.line, indicator))
    }
}
