/// Expression parsing methods.
///
/// This chunk implements the expression grammar. Binary operators are parsed by precedence climbing over the
/// operator registry (`dlang_core::lang::operators`), which yields the ladder
/// `or` → `and` → `xor` → comparison → additive → multiplicative; below that come unary → `is` → postfix → primary.
///
/// ## Notes
/// - Operator identities are carried by [`TokenKind::Operator`] / [`OperatorId`] (word operators by
///   [`TokenKind::Keyword`]) rather than string spellings.
/// - Left-associative operators loop; non-associative ones (comparisons) allow a single operator per level.
/// - Binary and postfix nodes take the line of their left operand; prefix nodes take the operator's line.
/// - Every re-entry into `expression` and every prefix operator counts one nesting level.
impl<'a> Parser<'a> {
    // ========================================================================
    // Expressions
    // ========================================================================

    fn expression(&mut self) -> Result<Node, CompileError> {
        self.nested(|p| p.binary_expr(1))
    }

    /// Parse operands joined by infix operators binding at least as tightly as `min_precedence`.
    fn binary_expr(&mut self, min_precedence: u8) -> Result<Node, CompileError> {
        let mut left = self.unary()?;

        while let Some((info, op)) = self.infix_operator().filter(|(info, _)| info.precedence >= min_precedence) {
            self.advance();
            let next = match info.associativity {
                Associativity::Right => info.precedence,
                Associativity::Left | Associativity::None => info.precedence + 1,
            };
            let right = self.binary_expr(next)?;
            left = Node::binary(op, left, right);

            if info.associativity == Associativity::None
                && self.infix_operator().is_some_and(|(other, _)| other.precedence == info.precedence)
            {
                return Err(self.error_here("comparison operators cannot be chained"));
            }
        }

        Ok(left)
    }

    /// Registry entry of the current token when it is a binary expression operator.
    fn infix_operator(&self) -> Option<(&'static OperatorInfo, BinaryOp)> {
        let id = self.peek().kind.operator()?;
        let info = operators::info_for(id);
        // `:=` and `..` sit at precedence 0 and are statement syntax.
        if info.fixity != Fixity::Infix || info.precedence == 0 {
            return None;
        }
        Some((info, binary_op(id)?))
    }

    /// Prefix `+`, `-` and `not`; right-associative.
    fn unary(&mut self) -> Result<Node, CompileError> {
        let token = self.peek();
        let op = match &token.kind {
            TokenKind::Operator(OperatorId::Plus) => UnaryOp::Plus,
            TokenKind::Operator(OperatorId::Minus) => UnaryOp::Minus,
            TokenKind::Keyword(KeywordId::Not) => UnaryOp::Not,
            _ => return self.is_test(),
        };
        self.advance();
        let operand = self.nested(Self::unary)?;
        Ok(Node::unary(token.pos.line, op, operand))
    }

    /// `operand is <type>`; at most one test per operand.
    fn is_test(&mut self) -> Result<Node, CompileError> {
        let operand = self.postfix()?;
        if !self.match_keyword(KeywordId::Is) {
            return Ok(operand);
        }
        let indicator = self.type_indicator()?;
        if self.check_keyword(KeywordId::Is) {
            return Err(self.error_here("type tests cannot be chained"));
        }
        Ok(Node::is_type(operand, indicator))
    }

    fn postfix(&mut self) -> Result<Node, CompileError> {
        let base = self.primary()?;
        self.postfix_tail(base)
    }

    /// Apply any number of `[index]`, `(args)`, `.field` and `.N` suffixes to `base`.
    fn postfix_tail(&mut self, mut base: Node) -> Result<Node, CompileError> {
        loop {
            if self.match_punct(PunctuationId::LBracket) {
                let index = self.expression()?;
                self.expect_punct(PunctuationId::RBracket, "expected ']' after index")?;
                base = Node::index(base, index);
            } else if self.match_punct(PunctuationId::LParen) {
                let args = self.expression_list(PunctuationId::RParen)?;
                self.expect_punct(PunctuationId::RParen, "expected ')' after arguments")?;
                base = Node::call(base, args);
            } else if self.match_punct(PunctuationId::Dot) {
                match &self.peek().kind {
                    TokenKind::Ident(field) => {
                        self.advance();
                        base = Node::dot_field(base, field.clone());
                    }
                    TokenKind::Int(index) => {
                        self.advance();
                        base = Node::dot_int(base, *index);
                    }
                    _ => return Err(self.error_here("expected field name or tuple index after '.'")),
                }
            } else {
                return Ok(base);
            }
        }
    }

    fn primary(&mut self) -> Result<Node, CompileError> {
        let token = self.peek();
        let line = token.pos.line;

        let node = match &token.kind {
            TokenKind::Ident(name) => Node::ident(line, name.clone()),
            TokenKind::Int(v) => Node::int_lit(line, *v),
            TokenKind::Real(v) => Node::real_lit(line, *v),
            TokenKind::Str(s) => Node::str_lit(line, s.clone()),
            TokenKind::Bool(b) => Node::bool_lit(line, *b),
            TokenKind::Keyword(KeywordId::None) => Node::none_lit(line),
            TokenKind::Keyword(KeywordId::Func) => return self.func_literal(),
            TokenKind::Punctuation(PunctuationId::LParen) => {
                self.advance();
                let inner = self.expression()?;
                self.expect_punct(PunctuationId::RParen, "expected ')' after expression")?;
                return Ok(inner);
            }
            TokenKind::Punctuation(PunctuationId::LBracket) => return self.array_literal(),
            TokenKind::Punctuation(PunctuationId::LBrace) => return self.tuple_literal(),
            _ => return Err(self.error_here("expected expression")),
        };

        self.advance();
        Ok(node)
    }

    // ========================================================================
    // Composite literals
    // ========================================================================

    /// `[e, e, ...]`
    fn array_literal(&mut self) -> Result<Node, CompileError> {
        let line = self.advance().pos.line; // [
        let elements = self.expression_list(PunctuationId::RBracket)?;
        self.expect_punct(PunctuationId::RBracket, "expected ']' to close array literal")?;
        Ok(Node::array_lit(line, elements))
    }

    /// `{name := e, e, ...}`; elements may be named or positional.
    fn tuple_literal(&mut self) -> Result<Node, CompileError> {
        let line = self.advance().pos.line; // {
        let mut elements = Vec::new();
        if !self.check_punct(PunctuationId::RBrace) {
            loop {
                elements.push(self.tuple_element()?);
                if !self.match_punct(PunctuationId::Comma) {
                    break;
                }
            }
        }
        self.expect_punct(PunctuationId::RBrace, "expected '}' to close tuple literal")?;
        Ok(Node::tuple_lit(line, elements))
    }

    fn tuple_element(&mut self) -> Result<Node, CompileError> {
        let line = self.current_line();
        let name = if matches!(self.peek().kind, TokenKind::Ident(_))
            && self.peek_next().kind.is_operator(OperatorId::Assign)
        {
            let (_, name) = self.identifier()?;
            self.advance(); // :=
            Some(name)
        } else {
            None
        };
        let value = self.expression()?;
        Ok(Node::tuple_elem(line, name, value))
    }

    /// `func [(params)] is body end` or `func [(params)] => expr`.
    ///
    /// The arrow form's body is a single `Return` of the expression.
    fn func_literal(&mut self) -> Result<Node, CompileError> {
        let line = self.advance().pos.line; // func

        let params_line = self.current_line();
        let mut params = Vec::new();
        if self.match_punct(PunctuationId::LParen) {
            if !self.check_punct(PunctuationId::RParen) {
                loop {
                    let (param_line, name) = self.identifier()?;
                    params.push(Node::ident(param_line, name));
                    if !self.match_punct(PunctuationId::Comma) {
                        break;
                    }
                }
            }
            self.expect_punct(PunctuationId::RParen, "expected ')' after parameters")?;
        }
        let params = Node::param_list(params_line, params);

        let body = if self.match_keyword(KeywordId::Is) {
            let body = self.body()?;
            self.expect_keyword(KeywordId::End, "expected 'end' to close function body")?;
            body
        } else if self.match_punct(PunctuationId::FatArrow) {
            let value = self.expression()?;
            let value_line = value.line();
            Node::body(value_line, vec![Node::return_stmt(value_line, Some(value))])
        } else {
            return Err(self.error_here("expected 'is' or '=>' in function literal"));
        };

        Ok(Node::func_lit(line, params, body))
    }
}

fn binary_op(id: OperatorId) -> Option<BinaryOp> {
    Some(match id {
        OperatorId::Or => BinaryOp::Or,
        OperatorId::And => BinaryOp::And,
        OperatorId::Xor => BinaryOp::Xor,
        OperatorId::Lt => BinaryOp::Lt,
        OperatorId::LtEq => BinaryOp::Le,
        OperatorId::Gt => BinaryOp::Gt,
        OperatorId::GtEq => BinaryOp::Ge,
        OperatorId::Eq => BinaryOp::Eq,
        OperatorId::NotEq => BinaryOp::Neq,
        OperatorId::Plus => BinaryOp::Add,
        OperatorId::Minus => BinaryOp::Sub,
        OperatorId::Star => BinaryOp::Mul,
        OperatorId::Slash => BinaryOp::Div,
        OperatorId::Assign | OperatorId::DotDot | OperatorId::Not | OperatorId::Is => return None,
    })
}
