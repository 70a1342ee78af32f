/// Statement parsing methods.
///
/// This chunk implements statement-level syntax: declarations, assignment, `if`, the loop forms, `exit`, `return`,
/// `print`, and statement-list bodies.
///
/// ## Notes
/// - `var`, assignment and `print` require a terminating `;`; after `exit` and `return` it is optional.
/// - A body is every statement up to the first token that cannot start one; the caller then expects its closer.
impl<'a> Parser<'a> {
    // ========================================================================
    // Statements
    // ========================================================================

    fn statement(&mut self) -> Result<Node, CompileError> {
        self.nested(Self::statement_inner)
    }

    fn statement_inner(&mut self) -> Result<Node, CompileError> {
        let token = self.peek();
        match &token.kind {
            TokenKind::Keyword(KeywordId::Var) => self.var_decl(),
            TokenKind::Keyword(KeywordId::If) => self.if_stmt(),
            TokenKind::Keyword(KeywordId::While) => self.while_stmt(),
            TokenKind::Keyword(KeywordId::For) => self.for_stmt(),
            TokenKind::Keyword(KeywordId::Loop) => self.loop_stmt(),
            TokenKind::Keyword(KeywordId::Exit) => self.exit_stmt(),
            TokenKind::Keyword(KeywordId::Return) => self.return_stmt(),
            TokenKind::Keyword(KeywordId::Print) => self.print_stmt(),
            TokenKind::Ident(_) => self.assignment(),
            _ => Err(self.error_here("expected statement")),
        }
    }

    /// `var name [:= expr] {, name [:= expr]} ;`
    fn var_decl(&mut self) -> Result<Node, CompileError> {
        let line = self.advance().pos.line; // var
        let mut defs = vec![self.var_def()?];
        while self.match_punct(PunctuationId::Comma) {
            defs.push(self.var_def()?);
        }
        self.expect_punct(PunctuationId::Semicolon, "expected ';' after variable declaration")?;
        Ok(Node::var_decl(line, defs))
    }

    fn var_def(&mut self) -> Result<Node, CompileError> {
        let (line, name) = self.identifier()?;
        let init = if self.match_op(OperatorId::Assign) {
            Some(self.expression()?)
        } else {
            None
        };
        Ok(Node::var_def(line, name, init))
    }

    /// `target := expr ;` where the target is an identifier with any postfix chain.
    fn assignment(&mut self) -> Result<Node, CompileError> {
        let target = self.lvalue()?;
        self.expect_op(OperatorId::Assign, "expected ':=' in assignment")?;
        let value = self.expression()?;
        self.expect_punct(PunctuationId::Semicolon, "expected ';' after assignment")?;
        Ok(Node::assign(target.line(), target, value))
    }

    /// `if cond then body [else body] end`, or the single-statement forms `if cond then stmt` and `if cond => stmt`.
    ///
    /// The `then` body is read greedily. When it is closed by neither `else` nor `end`, the construct is the short
    /// form and the statements after the first are handed back to the enclosing list through `spilled`.
    fn if_stmt(&mut self) -> Result<Node, CompileError> {
        let line = self.advance().pos.line; // if
        let cond = self.expression()?;

        if self.match_punct(PunctuationId::FatArrow) {
            let stmt = self.statement()?;
            return Ok(Node::if_short(line, cond, stmt));
        }

        self.expect_keyword(KeywordId::Then, "expected 'then' or '=>' after if condition")?;
        let body_line = self.current_line();
        let statements = self.statement_list()?;

        if self.match_keyword(KeywordId::Else) {
            let else_body = self.body()?;
            self.expect_keyword(KeywordId::End, "expected 'end' to close if statement")?;
            return Ok(Node::if_stmt(line, cond, Node::body(body_line, statements), Some(else_body)));
        }
        if self.match_keyword(KeywordId::End) {
            return Ok(Node::if_stmt(line, cond, Node::body(body_line, statements), None));
        }

        let mut statements = statements.into_iter();
        let Some(stmt) = statements.next() else {
            return Err(self.error_here("expected statement or 'end' after 'then'"));
        };
        self.spilled.extend(statements);
        Ok(Node::if_short(line, cond, stmt))
    }

    /// `while cond loop body end`
    fn while_stmt(&mut self) -> Result<Node, CompileError> {
        let line = self.advance().pos.line; // while
        let cond = self.expression()?;
        self.expect_keyword(KeywordId::Loop, "expected 'loop' after while condition")?;
        let body = self.body()?;
        self.expect_keyword(KeywordId::End, "expected 'end' to close while loop")?;
        Ok(Node::while_loop(line, cond, body))
    }

    /// `for [name in] from .. to loop body end` or `for [name in] expr loop body end`
    fn for_stmt(&mut self) -> Result<Node, CompileError> {
        let line = self.advance().pos.line; // for

        let iterator = if matches!(self.peek().kind, TokenKind::Ident(_))
            && self.peek_next().kind.is_keyword(KeywordId::In)
        {
            let (_, name) = self.identifier()?;
            self.advance(); // in
            Some(name)
        } else {
            None
        };

        let first = self.expression()?;
        let range_end = if self.match_op(OperatorId::DotDot) {
            Some(self.expression()?)
        } else {
            None
        };

        self.expect_keyword(KeywordId::Loop, "expected 'loop' in for statement")?;
        let body = self.body()?;
        self.expect_keyword(KeywordId::End, "expected 'end' to close for loop")?;

        Ok(match range_end {
            Some(to) => Node::for_range(line, iterator, first, to, body),
            None => Node::for_iter(line, iterator, first, body),
        })
    }

    /// `loop body end`
    fn loop_stmt(&mut self) -> Result<Node, CompileError> {
        let line = self.advance().pos.line; // loop
        let body = self.body()?;
        self.expect_keyword(KeywordId::End, "expected 'end' to close loop")?;
        Ok(Node::loop_inf(line, body))
    }

    /// `exit [;]`
    fn exit_stmt(&mut self) -> Result<Node, CompileError> {
        let line = self.advance().pos.line; // exit
        self.match_punct(PunctuationId::Semicolon);
        Ok(Node::exit(line))
    }

    /// `return [expr] [;]`
    fn return_stmt(&mut self) -> Result<Node, CompileError> {
        let line = self.advance().pos.line; // return
        let value = if self.is_at_expr_start() {
            Some(self.expression()?)
        } else {
            None
        };
        self.match_punct(PunctuationId::Semicolon);
        Ok(Node::return_stmt(line, value))
    }

    /// `print expr {, expr} ;`
    fn print_stmt(&mut self) -> Result<Node, CompileError> {
        let line = self.advance().pos.line; // print
        let mut values = vec![self.expression()?];
        while self.match_punct(PunctuationId::Comma) {
            values.push(self.expression()?);
        }
        self.expect_punct(PunctuationId::Semicolon, "expected ';' after print statement")?;
        Ok(Node::print(line, values))
    }

    // ========================================================================
    // Bodies
    // ========================================================================

    /// Statement list wrapped in a `Body` node whose line is that of its first token.
    fn body(&mut self) -> Result<Node, CompileError> {
        let line = self.current_line();
        let statements = self.statement_list()?;
        Ok(Node::body(line, statements))
    }

    fn statement_list(&mut self) -> Result<Vec<Node>, CompileError> {
        let mut statements = Vec::new();
        while self.is_at_stmt_start() {
            self.push_statement(&mut statements)?;
        }
        Ok(statements)
    }

    /// Parse one statement into `list`, followed by any statements a short `if` inside it handed back.
    fn push_statement(&mut self, list: &mut Vec<Node>) -> Result<(), CompileError> {
        let stmt = self.statement()?;
        list.push(stmt);
        list.append(&mut self.spilled);
        Ok(())
    }
}
