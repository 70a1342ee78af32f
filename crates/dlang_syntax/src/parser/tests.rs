#[cfg(test)]
/// Parser unit tests.
///
/// These tests focus on tree shapes for each syntactic form, the precedence ladder, node line numbers, and the
/// single-error failure policy.
mod tests {
    use super::*;
    use crate::printer::print_tree;

    fn parse_str(source: &str) -> Result<Node, CompileError> {
        parse_source(source)
    }

    fn parse_ok(source: &str) -> Node {
        parse_str(source).unwrap_or_else(|err| panic!("parse({source:?}) failed: {err}"))
    }

    /// First statement of the program.
    fn first_stmt(source: &str) -> Node {
        let program = parse_ok(source);
        program.children()[0].clone()
    }

    /// Value expression of `x := <expr>;`.
    fn assigned_expr(expr: &str) -> Node {
        let stmt = first_stmt(&format!("x := {expr};"));
        assert_eq!(stmt.kind(), NodeKind::Assign);
        stmt.children()[1].clone()
    }

    fn kinds(node: &Node) -> Vec<NodeKind> {
        node.children().iter().map(Node::kind).collect()
    }

    #[test]
    fn test_var_declaration_shape() {
        let program = parse_ok("var x := 1 + 2;");
        assert_eq!(
            print_tree(&program),
            concat!(
                "[Program]  (line 1)\n",
                "  [VarDecl]  (line 1)\n",
                "    [VarDef] name=x  (line 1)\n",
                "      [Add]  (line 1)\n",
                "        [IntLit] 1  (line 1)\n",
                "        [IntLit] 2  (line 1)\n",
            )
        );
    }

    #[test]
    fn test_var_declaration_multiple_bindings() {
        let decl = first_stmt("var a, b := 'x', c;");
        assert_eq!(decl.children().len(), 3);
        let names: Vec<_> = decl.children().iter().map(|d| d.name()).collect();
        assert_eq!(names, vec![Some("a"), Some("b"), Some("c")]);
        assert!(decl.children()[0].children().is_empty());
        assert_eq!(decl.children()[1].children()[0].payload().as_text(), Some("x"));
    }

    #[test]
    fn test_for_range_shape() {
        let stmt = first_stmt("for i in 1..5 loop print i; end");
        assert_eq!(stmt.kind(), NodeKind::ForRange);
        assert_eq!(stmt.name(), Some("i"));
        assert_eq!(kinds(&stmt), vec![NodeKind::IntLit, NodeKind::IntLit, NodeKind::Body]);
        assert_eq!(stmt.children()[0].payload().as_int(), Some(1));
        assert_eq!(stmt.children()[1].payload().as_int(), Some(5));
        let print = &stmt.children()[2].children()[0];
        assert_eq!(print.kind(), NodeKind::Print);
        assert_eq!(print.children()[0].payload().as_text(), Some("i"));
    }

    #[test]
    fn test_for_without_name() {
        let ranged = first_stmt("for 1..3 loop exit end");
        assert_eq!(ranged.kind(), NodeKind::ForRange);
        assert_eq!(ranged.name(), None);

        let iter = first_stmt("for items loop end");
        assert_eq!(iter.kind(), NodeKind::ForIter);
        assert_eq!(iter.name(), None);
        assert_eq!(kinds(&iter), vec![NodeKind::Ident, NodeKind::Body]);

        let named = first_stmt("for x in items loop print x; end");
        assert_eq!(named.kind(), NodeKind::ForIter);
        assert_eq!(named.name(), Some("x"));
    }

    #[test]
    fn test_if_forms() {
        let long = first_stmt("if a then print 1; else print 2; end");
        assert_eq!(long.kind(), NodeKind::If);
        assert_eq!(kinds(&long), vec![NodeKind::Ident, NodeKind::Body, NodeKind::Body]);

        let no_else = first_stmt("if a then print 1; print 2; end");
        assert_eq!(kinds(&no_else), vec![NodeKind::Ident, NodeKind::Body]);
        assert_eq!(no_else.children()[1].children().len(), 2);

        let short = first_stmt("if a then print 1;");
        assert_eq!(short.kind(), NodeKind::IfShort);
        assert_eq!(kinds(&short), vec![NodeKind::Ident, NodeKind::Print]);

        let arrow = first_stmt("if a => exit");
        assert_eq!(arrow.kind(), NodeKind::IfShort);
        assert_eq!(kinds(&arrow), vec![NodeKind::Ident, NodeKind::Exit]);
    }

    #[test]
    fn test_short_if_inside_loop_body() {
        let stmt = first_stmt("loop if done => exit; print 1; end");
        assert_eq!(stmt.kind(), NodeKind::LoopInf);
        let body = &stmt.children()[0];
        assert_eq!(kinds(body), vec![NodeKind::IfShort, NodeKind::Print]);
    }

    #[test]
    fn test_empty_if_body_takes_end_line() {
        let stmt = first_stmt("if a then\n\nend");
        let body = &stmt.children()[1];
        assert!(body.children().is_empty());
        assert_eq!(body.line(), 3);
    }

    #[test]
    fn test_if_without_body_fails() {
        let err = parse_str("if x then").unwrap_err();
        assert_eq!(err.kind(), crate::diagnostics::ErrorKind::Syntax);
        assert_eq!(
            err.to_string(),
            "syntax error: expected statement or 'end' after 'then', found end of input at 1:10"
        );
    }

    #[test]
    fn test_short_if_followed_by_statements() {
        let program = parse_ok("if a then print 1; print 2;");
        assert_eq!(kinds(&program), vec![NodeKind::IfShort, NodeKind::Print]);
        let short = &program.children()[0];
        assert_eq!(kinds(short), vec![NodeKind::Ident, NodeKind::Print]);
        assert_eq!(short.children()[1].children()[0].payload().as_int(), Some(1));
        assert_eq!(program.children()[1].children()[0].payload().as_int(), Some(2));
    }

    #[test]
    fn test_nested_short_ifs_hand_back_statements() {
        let program = parse_ok("if a then x := 1; if b then exit print 3;");
        assert_eq!(kinds(&program), vec![NodeKind::IfShort, NodeKind::IfShort, NodeKind::Print]);
        assert_eq!(kinds(&program.children()[0]), vec![NodeKind::Ident, NodeKind::Assign]);
        assert_eq!(kinds(&program.children()[1]), vec![NodeKind::Ident, NodeKind::Exit]);
    }

    #[test]
    fn test_runs_of_short_ifs_parse_once() {
        let program = parse_ok(&"if a then x := 1; ".repeat(500));
        assert_eq!(program.children().len(), 500);
        assert!(program.children().iter().all(|s| s.kind() == NodeKind::IfShort));

        let program = parse_ok(&format!("{}print 1; print 2;", "if a then ".repeat(100)));
        assert_eq!(kinds(&program), vec![NodeKind::IfShort, NodeKind::Print]);
        let mut innermost = &program.children()[0];
        for _ in 1..100 {
            innermost = &innermost.children()[1];
        }
        assert_eq!(kinds(innermost), vec![NodeKind::Ident, NodeKind::Print]);
    }

    #[test]
    fn test_then_body_inside_block_takes_the_next_end() {
        // Inside a block the following `end` closes the `if`; the block needs its own `end`.
        let stmt = first_stmt("loop if c then exit; end end");
        assert_eq!(stmt.kind(), NodeKind::LoopInf);
        let inner = &stmt.children()[0].children()[0];
        assert_eq!(inner.kind(), NodeKind::If);
        assert_eq!(kinds(&inner.children()[1]), vec![NodeKind::Exit]);
        assert!(parse_str("loop if c then exit; end").is_err());
    }

    #[test]
    fn test_while_and_loop() {
        let stmt = first_stmt("while n > 0 loop n := n - 1; end");
        assert_eq!(stmt.kind(), NodeKind::While);
        assert_eq!(kinds(&stmt), vec![NodeKind::Gt, NodeKind::Body]);

        let stmt = first_stmt("loop exit; end");
        assert_eq!(stmt.kind(), NodeKind::LoopInf);
        assert_eq!(kinds(&stmt.children()[0]), vec![NodeKind::Exit]);
    }

    #[test]
    fn test_return_forms() {
        let func = assigned_expr("func is return; end");
        let body = &func.children()[1];
        assert_eq!(body.children()[0].kind(), NodeKind::Return);
        assert!(body.children()[0].children().is_empty());

        let func = assigned_expr("func is return x * 2 end");
        let ret = &func.children()[1].children()[0];
        assert_eq!(kinds(ret), vec![NodeKind::Mul]);
    }

    #[test]
    fn test_print_list() {
        let stmt = first_stmt("print 1, \"two\", 3.0;");
        assert_eq!(kinds(&stmt), vec![NodeKind::IntLit, NodeKind::StrLit, NodeKind::RealLit]);
    }

    #[test]
    fn test_precedence_ladder() {
        let expr = assigned_expr("a or b and c xor d");
        assert_eq!(expr.kind(), NodeKind::Or);
        let and = &expr.children()[1];
        assert_eq!(and.kind(), NodeKind::And);
        assert_eq!(and.children()[1].kind(), NodeKind::Xor);

        let expr = assigned_expr("1 + 2 * 3");
        assert_eq!(expr.kind(), NodeKind::Add);
        assert_eq!(expr.children()[1].kind(), NodeKind::Mul);

        let expr = assigned_expr("a + 1 < b * 2");
        assert_eq!(expr.kind(), NodeKind::Lt);
        assert_eq!(kinds(&expr), vec![NodeKind::Add, NodeKind::Mul]);
    }

    #[test]
    fn test_registry_precedence_decides_binding() {
        let infix: Vec<_> = operators::OPERATORS
            .iter()
            .filter(|o| o.fixity == Fixity::Infix && o.precedence > 0)
            .collect();
        assert_eq!(infix.len(), 13);

        for lo in &infix {
            for hi in infix.iter().filter(|hi| hi.precedence > lo.precedence) {
                let lo_kind = binary_op(lo.id).unwrap().kind();
                let hi_kind = binary_op(hi.id).unwrap().kind();

                let expr = assigned_expr(&format!("a {} b {} c", lo.spelling, hi.spelling));
                assert_eq!(expr.kind(), lo_kind, "{} {}", lo.spelling, hi.spelling);
                assert_eq!(expr.children()[1].kind(), hi_kind);

                let expr = assigned_expr(&format!("a {} b {} c", hi.spelling, lo.spelling));
                assert_eq!(expr.kind(), lo_kind, "{} {}", hi.spelling, lo.spelling);
                assert_eq!(expr.children()[0].kind(), hi_kind);
            }
        }
    }

    #[test]
    fn test_statement_operators_are_not_expressions() {
        let err = parse_str("x := a .. b;").unwrap_err();
        assert_eq!(
            err.to_string(),
            "syntax error: expected ';' after assignment, found '..' at 1:8"
        );
    }

    #[test]
    fn test_binary_levels_are_left_associative() {
        let expr = assigned_expr("a - b - c");
        assert_eq!(expr.kind(), NodeKind::Sub);
        assert_eq!(expr.children()[0].kind(), NodeKind::Sub);
        assert_eq!(expr.children()[1].payload().as_text(), Some("c"));

        let expr = assigned_expr("a / b * c");
        assert_eq!(expr.kind(), NodeKind::Mul);
        assert_eq!(expr.children()[0].kind(), NodeKind::Div);
    }

    #[test]
    fn test_comparisons_do_not_chain() {
        let err = parse_str("x := a < b < c;").unwrap_err();
        assert!(err.to_string().contains("cannot be chained"), "{err}");
        assert_eq!(assigned_expr("a /= b").kind(), NodeKind::Neq);
        assert_eq!(assigned_expr("a = b").kind(), NodeKind::Eq);
    }

    #[test]
    fn test_unary_binds_looser_than_is_and_postfix() {
        let expr = assigned_expr("-a is int");
        assert_eq!(expr.kind(), NodeKind::UMinus);
        let test = &expr.children()[0];
        assert_eq!(test.kind(), NodeKind::Is);
        assert_eq!(kinds(test), vec![NodeKind::Ident, NodeKind::TypeInt]);

        let expr = assigned_expr("not b and c");
        assert_eq!(expr.kind(), NodeKind::And);
        assert_eq!(expr.children()[0].kind(), NodeKind::Not);

        let expr = assigned_expr("- - +x");
        assert_eq!(expr.kind(), NodeKind::UMinus);
        assert_eq!(expr.children()[0].kind(), NodeKind::UMinus);
        assert_eq!(expr.children()[0].children()[0].kind(), NodeKind::UPlus);

        let expr = assigned_expr("-f(1)");
        assert_eq!(expr.kind(), NodeKind::UMinus);
        assert_eq!(expr.children()[0].kind(), NodeKind::Call);
    }

    #[test]
    fn test_type_indicators() {
        let stmt = first_stmt("print a is real, b is bool, c is string, d is none, e is func, f is [], g is {};");
        let indicators: Vec<NodeKind> = stmt.children().iter().map(|t| t.children()[1].kind()).collect();
        assert_eq!(
            indicators,
            vec![
                NodeKind::TypeReal,
                NodeKind::TypeBool,
                NodeKind::TypeString,
                NodeKind::TypeNone,
                NodeKind::TypeFunc,
                NodeKind::TypeArray,
                NodeKind::TypeTuple,
            ]
        );
        assert!(parse_str("x := a is 3;").is_err());
        assert!(parse_str("x := a is int is int;").is_err());
    }

    #[test]
    fn test_postfix_chain_as_assignment_target() {
        let stmt = first_stmt("a[1].f(2, 3).3 := 4;");
        let target = &stmt.children()[0];
        assert_eq!(target.kind(), NodeKind::DotInt);
        assert_eq!(target.payload().as_int(), Some(3));
        let call = &target.children()[0];
        assert_eq!(call.kind(), NodeKind::Call);
        assert_eq!(kinds(call), vec![NodeKind::DotField, NodeKind::IntLit, NodeKind::IntLit]);
        let field = &call.children()[0];
        assert_eq!(field.name(), Some("f"));
        assert_eq!(field.children()[0].kind(), NodeKind::Index);
    }

    #[test]
    fn test_assignment_requires_identifier_target() {
        assert!(parse_str("1 := 2;").is_err());
        assert!(parse_str("x + 1 := 2;").is_err());
        assert!(parse_str("x := 2").is_err());
    }

    #[test]
    fn test_composite_literals() {
        let expr = assigned_expr("[1, 2.5, 'three']");
        assert_eq!(expr.kind(), NodeKind::ArrayLit);
        assert_eq!(expr.children().len(), 3);
        assert!(assigned_expr("[]").children().is_empty());

        let tuple = assigned_expr("{a := 1, 2, b := none}");
        assert_eq!(tuple.kind(), NodeKind::TupleLit);
        let names: Vec<_> = tuple.children().iter().map(|e| e.name()).collect();
        assert_eq!(names, vec![Some("a"), None, Some("b")]);
        assert!(tuple.children().iter().all(|e| e.kind() == NodeKind::TupleElem));
        assert!(assigned_expr("{}").children().is_empty());

        assert!(parse_str("x := [1, 2,];").is_err());
    }

    #[test]
    fn test_function_literals() {
        let func = assigned_expr("func(x, y) => x + y");
        assert_eq!(func.kind(), NodeKind::FuncLit);
        assert_eq!(kinds(&func), vec![NodeKind::ParamList, NodeKind::Body]);
        let params: Vec<_> = func.children()[0]
            .children()
            .iter()
            .map(|p| p.payload().as_text())
            .collect();
        assert_eq!(params, vec![Some("x"), Some("y")]);
        let body = &func.children()[1];
        assert_eq!(kinds(body), vec![NodeKind::Return]);
        assert_eq!(kinds(&body.children()[0]), vec![NodeKind::Add]);

        let func = assigned_expr("func is print 1; end");
        assert!(func.children()[0].children().is_empty());
        assert_eq!(kinds(&func.children()[1]), vec![NodeKind::Print]);

        let func = assigned_expr("func() => none");
        assert!(func.children()[0].children().is_empty());

        assert!(parse_str("x := func(x) print x;").is_err());
    }

    #[test]
    fn test_literals() {
        assert_eq!(assigned_expr("true").payload().as_int(), Some(1));
        assert_eq!(assigned_expr("false").payload().as_int(), Some(0));
        assert_eq!(assigned_expr("none").kind(), NodeKind::NoneLit);
        assert_eq!(assigned_expr("2.25").payload().as_real(), Some(2.25));
        assert_eq!(assigned_expr("(((7)))").payload().as_int(), Some(7));
    }

    #[test]
    fn test_node_lines() {
        let program = parse_ok("var n := 10;\nwhile n > 0 loop\n  n := n - 1;\nend\n");
        assert_eq!(
            print_tree(&program),
            concat!(
                "[Program]  (line 1)\n",
                "  [VarDecl]  (line 1)\n",
                "    [VarDef] name=n  (line 1)\n",
                "      [IntLit] 10  (line 1)\n",
                "  [While]  (line 2)\n",
                "    [Gt]  (line 2)\n",
                "      [Ident] n  (line 2)\n",
                "      [IntLit] 0  (line 2)\n",
                "    [Body]  (line 3)\n",
                "      [Assign]  (line 3)\n",
                "        [Ident] n  (line 3)\n",
                "        [Sub]  (line 3)\n",
                "          [Ident] n  (line 3)\n",
                "          [IntLit] 1  (line 3)\n",
            )
        );
    }

    #[test]
    fn test_multiline_expression_lines() {
        let expr = first_stmt("x :=\n  a\n  +\n  - b;").children()[1].clone();
        assert_eq!(expr.kind(), NodeKind::Add);
        assert_eq!(expr.line(), 2);
        assert_eq!(expr.children()[1].kind(), NodeKind::UMinus);
        assert_eq!(expr.children()[1].line(), 4);
    }

    #[test]
    fn test_empty_program() {
        let program = parse_ok("// nothing here\n");
        assert_eq!(program.kind(), NodeKind::Program);
        assert!(program.children().is_empty());
    }

    #[test]
    fn test_error_message_and_position() {
        let err = parse_str("var x := 1").unwrap_err();
        assert_eq!(
            err.to_string(),
            "syntax error: expected ';' after variable declaration, found end of input at 1:11"
        );

        let err = parse_str("print 1;\nend").unwrap_err();
        assert_eq!(err.position(), Position::new(2, 1));
        assert!(err.to_string().contains("expected statement, found 'end'"), "{err}");
    }

    #[test]
    fn test_lexical_errors_propagate() {
        let err = parse_str("var x := 1 : 2;").unwrap_err();
        assert_eq!(err.kind(), crate::diagnostics::ErrorKind::Lexical);
    }

    #[test]
    fn test_earlier_syntax_error_beats_later_lexical_error() {
        let err = parse_str("print 1 +; @").unwrap_err();
        assert_eq!(err.to_string(), "syntax error: expected expression, found ';' at 1:10");

        let err = parse_str("x := ;\ny := 99999999999999999999999;").unwrap_err();
        assert_eq!(err.kind(), crate::diagnostics::ErrorKind::Syntax);
        assert_eq!(err.position(), Position { line: 1, col: 6 });

        // A program that is fine up to the bad character reports the lexical error.
        let err = parse_str("if a then print 1; @").unwrap_err();
        assert_eq!(err.kind(), crate::diagnostics::ErrorKind::Lexical);
        assert_eq!(err.position(), Position { line: 1, col: 20 });
    }

    #[test]
    fn test_deeply_nested_parentheses_fail_cleanly() {
        let depth = 100_000;
        let source = format!("print {}1{};", "(".repeat(depth), ")".repeat(depth));
        let err = parse_str(&source).unwrap_err();
        assert_eq!(err.kind(), crate::diagnostics::ErrorKind::Syntax);
        assert!(err.to_string().contains("nesting is too deep"), "{err}");
    }

    #[test]
    fn test_deep_nesting_of_every_kind_fails_cleanly() {
        let depth = 50_000;
        let cases = [
            format!("x := {}1;", "-".repeat(depth)),
            format!("x := {}1;", "not ".repeat(depth)),
            format!("x := {}1{};", "[".repeat(depth), "]".repeat(depth)),
            format!("x := {}{};", "{".repeat(depth), "}".repeat(depth)),
            format!("x := {}1;", "func => ".repeat(depth)),
            format!("{}exit{}", "loop ".repeat(depth), " end".repeat(depth)),
            format!("{}exit", "if c => ".repeat(depth)),
        ];
        for source in &cases {
            let err = parse_str(source).unwrap_err();
            assert!(err.to_string().contains("nesting is too deep"), "{err}");
        }
    }

    #[test]
    fn test_nesting_below_the_limit_parses() {
        let depth = MAX_NESTING_DEPTH - 2;
        let source = format!("print {}7{};", "(".repeat(depth), ")".repeat(depth));
        let program = parse_ok(&source);
        assert_eq!(program.children()[0].children()[0].payload().as_int(), Some(7));
        let too_deep = format!("print {}7{};", "(".repeat(depth + 1), ")".repeat(depth + 1));
        assert!(parse_str(&too_deep).is_err());
    }

    #[test]
    fn test_long_operator_chains_are_not_nesting() {
        let terms = vec!["1"; 100_000].join(" + ");
        let program = parse_ok(&format!("x := {terms};"));
        assert_eq!(program.node_count(), 3 + 199_999);
        let index = format!("x := a{};", "[0]".repeat(100_000));
        assert!(parse_str(&index).is_ok());
    }

    #[test]
    fn test_unterminated_token_stream_is_rejected() {
        assert!(parse(&[]).is_err());
    }
}
