#[cfg(test)]
mod parser_tests {
    use loxide::ast::AstPrinter;
    use loxide::error::LoxError;
    use loxide::expr::Expr;
    use loxide::parser::Parser;
    use loxide::scanner::Scanner;
    use loxide::stmt::Stmt;
    use loxide::token::{Token, TokenType};

    fn parse_source(source: &str) -> (Vec<Stmt>, Vec<LoxError>) {
        let tokens: Vec<Token> = Scanner::new(source.as_bytes())
            .collect::<Result<_, _>>()
            .expect("scan errors in test source");

        let mut parser = Parser::new(tokens);
        parser.parse()
    }

    /// Parse a single expression statement and render it.
    fn printed(source: &str) -> String {
        let (statements, errors) = parse_source(source);

        assert!(errors.is_empty(), "unexpected parse errors: {:?}", errors);
        assert_eq!(statements.len(), 1);

        match &statements[0] {
            Stmt::Expression(expr) | Stmt::Print(expr) => AstPrinter::print(expr),
            other => panic!("expected an expression statement, got {:?}", other),
        }
    }

    #[test]
    fn test_parser_01_precedence() {
        assert_eq!(printed("1 + 2 * 3;"), "(+ 1.0 (* 2.0 3.0))");
        assert_eq!(printed("(1 + 2) * 3;"), "(* (group (+ 1.0 2.0)) 3.0)");
        assert_eq!(printed("-1 - 2;"), "(- (- 1.0) 2.0)");
        assert_eq!(printed("1 < 2 == true;"), "(== (< 1.0 2.0) true)");
    }

    #[test]
    fn test_parser_02_logical_precedence() {
        assert_eq!(printed("a or b and c;"), "(or a (and b c))");
    }

    #[test]
    fn test_parser_03_assignment_rewriting() {
        // A variable rvalue on the left of `=` becomes an assignment target.
        assert_eq!(printed("a = b = 1;"), "(= a (= b 1.0))");

        // A property read becomes a property write.
        assert_eq!(printed("a.b = 1;"), "(.= a b 1.0)");
    }

    #[test]
    fn test_parser_04_invalid_assignment_target() {
        let (statements, errors) = parse_source("1 = 2;");

        // Reported, but the statement survives with the original LHS.
        assert_eq!(statements.len(), 1);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].to_string(),
            "[line 1] Error at '=': Invalid assignment target."
        );
    }

    #[test]
    fn test_parser_05_calls_and_properties() {
        assert_eq!(printed("f(1)(2);"), "(call (call f 1.0) 2.0)");
        assert_eq!(printed("a.b.c;"), "(. (. a b) c)");
        assert_eq!(printed("super.m();"), "(call (super m))");
        assert_eq!(printed("this.x;"), "(. this x)");
    }

    #[test]
    fn test_parser_06_for_lowering() {
        // for (I; C; U) B  =>  { I; while (C) { B; U; } }
        let (statements, errors) = parse_source("for (var i = 0; i < 3; i = i + 1) print i;");

        assert!(errors.is_empty());
        assert_eq!(statements.len(), 1);

        let outer = match &statements[0] {
            Stmt::Block(stmts) => stmts,
            other => panic!("expected outer block, got {:?}", other),
        };

        assert_eq!(outer.len(), 2);
        assert!(matches!(outer[0], Stmt::Var { .. }));

        let (condition, body) = match &outer[1] {
            Stmt::While { condition, body } => (condition, body),
            other => panic!("expected while, got {:?}", other),
        };

        assert_eq!(AstPrinter::print(condition), "(< i 3.0)");

        let inner = match body.as_ref() {
            Stmt::Block(stmts) => stmts,
            other => panic!("expected body block, got {:?}", other),
        };

        assert_eq!(inner.len(), 2);
        assert!(matches!(inner[0], Stmt::Print(_)));
        assert!(matches!(inner[1], Stmt::Expression(Expr::Assign { .. })));
    }

    #[test]
    fn test_parser_07_for_empty_clauses() {
        let (statements, errors) = parse_source("for (;;) print 1;");

        assert!(errors.is_empty());

        // No initializer, so the while is not wrapped in a block; the
        // missing condition becomes a `true` literal.
        let condition = match &statements[0] {
            Stmt::While { condition, .. } => condition,
            other => panic!("expected while, got {:?}", other),
        };

        match condition {
            Expr::Literal(token) => assert_eq!(token.token_type, TokenType::TRUE),
            other => panic!("expected literal condition, got {:?}", other),
        }
    }

    #[test]
    fn test_parser_08_error_containment() {
        // The bad declaration in the middle is dropped; its neighbors are kept.
        let (statements, errors) = parse_source("var a = 1; var = 2; var b = 3;");

        assert_eq!(errors.len(), 1);
        assert_eq!(statements.len(), 2);
        assert!(matches!(&statements[0], Stmt::Var { name, .. } if name.lexeme == "a"));
        assert!(matches!(&statements[1], Stmt::Var { name, .. } if name.lexeme == "b"));
    }

    #[test]
    fn test_parser_09_error_at_end() {
        let (_, errors) = parse_source("print 1");

        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].to_string(),
            "[line 1] Error at end: Expect ';' after value."
        );
    }

    #[test]
    fn test_parser_10_parameter_limit() {
        let (statements, errors) = parse_source("fun f(a, b, c, d, e, g, h, i, j) { return; }");

        assert_eq!(errors.len(), 1);
        assert!(errors[0]
            .to_string()
            .contains("Cannot have more than 8 parameters."));

        // The declaration itself still parses.
        assert_eq!(statements.len(), 1);
        assert!(matches!(&statements[0], Stmt::Function(decl) if decl.params.len() == 9));
    }

    #[test]
    fn test_parser_11_argument_limit() {
        let (statements, errors) = parse_source("f(1, 2, 3, 4, 5, 6, 7, 8, 9);");

        assert_eq!(errors.len(), 1);
        assert!(errors[0]
            .to_string()
            .contains("Cannot have more than 8 arguments."));
        assert_eq!(statements.len(), 1);
    }

    #[test]
    fn test_parser_12_class_declaration() {
        let (statements, errors) = parse_source("class B < A { init(n) {} say() {} }");

        assert!(errors.is_empty());

        let (superclass, methods) = match &statements[0] {
            Stmt::Class {
                superclass,
                methods,
                ..
            } => (superclass, methods),
            other => panic!("expected class, got {:?}", other),
        };

        assert!(matches!(
            superclass,
            Some(Expr::Variable { name, .. }) if name.lexeme == "A"
        ));
        assert_eq!(methods.len(), 2);
        assert_eq!(methods[0].name.lexeme, "init");
        assert_eq!(methods[1].name.lexeme, "say");
    }

    #[test]
    fn test_parser_13_class_without_superclass_has_none() {
        let (statements, errors) = parse_source("class A {}");

        assert!(errors.is_empty());
        assert!(matches!(
            &statements[0],
            Stmt::Class {
                superclass: None,
                ..
            }
        ));
    }

    #[test]
    fn test_parser_14_distinct_expression_ids() {
        // Two textually identical reads are distinct identities.
        let (statements, errors) = parse_source("a + a;");

        assert!(errors.is_empty());

        let (left_id, right_id) = match &statements[0] {
            Stmt::Expression(Expr::Binary { left, right, .. }) => {
                match (left.as_ref(), right.as_ref()) {
                    (Expr::Variable { id: l, .. }, Expr::Variable { id: r, .. }) => (*l, *r),
                    other => panic!("expected variable operands, got {:?}", other),
                }
            }
            other => panic!("expected binary expression, got {:?}", other),
        };

        assert_ne!(left_id, right_id);
    }
}
