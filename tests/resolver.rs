#[cfg(test)]
mod resolver_tests {
    use loxide::interpreter::Interpreter;
    use loxide::parser::Parser;
    use loxide::resolver::Resolver;
    use loxide::scanner::Scanner;
    use loxide::token::Token;

    /// Scan, parse, and resolve; returns the rendered resolve diagnostics.
    fn resolve_errors(source: &str) -> Vec<String> {
        let tokens: Vec<Token> = Scanner::new(source.as_bytes())
            .collect::<Result<_, _>>()
            .expect("scan errors in test source");

        let mut parser = Parser::new(tokens);
        let (statements, errors) = parser.parse();

        assert!(errors.is_empty(), "unexpected parse errors: {:?}", errors);

        let mut output: Vec<u8> = Vec::new();
        let mut interpreter = Interpreter::new(&mut output);

        let resolver = Resolver::new(&mut interpreter);
        resolver
            .resolve(&statements)
            .iter()
            .map(|e| e.to_string())
            .collect()
    }

    #[test]
    fn test_resolver_01_clean_program() {
        let errors = resolve_errors(
            "var a = 1; { var b = a; fun f(x) { return x + b; } print f(2); }",
        );
        assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
    }

    #[test]
    fn test_resolver_02_top_level_return() {
        assert_eq!(
            resolve_errors("return 1;"),
            vec!["[line 1] Error at 'return': Cannot return from top-level code."]
        );
    }

    #[test]
    fn test_resolver_03_read_in_own_initializer() {
        assert_eq!(
            resolve_errors("{ var a = a; }"),
            vec!["[line 1] Error at 'a': Cannot read local variable in its own initializer."]
        );
    }

    #[test]
    fn test_resolver_04_return_value_from_initializer() {
        assert_eq!(
            resolve_errors("class C { init(){ return 1; } }"),
            vec!["[line 1] Error at 'return': Cannot return a value from an initializer."]
        );
    }

    #[test]
    fn test_resolver_05_bare_return_in_initializer_is_fine() {
        let errors = resolve_errors("class C { init(){ return; } }");
        assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
    }

    #[test]
    fn test_resolver_06_this_outside_class() {
        assert_eq!(
            resolve_errors("print this;"),
            vec!["[line 1] Error at 'this': Cannot use 'this' outside of a class."]
        );
    }

    #[test]
    fn test_resolver_07_super_without_superclass() {
        assert_eq!(
            resolve_errors("class C { m(){ super.m(); } }"),
            vec!["[line 1] Error at 'super': Cannot use 'super' in a class with no superclass."]
        );
    }

    #[test]
    fn test_resolver_08_super_outside_class() {
        assert_eq!(
            resolve_errors("fun f() { super.m(); }"),
            vec!["[line 1] Error at 'super': Cannot use 'super' outside of a class."]
        );
    }

    #[test]
    fn test_resolver_09_super_in_subclass_is_fine() {
        let errors =
            resolve_errors("class A { m(){} } class B < A { m(){ super.m(); } }");
        assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
    }

    #[test]
    fn test_resolver_10_duplicate_declaration() {
        assert_eq!(
            resolve_errors("{ var a = 1; var a = 2; }"),
            vec![
                "[line 1] Error at 'a': Variable with this name already declared in this scope."
            ]
        );
    }

    #[test]
    fn test_resolver_11_global_redeclaration_is_fine() {
        // Globals are not tracked in scopes.
        let errors = resolve_errors("var a = 1; var a = 2;");
        assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
    }

    #[test]
    fn test_resolver_12_self_inheritance() {
        assert_eq!(
            resolve_errors("class C < C {}"),
            vec!["[line 1] Error at 'C': A class can't inherit from itself."]
        );
    }

    #[test]
    fn test_resolver_13_errors_accumulate() {
        let errors = resolve_errors("return 1;\nprint this;");

        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("Cannot return from top-level code."));
        assert!(errors[1].contains("Cannot use 'this' outside of a class."));
        assert!(errors[1].starts_with("[line 2]"));
    }
}
