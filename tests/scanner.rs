#[cfg(test)]
mod scanner_tests {
    use loxide::error::LoxError;
    use loxide::scanner::*;
    use loxide::token::*;

    fn assert_token_sequence(source: &str, expected: &[(TokenType, &str)]) {
        let scanner = Scanner::new(source.as_bytes());
        let tokens: Vec<_> = scanner.filter_map(Result::ok).collect();

        assert_eq!(tokens.len(), expected.len());

        for (actual, (expected_type, expected_lexeme)) in tokens.iter().zip(expected.iter()) {
            assert_eq!(actual.token_type, *expected_type);
            assert_eq!(actual.lexeme, *expected_lexeme);
        }
    }

    #[test]
    fn test_scanner_01_symbols() {
        assert_token_sequence(
            "({*.,+*})",
            &[
                (TokenType::LEFT_PAREN, "("),
                (TokenType::LEFT_BRACE, "{"),
                (TokenType::STAR, "*"),
                (TokenType::DOT, "."),
                (TokenType::COMMA, ","),
                (TokenType::PLUS, "+"),
                (TokenType::STAR, "*"),
                (TokenType::RIGHT_BRACE, "}"),
                (TokenType::RIGHT_PAREN, ")"),
                (TokenType::EOF, ""),
            ],
        );
    }

    #[test]
    fn test_scanner_02_operators() {
        assert_token_sequence(
            "! != = == < <= > >= / - ;",
            &[
                (TokenType::BANG, "!"),
                (TokenType::BANG_EQUAL, "!="),
                (TokenType::EQUAL, "="),
                (TokenType::EQUAL_EQUAL, "=="),
                (TokenType::LESS, "<"),
                (TokenType::LESS_EQUAL, "<="),
                (TokenType::GREATER, ">"),
                (TokenType::GREATER_EQUAL, ">="),
                (TokenType::SLASH, "/"),
                (TokenType::MINUS, "-"),
                (TokenType::SEMICOLON, ";"),
                (TokenType::EOF, ""),
            ],
        );
    }

    #[test]
    fn test_scanner_03_comments_and_whitespace() {
        assert_token_sequence(
            "var x; // the rest is ignored ({*\n\t print",
            &[
                (TokenType::VAR, "var"),
                (TokenType::IDENTIFIER, "x"),
                (TokenType::SEMICOLON, ";"),
                (TokenType::PRINT, "print"),
                (TokenType::EOF, ""),
            ],
        );
    }

    #[test]
    fn test_scanner_04_keywords_and_identifiers() {
        assert_token_sequence(
            "class classes _under sup3r super",
            &[
                (TokenType::CLASS, "class"),
                (TokenType::IDENTIFIER, "classes"),
                (TokenType::IDENTIFIER, "_under"),
                (TokenType::IDENTIFIER, "sup3r"),
                (TokenType::SUPER, "super"),
                (TokenType::EOF, ""),
            ],
        );
    }

    #[test]
    fn test_scanner_05_string_literal_value() {
        let scanner = Scanner::new(b"\"hello world\"");
        let tokens: Vec<_> = scanner.filter_map(Result::ok).collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].lexeme, "\"hello world\"");

        match &tokens[0].token_type {
            TokenType::STRING(value) => assert_eq!(value, "hello world"),
            other => panic!("expected STRING, got {:?}", other),
        }
    }

    #[test]
    fn test_scanner_06_multiline_string_counts_lines() {
        let scanner = Scanner::new(b"\"one\ntwo\"\nvar");
        let tokens: Vec<_> = scanner.filter_map(Result::ok).collect();

        // The string closes on line 2, `var` sits on line 3.
        assert_eq!(tokens[0].line, 2);
        assert_eq!(tokens[1].line, 3);
    }

    #[test]
    fn test_scanner_07_unterminated_string() {
        let scanner = Scanner::new(b"\"oops");
        let results: Vec<_> = scanner.collect();

        // One error, then EOF.
        assert_eq!(results.len(), 2);

        let error = results[0].as_ref().expect_err("expected a scan error");
        assert_eq!(error.to_string(), "[line 1] Error: Unterminated string.");

        assert!(results[1].is_ok());
    }

    #[test]
    fn test_scanner_08_number_literals() {
        let scanner = Scanner::new(b"12 3.25 123.");
        let tokens: Vec<_> = scanner.filter_map(Result::ok).collect();

        assert_eq!(tokens.len(), 5);

        match tokens[0].token_type {
            TokenType::NUMBER(n) => assert_eq!(n, 12.0),
            _ => panic!("expected NUMBER"),
        }

        match tokens[1].token_type {
            TokenType::NUMBER(n) => assert_eq!(n, 3.25),
            _ => panic!("expected NUMBER"),
        }

        // A trailing dot is not part of the number.
        match tokens[2].token_type {
            TokenType::NUMBER(n) => assert_eq!(n, 123.0),
            _ => panic!("expected NUMBER"),
        }
        assert_eq!(tokens[3].token_type, TokenType::DOT);
    }

    #[test]
    fn test_scanner_09_unexpected_chars_do_not_stop_the_stream() {
        let source = ",.$(#";
        let scanner = Scanner::new(source.as_bytes());

        let results: Vec<_> = scanner.collect();

        // COMMA, DOT, error for '$', LEFT_PAREN, error for '#', EOF.
        assert_eq!(results.len(), 6, "Expected 6 items in result");

        assert_token_matches(&results[0], TokenType::COMMA, ",");
        assert_token_matches(&results[1], TokenType::DOT, ".");
        assert_token_matches(&results[3], TokenType::LEFT_PAREN, "(");
        assert_token_matches(&results[5], TokenType::EOF, "");

        let error_count = results.iter().filter(|r| r.is_err()).count();
        assert_eq!(error_count, 2, "Expected 2 error messages");

        for err in results.iter().filter_map(|r| r.as_ref().err()) {
            assert!(
                err.to_string().contains("Unexpected character"),
                "Error message should contain 'Unexpected character', got: {}",
                err
            );
        }

        fn assert_token_matches(
            result: &Result<Token, LoxError>,
            expected_type: TokenType,
            expected_lexeme: &str,
        ) {
            match result {
                Ok(token) => {
                    assert_eq!(token.token_type, expected_type);
                    assert_eq!(token.lexeme, expected_lexeme);
                }
                Err(e) => panic!("Expected token but got error: {}", e),
            }
        }
    }

    #[test]
    fn test_scanner_10_line_numbers() {
        let scanner = Scanner::new(b"var a;\nvar b;\n\nvar c;");
        let tokens: Vec<_> = scanner.filter_map(Result::ok).collect();

        let lines: Vec<usize> = tokens
            .iter()
            .filter(|t| t.token_type == TokenType::VAR)
            .map(|t| t.line)
            .collect();

        assert_eq!(lines, vec![1, 2, 4]);
    }
}
