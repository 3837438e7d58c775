use std::iter::FusedIterator;

use log::{debug, info};
use phf::phf_map;

use crate::error::LoxError;
use crate::token::{Token, TokenType};

static KEYWORDS: phf::Map<&'static [u8], TokenType> = phf_map! {
    b"and" => TokenType::AND,
    b"class" => TokenType::CLASS,
    b"else" => TokenType::ELSE,
    b"false" => TokenType::FALSE,
    b"fun" => TokenType::FUN,
    b"for" => TokenType::FOR,
    b"if" => TokenType::IF,
    b"nil" => TokenType::NIL,
    b"or" => TokenType::OR,
    b"print" => TokenType::PRINT,
    b"return" => TokenType::RETURN,
    b"super" => TokenType::SUPER,
    b"this" => TokenType::THIS,
    b"true" => TokenType::TRUE,
    b"var" => TokenType::VAR,
    b"while" => TokenType::WHILE,
};

/// Lexer over a raw source buffer.
///
/// Implemented as an iterator: each `next` yields either the next token or a
/// lexical error.  Errors do not stop the stream; scanning resumes at the
/// following byte, so a single pass can surface several diagnostics.  The
/// final yielded token is always `EOF`.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    source: &'a [u8],
    start: usize,
    curr_ptr: usize,
    line: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a [u8]) -> Self {
        info!("Initializing Scanner with buffer of {} bytes", source.len());
        Self {
            source,
            start: 0,
            curr_ptr: 0,
            line: 1,
        }
    }

    /// Scan one lexeme.  `Ok(None)` means the lexeme produced no token
    /// (whitespace, comment, newline).
    fn scan_token(&mut self) -> Result<Option<TokenType>, LoxError> {
        let byte: u8 = self.advance();

        let token_type = match byte {
            b'(' => TokenType::LEFT_PAREN,

            b')' => TokenType::RIGHT_PAREN,

            b'{' => TokenType::LEFT_BRACE,

            b'}' => TokenType::RIGHT_BRACE,

            b',' => TokenType::COMMA,

            b'.' => TokenType::DOT,

            b'-' => TokenType::MINUS,

            b'+' => TokenType::PLUS,

            b';' => TokenType::SEMICOLON,

            b'*' => TokenType::STAR,

            b'!' => {
                if self.match_byte(b'=') {
                    TokenType::BANG_EQUAL
                } else {
                    TokenType::BANG
                }
            }

            b'=' => {
                if self.match_byte(b'=') {
                    TokenType::EQUAL_EQUAL
                } else {
                    TokenType::EQUAL
                }
            }

            b'<' => {
                if self.match_byte(b'=') {
                    TokenType::LESS_EQUAL
                } else {
                    TokenType::LESS
                }
            }

            b'>' => {
                if self.match_byte(b'=') {
                    TokenType::GREATER_EQUAL
                } else {
                    TokenType::GREATER
                }
            }

            b' ' | b'\r' | b'\t' => return Ok(None),

            b'\n' => {
                self.line += 1;
                return Ok(None);
            }

            b'/' => {
                if self.match_byte(b'/') {
                    debug!("Found comment, skipping until newline");
                    while self.peek() != b'\n' && !self.is_at_end() {
                        self.advance();
                    }
                    return Ok(None);
                }

                TokenType::SLASH
            }

            b'"' => return self.parse_string().map(Some),

            b'0'..=b'9' => self.parse_number(),

            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.parse_identifier(),

            _ => {
                debug!(
                    "Unexpected character '{}' at line {}",
                    byte as char, self.line
                );

                return Err(LoxError::lex(
                    self.line,
                    format!("Unexpected character: {}", byte as char),
                ));
            }
        };

        Ok(Some(token_type))
    }

    fn parse_string(&mut self) -> Result<TokenType, LoxError> {
        while !self.is_at_end() && self.peek() != b'"' {
            // The literal may span lines; keep the line counter honest.
            if self.peek() == b'\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_at_end() {
            return Err(LoxError::lex(self.line, "Unterminated string."));
        }

        // Consume the closing quote.
        self.advance();

        let interior = &self.source[self.start + 1..self.curr_ptr - 1];
        let parsed_string: String = String::from_utf8_lossy(interior).into_owned();

        debug!("Parsed string literal: {}", parsed_string);

        Ok(TokenType::STRING(parsed_string))
    }

    fn parse_number(&mut self) -> TokenType {
        while self.peek().is_ascii_digit() {
            self.advance();
        }

        // A fractional part requires a digit after the dot; a trailing `.`
        // is left for the DOT token.
        if self.peek() == b'.' && self.peek_next().is_ascii_digit() {
            self.advance();

            while self.peek().is_ascii_digit() {
                self.advance();
            }
        }

        let text = String::from_utf8_lossy(&self.source[self.start..self.curr_ptr]);
        let number: f64 = text.parse().unwrap_or(0.0);

        debug!("Parsed number: {}", number);

        TokenType::NUMBER(number)
    }

    fn parse_identifier(&mut self) -> TokenType {
        while self.peek().is_ascii_alphanumeric() || self.peek() == b'_' {
            self.advance();
        }

        let text: &[u8] = &self.source[self.start..self.curr_ptr];

        match KEYWORDS.get(text) {
            Some(token_type) => {
                debug!("Parsed keyword: {}", String::from_utf8_lossy(text));

                token_type.clone()
            }

            None => {
                debug!("Parsed identifier: {}", String::from_utf8_lossy(text));

                TokenType::IDENTIFIER
            }
        }
    }

    #[inline]
    fn advance(&mut self) -> u8 {
        let byte = self.source[self.curr_ptr];

        self.curr_ptr += 1;

        byte
    }

    #[inline]
    fn match_byte(&mut self, expected: u8) -> bool {
        if self.is_at_end() || self.source[self.curr_ptr] != expected {
            false
        } else {
            self.curr_ptr += 1;

            true
        }
    }

    #[inline]
    fn peek(&self) -> u8 {
        if self.is_at_end() {
            0
        } else {
            self.source[self.curr_ptr]
        }
    }

    #[inline]
    fn peek_next(&self) -> u8 {
        if self.curr_ptr + 1 >= self.source.len() {
            0
        } else {
            self.source[self.curr_ptr + 1]
        }
    }

    #[inline]
    fn is_at_end(&self) -> bool {
        self.curr_ptr >= self.source.len()
    }
}

impl Iterator for Scanner<'_> {
    type Item = Result<Token, LoxError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.is_at_end() {
                if self.curr_ptr == self.source.len() {
                    // Emit EOF exactly once, then fuse.
                    self.curr_ptr += 1;

                    info!("Reached EOF at line {}", self.line);

                    return Some(Ok(Token::new(TokenType::EOF, String::new(), self.line)));
                }

                return None;
            }

            self.start = self.curr_ptr;

            match self.scan_token() {
                Err(e) => return Some(Err(e)),

                Ok(Some(token_type)) => {
                    let lexeme: String =
                        String::from_utf8_lossy(&self.source[self.start..self.curr_ptr])
                            .into_owned();

                    let token = Token::new(token_type, lexeme, self.line);

                    debug!("Emitting token: {}", token);

                    return Some(Ok(token));
                }

                // Whitespace or comment: keep scanning.
                Ok(None) => {}
            }
        }
    }
}

impl FusedIterator for Scanner<'_> {}
