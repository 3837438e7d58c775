use std::fmt;
use std::mem;

use log::debug;

/// The fixed token vocabulary of the Language.
///
/// Literal payloads live directly in the `STRING`/`NUMBER` variants, so a
/// `TokenType` is the full decoded form of a token.  Equality is
/// payload‑insensitive (see [`PartialEq`] below), which lets the parser match
/// against `NUMBER(0.0)`‑style sentinels.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone)]
pub enum TokenType {
    // Single-character tokens.
    LEFT_PAREN,
    RIGHT_PAREN,
    LEFT_BRACE,
    RIGHT_BRACE,
    COMMA,
    DOT,
    MINUS,
    PLUS,
    SEMICOLON,
    SLASH,
    STAR,

    // One or two character tokens.
    BANG,
    BANG_EQUAL,
    EQUAL,
    EQUAL_EQUAL,
    GREATER,
    GREATER_EQUAL,
    LESS,
    LESS_EQUAL,

    // Literals.
    IDENTIFIER,
    STRING(String),
    NUMBER(f64),

    // Keywords.
    AND,
    CLASS,
    ELSE,
    FALSE,
    FUN,
    FOR,
    IF,
    NIL,
    OR,
    PRINT,
    RETURN,
    SUPER,
    THIS,
    TRUE,
    VAR,
    WHILE,

    // Special Characters
    EOF,
}

impl PartialEq for TokenType {
    /// Variant‑only equality: two `NUMBER`s compare equal whatever their
    /// payloads, likewise `STRING`s.
    fn eq(&self, other: &Self) -> bool {
        mem::discriminant(self) == mem::discriminant(other)
    }
}

impl Eq for TokenType {}

#[derive(Debug, Clone)]
pub struct Token {
    pub token_type: TokenType,
    pub lexeme: String,
    pub line: usize,
}

impl Token {
    pub fn new(token_type: TokenType, lexeme: String, line: usize) -> Self {
        debug!(
            "Creating new token: type={:?}, lexeme={}, line={}",
            token_type, lexeme, line
        );
        Self {
            token_type,
            lexeme,
            line,
        }
    }
}

impl fmt::Display for Token {
    /// `TYPE lexeme literal` rendering, with `null` standing in for tokens
    /// that carry no literal payload.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tmp: String = format!("{:?}", self.token_type);
        let type_name: &str = tmp.split('(').next().unwrap_or(&tmp);

        match &self.token_type {
            TokenType::STRING(literal) => {
                write!(f, "{} {} {}", type_name, self.lexeme, literal)
            }

            TokenType::NUMBER(n) => {
                if n.fract() == 0.0 {
                    write!(f, "{} {} {:.1}", type_name, self.lexeme, n)
                } else {
                    write!(f, "{} {} {}", type_name, self.lexeme, n)
                }
            }

            _ => write!(f, "{} {} null", type_name, self.lexeme),
        }
    }
}
