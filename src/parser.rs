//! Recursive-descent parser.
//!
//! Consumes a scanned token vector and produces the statement list.  Parse
//! errors are recorded, then an internal panic signal unwinds to the nearest
//! declaration boundary where [`Parser::synchronize`] discards tokens up to a
//! likely statement start.  The erroneous declaration is dropped and parsing
//! continues, so one pass can report several diagnostics.
//!
//! `for` loops are lowered here; the AST has no dedicated loop-with-increment
//! node.

use std::rc::Rc;

use log::{debug, info};

use crate::error::LoxError;
use crate::expr::{Expr, ExprId};
use crate::stmt::{FunctionDecl, Stmt};
use crate::token::{Token, TokenType};

/// Functions accept at most this many parameters, calls this many arguments.
const MAX_CALL_SLOTS: usize = 8;

/// Panic-mode signal.  Carries nothing: the diagnostic has already been
/// recorded by the time this unwinds.
struct ParseInterrupt;

type ParseResult<T> = Result<T, ParseInterrupt>;

pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
    errors: Vec<LoxError>,
    next_id: u64,
}

impl Parser {
    /// The token vector must be terminated by an `EOF` token, as produced by
    /// a clean scan.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self::with_first_id(tokens, 0)
    }

    /// Like [`Parser::new`], but expression ids start at `first_id`.  The
    /// driver threads its id counter through here so successive parses in one
    /// session never reuse an id.
    pub fn with_first_id(tokens: Vec<Token>, first_id: u64) -> Self {
        info!(
            "Initializing Parser with {} token(s), first id {}",
            tokens.len(),
            first_id
        );
        Parser {
            tokens,
            current: 0,
            errors: Vec::new(),
            next_id: first_id,
        }
    }

    /// One past the last expression id handed out.
    pub fn next_expr_id(&self) -> u64 {
        self.next_id
    }

    /// Parse the whole program.  Returns every well-formed declaration along
    /// with the diagnostics collected on the way.
    pub fn parse(&mut self) -> (Vec<Stmt>, Vec<LoxError>) {
        let mut statements: Vec<Stmt> = Vec::new();

        while !self.is_at_end() {
            if let Some(stmt) = self.declaration() {
                statements.push(stmt);
            }
        }

        info!(
            "Parse produced {} statement(s), {} error(s)",
            statements.len(),
            self.errors.len()
        );

        (statements, std::mem::take(&mut self.errors))
    }

    // Declarations

    fn declaration(&mut self) -> Option<Stmt> {
        let result = if self.match_token(&TokenType::CLASS) {
            self.class_declaration()
        } else if self.match_token(&TokenType::FUN) {
            self.function("function").map(Stmt::Function)
        } else if self.match_token(&TokenType::VAR) {
            self.var_declaration()
        } else {
            self.statement()
        };

        match result {
            Ok(stmt) => Some(stmt),

            Err(ParseInterrupt) => {
                self.synchronize();
                None
            }
        }
    }

    fn class_declaration(&mut self) -> ParseResult<Stmt> {
        let name: Token = self
            .consume(&TokenType::IDENTIFIER, "Expect class name.")?
            .clone();

        // The superclass node exists exactly when `<` was consumed.  It is a
        // `Variable` expression so the resolver binds it like any other read.
        let superclass: Option<Expr> = if self.match_token(&TokenType::LESS) {
            let super_name: Token = self
                .consume(&TokenType::IDENTIFIER, "Expect superclass name.")?
                .clone();

            Some(Expr::Variable {
                id: self.fresh_id(),
                name: super_name,
            })
        } else {
            None
        };

        self.consume(&TokenType::LEFT_BRACE, "Expect '{' before class body.")?;

        let mut methods: Vec<Rc<FunctionDecl>> = Vec::new();

        while !self.check(&TokenType::RIGHT_BRACE) && !self.is_at_end() {
            methods.push(self.function("method")?);
        }

        self.consume(&TokenType::RIGHT_BRACE, "Expect '}' after class body.")?;

        Ok(Stmt::Class {
            name,
            superclass,
            methods,
        })
    }

    fn function(&mut self, kind: &str) -> ParseResult<Rc<FunctionDecl>> {
        let name: Token = self
            .consume(&TokenType::IDENTIFIER, &format!("Expect {} name.", kind))?
            .clone();

        self.consume(
            &TokenType::LEFT_PAREN,
            &format!("Expect '(' after {} name.", kind),
        )?;

        let mut params: Vec<Token> = Vec::new();

        if !self.check(&TokenType::RIGHT_PAREN) {
            loop {
                if params.len() >= MAX_CALL_SLOTS {
                    // Reported without unwinding; parsing continues.
                    let token = self.peek().clone();
                    self.report(&token, "Cannot have more than 8 parameters.");
                }

                params.push(
                    self.consume(&TokenType::IDENTIFIER, "Expect parameter name.")?
                        .clone(),
                );

                if !self.match_token(&TokenType::COMMA) {
                    break;
                }
            }
        }

        self.consume(&TokenType::RIGHT_PAREN, "Expect ')' after parameters.")?;
        self.consume(
            &TokenType::LEFT_BRACE,
            &format!("Expect '{{' before {} body.", kind),
        )?;

        let body: Vec<Stmt> = self.block_statements()?;

        Ok(Rc::new(FunctionDecl { name, params, body }))
    }

    fn var_declaration(&mut self) -> ParseResult<Stmt> {
        let name: Token = self
            .consume(&TokenType::IDENTIFIER, "Expect variable name.")?
            .clone();

        let initializer: Option<Expr> = if self.match_token(&TokenType::EQUAL) {
            Some(self.expression()?)
        } else {
            None
        };

        self.consume(
            &TokenType::SEMICOLON,
            "Expect ';' after variable declaration.",
        )?;

        Ok(Stmt::Var { name, initializer })
    }

    // Statements

    fn statement(&mut self) -> ParseResult<Stmt> {
        if self.match_token(&TokenType::FOR) {
            return self.for_statement();
        }

        if self.match_token(&TokenType::IF) {
            return self.if_statement();
        }

        if self.match_token(&TokenType::PRINT) {
            return self.print_statement();
        }

        if self.match_token(&TokenType::RETURN) {
            return self.return_statement();
        }

        if self.match_token(&TokenType::WHILE) {
            return self.while_statement();
        }

        if self.match_token(&TokenType::LEFT_BRACE) {
            return Ok(Stmt::Block(self.block_statements()?));
        }

        self.expression_statement()
    }

    /// `for (I; C; U) B` lowers to `{ I; while (C) { B; U; } }`.
    fn for_statement(&mut self) -> ParseResult<Stmt> {
        self.consume(&TokenType::LEFT_PAREN, "Expect '(' after 'for'.")?;

        let initializer: Option<Stmt> = if self.match_token(&TokenType::SEMICOLON) {
            None
        } else if self.match_token(&TokenType::VAR) {
            Some(self.var_declaration()?)
        } else {
            Some(self.expression_statement()?)
        };

        let condition: Option<Expr> = if !self.check(&TokenType::SEMICOLON) {
            Some(self.expression()?)
        } else {
            None
        };

        self.consume(&TokenType::SEMICOLON, "Expect ';' after loop condition.")?;

        let increment: Option<Expr> = if !self.check(&TokenType::RIGHT_PAREN) {
            Some(self.expression()?)
        } else {
            None
        };

        self.consume(&TokenType::RIGHT_PAREN, "Expect ')' after for clauses.")?;

        let mut body: Stmt = self.statement()?;

        debug!("Lowering for loop at line {}", self.previous().line);

        if let Some(increment) = increment {
            body = Stmt::Block(vec![body, Stmt::Expression(increment)]);
        }

        let condition: Expr = condition.unwrap_or_else(|| {
            // A missing condition loops forever.
            Expr::Literal(Token::new(
                TokenType::TRUE,
                "true".to_string(),
                self.previous().line,
            ))
        });

        body = Stmt::While {
            condition,
            body: Box::new(body),
        };

        if let Some(initializer) = initializer {
            body = Stmt::Block(vec![initializer, body]);
        }

        Ok(body)
    }

    fn if_statement(&mut self) -> ParseResult<Stmt> {
        self.consume(&TokenType::LEFT_PAREN, "Expect '(' after 'if'.")?;
        let condition: Expr = self.expression()?;
        self.consume(&TokenType::RIGHT_PAREN, "Expect ')' after if condition.")?;

        let then_branch = Box::new(self.statement()?);

        let else_branch: Option<Box<Stmt>> = if self.match_token(&TokenType::ELSE) {
            Some(Box::new(self.statement()?))
        } else {
            None
        };

        Ok(Stmt::If {
            condition,
            then_branch,
            else_branch,
        })
    }

    fn print_statement(&mut self) -> ParseResult<Stmt> {
        let value: Expr = self.expression()?;
        self.consume(&TokenType::SEMICOLON, "Expect ';' after value.")?;
        Ok(Stmt::Print(value))
    }

    fn return_statement(&mut self) -> ParseResult<Stmt> {
        let keyword: Token = self.previous().clone();

        let value: Option<Expr> = if !self.check(&TokenType::SEMICOLON) {
            Some(self.expression()?)
        } else {
            None
        };

        self.consume(&TokenType::SEMICOLON, "Expect ';' after return value.")?;

        Ok(Stmt::Return { keyword, value })
    }

    fn while_statement(&mut self) -> ParseResult<Stmt> {
        self.consume(&TokenType::LEFT_PAREN, "Expect '(' after 'while'.")?;
        let condition: Expr = self.expression()?;
        self.consume(&TokenType::RIGHT_PAREN, "Expect ')' after condition.")?;

        let body = Box::new(self.statement()?);

        Ok(Stmt::While { condition, body })
    }

    fn expression_statement(&mut self) -> ParseResult<Stmt> {
        let expr: Expr = self.expression()?;
        self.consume(&TokenType::SEMICOLON, "Expect ';' after expression.")?;
        Ok(Stmt::Expression(expr))
    }

    fn block_statements(&mut self) -> ParseResult<Vec<Stmt>> {
        let mut statements: Vec<Stmt> = Vec::new();

        while !self.check(&TokenType::RIGHT_BRACE) && !self.is_at_end() {
            if let Some(stmt) = self.declaration() {
                statements.push(stmt);
            }
        }

        self.consume(&TokenType::RIGHT_BRACE, "Expect '}' after block.")?;

        Ok(statements)
    }

    // Expressions

    fn expression(&mut self) -> ParseResult<Expr> {
        self.assignment()
    }

    fn assignment(&mut self) -> ParseResult<Expr> {
        let expr: Expr = self.logic_or()?;

        if self.match_token(&TokenType::EQUAL) {
            let equals: Token = self.previous().clone();
            let value = Box::new(self.assignment()?);

            return Ok(match expr {
                // Rewriting: a variable rvalue becomes an assignment target.
                Expr::Variable { name, .. } => Expr::Assign {
                    id: self.fresh_id(),
                    name,
                    value,
                },

                // A property read becomes a property write.
                Expr::Get { object, name } => Expr::Set {
                    object,
                    name,
                    value,
                },

                other => {
                    // Reported without unwinding; the original LHS stands.
                    self.report(&equals, "Invalid assignment target.");
                    other
                }
            });
        }

        Ok(expr)
    }

    fn logic_or(&mut self) -> ParseResult<Expr> {
        let mut expr: Expr = self.logic_and()?;

        while self.match_token(&TokenType::OR) {
            let operator: Token = self.previous().clone();
            let right = self.logic_and()?;
            expr = Expr::Logical {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    fn logic_and(&mut self) -> ParseResult<Expr> {
        let mut expr: Expr = self.equality()?;

        while self.match_token(&TokenType::AND) {
            let operator: Token = self.previous().clone();
            let right = self.equality()?;
            expr = Expr::Logical {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    fn equality(&mut self) -> ParseResult<Expr> {
        let mut expr: Expr = self.comparison()?;

        while self.match_tokens(&[TokenType::BANG_EQUAL, TokenType::EQUAL_EQUAL]) {
            let operator: Token = self.previous().clone();
            let right = self.comparison()?;
            expr = Expr::Binary {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    fn comparison(&mut self) -> ParseResult<Expr> {
        let mut expr: Expr = self.term()?;

        while self.match_tokens(&[
            TokenType::GREATER,
            TokenType::GREATER_EQUAL,
            TokenType::LESS,
            TokenType::LESS_EQUAL,
        ]) {
            let operator: Token = self.previous().clone();
            let right = self.term()?;
            expr = Expr::Binary {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    fn term(&mut self) -> ParseResult<Expr> {
        let mut expr: Expr = self.factor()?;

        while self.match_tokens(&[TokenType::MINUS, TokenType::PLUS]) {
            let operator: Token = self.previous().clone();
            let right = self.factor()?;
            expr = Expr::Binary {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    fn factor(&mut self) -> ParseResult<Expr> {
        let mut expr: Expr = self.unary()?;

        while self.match_tokens(&[TokenType::SLASH, TokenType::STAR]) {
            let operator: Token = self.previous().clone();
            let right = self.unary()?;
            expr = Expr::Binary {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    fn unary(&mut self) -> ParseResult<Expr> {
        if self.match_tokens(&[TokenType::BANG, TokenType::MINUS]) {
            let operator: Token = self.previous().clone();
            let right = self.unary()?;
            return Ok(Expr::Unary {
                operator,
                right: Box::new(right),
            });
        }

        self.call()
    }

    fn call(&mut self) -> ParseResult<Expr> {
        let mut expr: Expr = self.primary()?;

        loop {
            if self.match_token(&TokenType::LEFT_PAREN) {
                expr = self.finish_call(expr)?;
            } else if self.match_token(&TokenType::DOT) {
                let name: Token = self
                    .consume(&TokenType::IDENTIFIER, "Expect property name after '.'.")?
                    .clone();

                expr = Expr::Get {
                    object: Box::new(expr),
                    name,
                };
            } else {
                break;
            }
        }

        Ok(expr)
    }

    fn finish_call(&mut self, callee: Expr) -> ParseResult<Expr> {
        let mut arguments: Vec<Expr> = Vec::new();

        if !self.check(&TokenType::RIGHT_PAREN) {
            loop {
                if arguments.len() >= MAX_CALL_SLOTS {
                    let token = self.peek().clone();
                    self.report(&token, "Cannot have more than 8 arguments.");
                }

                arguments.push(self.expression()?);

                if !self.match_token(&TokenType::COMMA) {
                    break;
                }
            }
        }

        let paren: Token = self
            .consume(&TokenType::RIGHT_PAREN, "Expect ')' after arguments.")?
            .clone();

        Ok(Expr::Call {
            callee: Box::new(callee),
            paren,
            arguments,
        })
    }

    fn primary(&mut self) -> ParseResult<Expr> {
        // Payload-insensitive TokenType equality makes these sentinels match
        // any number/string literal.
        if self.match_tokens(&[
            TokenType::FALSE,
            TokenType::TRUE,
            TokenType::NIL,
            TokenType::NUMBER(0.0),
            TokenType::STRING(String::new()),
        ]) {
            return Ok(Expr::Literal(self.previous().clone()));
        }

        if self.match_token(&TokenType::SUPER) {
            let keyword: Token = self.previous().clone();
            self.consume(&TokenType::DOT, "Expect '.' after 'super'.")?;
            let method: Token = self
                .consume(&TokenType::IDENTIFIER, "Expect superclass method name.")?
                .clone();

            return Ok(Expr::Super {
                id: self.fresh_id(),
                keyword,
                method,
            });
        }

        if self.match_token(&TokenType::THIS) {
            return Ok(Expr::This {
                id: self.fresh_id(),
                keyword: self.previous().clone(),
            });
        }

        if self.match_token(&TokenType::IDENTIFIER) {
            return Ok(Expr::Variable {
                id: self.fresh_id(),
                name: self.previous().clone(),
            });
        }

        if self.match_token(&TokenType::LEFT_PAREN) {
            let expr = self.expression()?;
            self.consume(&TokenType::RIGHT_PAREN, "Expect ')' after expression.")?;
            return Ok(Expr::Grouping(Box::new(expr)));
        }

        let token = self.peek().clone();
        Err(self.error(&token, "Expect expression."))
    }

    // Error handling

    /// Record a diagnostic and hand back the panic signal for `?`.
    fn error(&mut self, token: &Token, message: &str) -> ParseInterrupt {
        self.report(token, message);
        ParseInterrupt
    }

    /// Record a diagnostic without unwinding (argument/parameter overflows,
    /// bad assignment targets).
    fn report(&mut self, token: &Token, message: &str) {
        self.errors.push(LoxError::parse(token, message));
    }

    /// Discard tokens until just past a `;` or in front of a token that
    /// plausibly starts a declaration.
    fn synchronize(&mut self) {
        debug!("Synchronizing parser at line {}", self.peek().line);

        self.advance();

        while !self.is_at_end() {
            if self.previous().token_type == TokenType::SEMICOLON {
                return;
            }

            match self.peek().token_type {
                TokenType::CLASS
                | TokenType::FUN
                | TokenType::VAR
                | TokenType::FOR
                | TokenType::IF
                | TokenType::WHILE
                | TokenType::PRINT
                | TokenType::RETURN => return,

                _ => {
                    self.advance();
                }
            }
        }
    }

    // Token-stream helpers

    fn fresh_id(&mut self) -> ExprId {
        let id = ExprId(self.next_id);
        self.next_id += 1;
        id
    }

    fn match_token(&mut self, token_type: &TokenType) -> bool {
        if self.check(token_type) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn match_tokens(&mut self, types: &[TokenType]) -> bool {
        for token_type in types {
            if self.match_token(token_type) {
                return true;
            }
        }
        false
    }

    fn check(&self, token_type: &TokenType) -> bool {
        if self.is_at_end() {
            // Only an explicit EOF check matches at the end.
            return *token_type == TokenType::EOF;
        }
        self.peek().token_type == *token_type
    }

    fn consume(&mut self, token_type: &TokenType, message: &str) -> ParseResult<&Token> {
        if self.check(token_type) {
            return Ok(self.advance());
        }

        let token = self.peek().clone();
        Err(self.error(&token, message))
    }

    fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.previous()
    }

    fn is_at_end(&self) -> bool {
        self.peek().token_type == TokenType::EOF
    }

    fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }

    fn previous(&self) -> &Token {
        &self.tokens[self.current - 1]
    }
}
