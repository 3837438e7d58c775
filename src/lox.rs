//! Session driver.
//!
//! A [`Lox`] value owns the interpreter and the two session flags
//! (`had_error`, `had_runtime_error`) and pushes a source unit through the
//! pipeline: scan, parse, resolve, evaluate.  Each phase runs only when every
//! earlier phase finished without a diagnostic.
//!
//! All diagnostics go to standard error; program output goes to the sink the
//! driver was built over.

use std::io::{self, Write};

use log::{debug, info};

use crate::error::LoxError;
use crate::interpreter::Interpreter;
use crate::parser::Parser;
use crate::resolver::Resolver;
use crate::scanner::Scanner;
use crate::token::Token;

pub struct Lox<'o, W: Write> {
    interpreter: Interpreter<'o, W>,

    /// First expression id handed to the next parse.  Monotone across `run`
    /// calls so the interpreter's depth map stays valid over a whole REPL
    /// session.
    next_expr_id: u64,

    had_error: bool,
    had_runtime_error: bool,
}

impl<'o, W: Write> Lox<'o, W> {
    pub fn new(output: &'o mut W) -> Self {
        Lox {
            interpreter: Interpreter::new(output),
            next_expr_id: 0,
            had_error: false,
            had_runtime_error: false,
        }
    }

    /// A scan, parse, or resolve diagnostic was reported.
    pub fn had_error(&self) -> bool {
        self.had_error
    }

    /// Evaluation stopped on a runtime error.
    pub fn had_runtime_error(&self) -> bool {
        self.had_runtime_error
    }

    /// Run one source unit through the full pipeline against the session's
    /// interpreter state.
    pub fn run(&mut self, source: &str) {
        info!("Running source unit of {} byte(s)", source.len());

        let scanner = Scanner::new(source.as_bytes());
        let mut tokens: Vec<Token> = Vec::new();

        for item in scanner {
            match item {
                Ok(token) => tokens.push(token),

                // Scanning continues past bad characters so one pass can
                // report them all.
                Err(error) => self.report(&error),
            }
        }

        if self.had_error {
            return;
        }

        let mut parser = Parser::with_first_id(tokens, self.next_expr_id);
        let (statements, parse_errors) = parser.parse();
        self.next_expr_id = parser.next_expr_id();

        for error in &parse_errors {
            self.report(error);
        }

        if self.had_error {
            return;
        }

        let resolver = Resolver::new(&mut self.interpreter);
        let resolve_errors = resolver.resolve(&statements);

        for error in &resolve_errors {
            self.report(error);
        }

        if self.had_error {
            return;
        }

        if let Err(error) = self.interpreter.interpret(&statements) {
            eprintln!("{}", error);
            self.had_runtime_error = true;
        }
    }

    /// Interactive prompt.  Definitions persist between lines; a diagnostic
    /// on one line must not poison the next, so the flags reset per line.
    pub fn run_prompt(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let mut input = String::new();

        loop {
            print!("> ");
            io::stdout().flush()?;

            input.clear();
            if stdin.read_line(&mut input)? == 0 {
                debug!("EOF on prompt, leaving");
                break;
            }

            self.run(&input);

            self.had_error = false;
            self.had_runtime_error = false;
        }

        Ok(())
    }

    fn report(&mut self, error: &LoxError) {
        eprintln!("{}", error);
        self.had_error = true;
    }
}
