//! Static resolution pass.
//!
//! One AST walk that:
//! 1. **Builds lexical scopes**: a stack of `HashMap<String, bool>` tracking
//!    declared (`false`) and fully defined (`true`) names per block.
//! 2. **Enforces static rules**: redeclaration in the same scope, reading a
//!    variable in its own initializer, `return` outside functions, `return
//!    <expr>` inside initializers, and `this`/`super` placement.
//! 3. **Records binding distances**: every `Variable`/`Assign`/`This`/`Super`
//!    occurrence that lands in a local scope is reported to the interpreter
//!    via [`Interpreter::note_local`] with its depth; names found in no scope
//!    are left for global lookup at runtime.
//!
//! Unlike the parser there is no panic mode: a rule violation is recorded and
//! the walk simply continues, so one pass surfaces every static error.

use std::collections::HashMap;
use std::io::Write;
use std::rc::Rc;

use log::{debug, info};

use crate::error::LoxError;
use crate::expr::{Expr, ExprId};
use crate::interpreter::Interpreter;
use crate::stmt::{FunctionDecl, Stmt};
use crate::token::Token;

/// What kind of function body encloses the current node.  Validates `return`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum FunctionType {
    None,
    Function,
    Initializer,
    Method,
}

/// What kind of class body encloses the current node.  Validates `this` and
/// `super`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum ClassType {
    None,

    /// Inside a class declaration _without_ a superclass
    Class,

    /// Inside a class declaration _with_ a superclass
    Subclass,
}

/// Resolver: tracks scopes, enforces static rules, and *records* binding
/// distances (locals vs. globals) by calling back into the interpreter.
pub struct Resolver<'i, 'o, W: Write> {
    interpreter: &'i mut Interpreter<'o, W>,
    scopes: Vec<HashMap<String, bool>>, // false=declared, true=defined
    current_function: FunctionType,
    current_class: ClassType,
    errors: Vec<LoxError>,
}

impl<'i, 'o, W: Write> Resolver<'i, 'o, W> {
    /// Create a new resolver bound to the given interpreter.
    pub fn new(interpreter: &'i mut Interpreter<'o, W>) -> Self {
        Resolver {
            interpreter,
            scopes: Vec::new(),
            current_function: FunctionType::None,
            current_class: ClassType::None,
            errors: Vec::new(),
        }
    }

    /// Walk all top-level statements; returns every diagnostic collected.
    pub fn resolve(mut self, statements: &[Stmt]) -> Vec<LoxError> {
        info!(
            "Beginning resolve pass over {} statement(s)",
            statements.len()
        );

        for stmt in statements {
            self.resolve_stmt(stmt);
        }

        self.errors
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Statement resolution
    // ─────────────────────────────────────────────────────────────────────────

    fn resolve_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Block(statements) => {
                self.begin_scope();

                for s in statements {
                    self.resolve_stmt(s);
                }

                self.end_scope();
            }

            Stmt::Var { name, initializer } => {
                // Declared-but-not-defined until the initializer has been
                // resolved; a self-referential initializer is caught below.
                self.declare(name);

                if let Some(expr) = initializer {
                    self.resolve_expr(expr);
                }

                self.define(name);
            }

            Stmt::Function(declaration) => {
                // Declared and defined eagerly so the function can recurse.
                self.declare(&declaration.name);
                self.define(&declaration.name);

                self.resolve_function(FunctionType::Function, declaration);
            }

            Stmt::Class {
                name,
                superclass,
                methods,
            } => {
                self.resolve_class(name, superclass.as_ref(), methods);
            }

            Stmt::Expression(expr) | Stmt::Print(expr) => {
                self.resolve_expr(expr);
            }

            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                self.resolve_expr(condition);
                self.resolve_stmt(then_branch);

                if let Some(eb) = else_branch.as_deref() {
                    self.resolve_stmt(eb);
                }
            }

            Stmt::While { condition, body } => {
                self.resolve_expr(condition);
                self.resolve_stmt(body);
            }

            Stmt::Return { keyword, value } => {
                if self.current_function == FunctionType::None {
                    self.error(keyword, "Cannot return from top-level code.");
                }

                if let Some(expr) = value {
                    if self.current_function == FunctionType::Initializer {
                        self.error(keyword, "Cannot return a value from an initializer.");
                    }

                    self.resolve_expr(expr);
                }
            }
        }
    }

    fn resolve_class(
        &mut self,
        name: &Token,
        superclass: Option<&Expr>,
        methods: &[Rc<FunctionDecl>],
    ) {
        // 1. Self-inheritance guard
        if let Some(Expr::Variable {
            name: super_name, ..
        }) = superclass
        {
            if super_name.lexeme == name.lexeme {
                self.error(super_name, "A class can't inherit from itself.");
            }
        }

        // 2. Declare & define the class name so methods can refer to it
        self.declare(name);
        self.define(name);

        // 3. Save and enter the class context
        let enclosing_class: ClassType = self.current_class;

        self.current_class = if superclass.is_some() {
            ClassType::Subclass
        } else {
            ClassType::Class
        };

        // 4. Resolve the superclass variable and open a scope binding `super`
        if let Some(expr) = superclass {
            self.resolve_expr(expr);

            self.begin_scope();
            self.define_name("super");
        }

        // 5. Open the implicit `this` scope for methods
        self.begin_scope();
        self.define_name("this");

        // 6. Resolve each method body; `init` gets initializer rules
        for method in methods {
            let kind = if method.name.lexeme == "init" {
                FunctionType::Initializer
            } else {
                FunctionType::Method
            };

            self.resolve_function(kind, method);
        }

        // 7. Close the `this` scope, then the `super` scope if one was opened
        self.end_scope();

        if superclass.is_some() {
            self.end_scope();
        }

        // 8. Restore the outer class context
        self.current_class = enclosing_class;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Expression resolution
    // ─────────────────────────────────────────────────────────────────────────

    fn resolve_expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Literal(_) => {}

            Expr::Grouping(inner) => {
                self.resolve_expr(inner);
            }

            Expr::Unary { right, .. } => {
                self.resolve_expr(right);
            }

            Expr::Binary { left, right, .. } | Expr::Logical { left, right, .. } => {
                self.resolve_expr(left);
                self.resolve_expr(right);
            }

            Expr::Variable { id, name } => {
                // Prevent reading a variable in its own initializer
                let declared_only = self
                    .scopes
                    .last()
                    .map(|scope| scope.get(&name.lexeme) == Some(&false))
                    .unwrap_or(false);

                if declared_only {
                    self.error(name, "Cannot read local variable in its own initializer.");
                }

                self.resolve_local(*id, name);
            }

            Expr::Assign { id, name, value } => {
                // Resolve the right-hand side first, then bind the target
                self.resolve_expr(value);
                self.resolve_local(*id, name);
            }

            Expr::Call {
                callee, arguments, ..
            } => {
                self.resolve_expr(callee);

                for arg in arguments {
                    self.resolve_expr(arg);
                }
            }

            Expr::Get { object, .. } => {
                // Properties are late-bound; only the object resolves here
                self.resolve_expr(object);
            }

            Expr::Set { object, value, .. } => {
                self.resolve_expr(object);
                self.resolve_expr(value);
            }

            Expr::This { id, keyword } => {
                if self.current_class == ClassType::None {
                    self.error(keyword, "Cannot use 'this' outside of a class.");
                    return;
                }

                self.resolve_local(*id, keyword);
            }

            Expr::Super { id, keyword, .. } => {
                if self.current_class == ClassType::None {
                    self.error(keyword, "Cannot use 'super' outside of a class.");
                    return;
                }

                if self.current_class != ClassType::Subclass {
                    self.error(keyword, "Cannot use 'super' in a class with no superclass.");
                    return;
                }

                self.resolve_local(*id, keyword);
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Function helper
    // ─────────────────────────────────────────────────────────────────────────

    /// Enter a fresh scope for a function's parameters + body.
    fn resolve_function(&mut self, kind: FunctionType, declaration: &FunctionDecl) {
        let enclosing = self.current_function;

        self.current_function = kind;

        self.begin_scope();

        for param in &declaration.params {
            self.declare(param);
            self.define(param);
        }

        for stmt in &declaration.body {
            self.resolve_stmt(stmt);
        }

        self.end_scope();

        self.current_function = enclosing;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Scope management
    // ─────────────────────────────────────────────────────────────────────────

    #[inline]
    fn begin_scope(&mut self) {
        self.scopes.push(HashMap::new());
    }

    #[inline]
    fn end_scope(&mut self) {
        self.scopes.pop();
    }

    fn declare(&mut self, name: &Token) {
        // Globals are not tracked; only local scopes enforce uniqueness
        let duplicate = match self.scopes.last() {
            Some(scope) => scope.contains_key(&name.lexeme),
            None => return,
        };

        if duplicate {
            self.error(
                name,
                "Variable with this name already declared in this scope.",
            );
            return;
        }

        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name.lexeme.clone(), false);
        }
    }

    fn define(&mut self, name: &Token) {
        self.define_name(&name.lexeme);
    }

    fn define_name(&mut self, name: &str) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name.to_string(), true);
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Binding-distance helper
    // ─────────────────────────────────────────────────────────────────────────

    /// Record this occurrence as a local at its depth, or leave it for the
    /// global environment if no scope contains it.
    fn resolve_local(&mut self, id: ExprId, name: &Token) {
        for (depth, scope) in self.scopes.iter().rev().enumerate() {
            if scope.contains_key(&name.lexeme) {
                debug!("Resolved '{}' at depth {}", name.lexeme, depth);

                self.interpreter.note_local(id, depth);
                return;
            }
        }

        debug!("Resolved '{}' as global", name.lexeme);
    }

    fn error(&mut self, token: &Token, message: &str) {
        self.errors.push(LoxError::resolve(token, message));
    }
}
