//! Tree-walking evaluator.
//!
//! Owns the global environment (seeded with the `clock` builtin), the current
//! environment, and the depth map installed by the resolver.  Generic over
//! the output sink so `print` is capturable in tests.
//!
//! Two things travel the error channel: genuine runtime errors, and the
//! early-return signal that `return` uses to unwind to the nearest call
//! boundary.  [`Unwind`] keeps them apart; only [`Unwind::Error`] ever
//! reaches the user.

use std::cell::RefCell;
use std::collections::HashMap;
use std::io::{self, Write};
use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

use log::{debug, info};

use crate::environment::Environment;
use crate::error::LoxError;
use crate::expr::{Expr, ExprId};
use crate::stmt::{FunctionDecl, Stmt};
use crate::token::{Token, TokenType};
use crate::value::{LoxClass, LoxFunction, LoxInstance, Value};

/// Non-local exits during evaluation.
#[derive(Debug)]
pub enum Unwind {
    /// A `return` statement in flight.  Caught at function-call boundaries,
    /// never surfaced.
    Return(Value),

    /// A runtime error propagating to the top-level `interpret` call.
    Error(LoxError),
}

impl From<LoxError> for Unwind {
    fn from(error: LoxError) -> Self {
        Unwind::Error(error)
    }
}

impl From<io::Error> for Unwind {
    fn from(error: io::Error) -> Self {
        Unwind::Error(LoxError::Io(error))
    }
}

pub struct Interpreter<'o, W: Write> {
    globals: Rc<RefCell<Environment>>,
    environment: Rc<RefCell<Environment>>,
    locals: HashMap<ExprId, usize>,
    output: &'o mut W,
}

impl<'o, W: Write> Interpreter<'o, W> {
    pub fn new(output: &'o mut W) -> Self {
        let globals = Rc::new(RefCell::new(Environment::new()));

        globals.borrow_mut().define(
            "clock",
            Value::NativeFunction {
                name: "clock",
                arity: 0,
                func: clock_native,
            },
        );

        info!("Interpreter initialized with clock builtin");

        Interpreter {
            environment: Rc::clone(&globals),
            globals,
            locals: HashMap::new(),
            output,
        }
    }

    /// Resolver callback: this expression resolves `depth` scopes up from
    /// its use site.  Absent entries mean globals.
    pub fn note_local(&mut self, id: ExprId, depth: usize) {
        debug!("Noting local binding: {:?} at depth {}", id, depth);

        self.locals.insert(id, depth);
    }

    /// Run a resolved statement list to completion or first runtime error.
    pub fn interpret(&mut self, statements: &[Stmt]) -> Result<(), LoxError> {
        info!("Interpreting {} statement(s)", statements.len());

        for statement in statements {
            match self.execute(statement) {
                Ok(()) => {}

                Err(Unwind::Error(error)) => return Err(error),

                // The resolver rejects top-level returns, so there is no
                // frame for this signal to unwind to.
                Err(Unwind::Return(_)) => {
                    debug!("Return signal reached top level; ignoring");
                }
            }
        }

        Ok(())
    }

    fn execute(&mut self, stmt: &Stmt) -> Result<(), Unwind> {
        match stmt {
            Stmt::Expression(expr) => {
                self.evaluate(expr)?;

                Ok(())
            }

            Stmt::Print(expr) => {
                let value = self.evaluate(expr)?;

                writeln!(self.output, "{}", value)?;

                Ok(())
            }

            Stmt::Var { name, initializer } => {
                let value: Value = if let Some(expr) = initializer {
                    self.evaluate(expr)?
                } else {
                    Value::Nil
                };

                self.environment.borrow_mut().define(&name.lexeme, value);

                Ok(())
            }

            Stmt::Block(statements) => {
                let environment = Rc::new(RefCell::new(Environment::with_enclosing(Rc::clone(
                    &self.environment,
                ))));

                self.execute_block(statements, environment)
            }

            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                if is_truthy(&self.evaluate(condition)?) {
                    self.execute(then_branch)?;
                } else if let Some(else_branch) = else_branch {
                    self.execute(else_branch)?;
                }

                Ok(())
            }

            Stmt::While { condition, body } => {
                while is_truthy(&self.evaluate(condition)?) {
                    self.execute(body)?;
                }

                Ok(())
            }

            Stmt::Function(declaration) => {
                let function = LoxFunction {
                    declaration: Rc::clone(declaration),
                    closure: Rc::clone(&self.environment),
                    is_initializer: false,
                };

                self.environment
                    .borrow_mut()
                    .define(&declaration.name.lexeme, Value::Function(Rc::new(function)));

                Ok(())
            }

            Stmt::Return { value, .. } => {
                let value: Value = match value {
                    Some(expr) => self.evaluate(expr)?,
                    None => Value::Nil,
                };

                Err(Unwind::Return(value))
            }

            Stmt::Class {
                name,
                superclass,
                methods,
            } => self.execute_class(name, superclass.as_ref(), methods),
        }
    }

    fn execute_class(
        &mut self,
        name: &Token,
        superclass: Option<&Expr>,
        methods: &[Rc<FunctionDecl>],
    ) -> Result<(), Unwind> {
        let superclass_value: Option<Rc<LoxClass>> = match superclass {
            Some(expr) => match self.evaluate(expr)? {
                Value::Class(class) => Some(class),

                _ => {
                    let line = match expr {
                        Expr::Variable { name, .. } => name.line,
                        _ => name.line,
                    };

                    return Err(LoxError::runtime(line, "Superclass must be a class.").into());
                }
            },

            None => None,
        };

        // Two-step definition lets methods close over the class name.
        self.environment.borrow_mut().define(&name.lexeme, Value::Nil);

        // With a superclass, methods close over an extra scope binding
        // `super`; their `this` scope nests inside it at bind time.
        let method_closure: Rc<RefCell<Environment>> = match &superclass_value {
            Some(class) => {
                let environment = Rc::new(RefCell::new(Environment::with_enclosing(Rc::clone(
                    &self.environment,
                ))));

                environment
                    .borrow_mut()
                    .define("super", Value::Class(Rc::clone(class)));

                environment
            }

            None => Rc::clone(&self.environment),
        };

        let mut class_methods: HashMap<String, Rc<LoxFunction>> = HashMap::new();

        for declaration in methods {
            let function = LoxFunction {
                declaration: Rc::clone(declaration),
                closure: Rc::clone(&method_closure),
                is_initializer: declaration.name.lexeme == "init",
            };

            class_methods.insert(declaration.name.lexeme.clone(), Rc::new(function));
        }

        let class = Value::Class(Rc::new(LoxClass {
            name: name.lexeme.clone(),
            superclass: superclass_value,
            methods: class_methods,
        }));

        debug!("Defined class {}", name.lexeme);

        self.environment
            .borrow_mut()
            .assign(&name.lexeme, class, name.line)?;

        Ok(())
    }

    /// Run `statements` in `environment`, restoring the previous environment
    /// on every exit path, including unwinding ones.
    pub fn execute_block(
        &mut self,
        statements: &[Stmt],
        environment: Rc<RefCell<Environment>>,
    ) -> Result<(), Unwind> {
        let previous = std::mem::replace(&mut self.environment, environment);

        let mut result = Ok(());

        for statement in statements {
            result = self.execute(statement);

            if result.is_err() {
                break;
            }
        }

        self.environment = previous;

        result
    }

    pub fn evaluate(&mut self, expr: &Expr) -> Result<Value, Unwind> {
        match expr {
            Expr::Literal(token) => Ok(self.evaluate_literal(token)?),

            Expr::Grouping(inner) => self.evaluate(inner),

            Expr::Unary { operator, right } => self.evaluate_unary(operator, right),

            Expr::Binary {
                left,
                operator,
                right,
            } => self.evaluate_binary(left, operator, right),

            Expr::Logical {
                left,
                operator,
                right,
            } => {
                let left_value = self.evaluate(left)?;

                // Short-circuit: hand back the deciding operand itself.
                if operator.token_type == TokenType::OR {
                    if is_truthy(&left_value) {
                        return Ok(left_value);
                    }
                } else if !is_truthy(&left_value) {
                    return Ok(left_value);
                }

                self.evaluate(right)
            }

            Expr::Variable { id, name } => Ok(self.look_up_variable(name, *id)?),

            Expr::Assign { id, name, value } => {
                let value = self.evaluate(value)?;

                match self.locals.get(id) {
                    Some(&distance) => Environment::assign_at(
                        &self.environment,
                        distance,
                        &name.lexeme,
                        value.clone(),
                        name.line,
                    )?,

                    None => self.globals.borrow_mut().assign(
                        &name.lexeme,
                        value.clone(),
                        name.line,
                    )?,
                }

                Ok(value)
            }

            Expr::Call {
                callee,
                paren,
                arguments,
            } => {
                let callee_value = self.evaluate(callee)?;

                let mut argument_values: Vec<Value> = Vec::with_capacity(arguments.len());

                for argument in arguments {
                    argument_values.push(self.evaluate(argument)?);
                }

                self.call_value(callee_value, argument_values, paren)
            }

            Expr::Get { object, name } => match self.evaluate(object)? {
                Value::Instance(instance) => Ok(LoxInstance::get(&instance, name)?),

                _ => Err(LoxError::runtime(name.line, "Only instances have properties.").into()),
            },

            Expr::Set {
                object,
                name,
                value,
            } => {
                let instance = match self.evaluate(object)? {
                    Value::Instance(instance) => instance,

                    _ => {
                        return Err(
                            LoxError::runtime(name.line, "Only instances have fields.").into()
                        );
                    }
                };

                let value = self.evaluate(value)?;

                instance.borrow_mut().set(name, value.clone());

                Ok(value)
            }

            Expr::This { id, keyword } => Ok(self.look_up_variable(keyword, *id)?),

            Expr::Super { id, keyword, method } => {
                let distance = *self.locals.get(id).ok_or_else(|| {
                    LoxError::runtime(keyword.line, "Undefined variable 'super'.")
                })?;

                let superclass =
                    Environment::get_at(&self.environment, distance, "super", keyword.line)?;

                // The `this` scope sits immediately inside the `super` scope.
                let object =
                    Environment::get_at(&self.environment, distance - 1, "this", keyword.line)?;

                let bound = match (&superclass, &object) {
                    (Value::Class(class), Value::Instance(instance)) => class
                        .find_method(&method.lexeme)
                        .map(|m| m.bind(instance)),

                    _ => None,
                };

                match bound {
                    Some(function) => Ok(Value::Function(Rc::new(function))),

                    None => Err(LoxError::runtime(
                        method.line,
                        format!("Undefined property '{}'.", method.lexeme),
                    )
                    .into()),
                }
            }
        }
    }

    fn call_value(
        &mut self,
        callee: Value,
        arguments: Vec<Value>,
        paren: &Token,
    ) -> Result<Value, Unwind> {
        match callee {
            Value::NativeFunction { arity, func, .. } => {
                check_arity(arity, arguments.len(), paren)?;

                func(&arguments)
                    .map_err(|message| LoxError::runtime(paren.line, message).into())
            }

            Value::Function(function) => {
                check_arity(function.arity(), arguments.len(), paren)?;

                self.call_function(&function, arguments)
            }

            Value::Class(class) => {
                check_arity(class.arity(), arguments.len(), paren)?;

                let instance = Rc::new(RefCell::new(LoxInstance::new(Rc::clone(&class))));

                if let Some(initializer) = class.find_method("init") {
                    let bound = initializer.bind(&instance);
                    self.call_function(&bound, arguments)?;
                }

                Ok(Value::Instance(instance))
            }

            _ => Err(LoxError::runtime(paren.line, "Can only call functions and classes.").into()),
        }
    }

    fn call_function(
        &mut self,
        function: &LoxFunction,
        arguments: Vec<Value>,
    ) -> Result<Value, Unwind> {
        let environment = Rc::new(RefCell::new(Environment::with_enclosing(Rc::clone(
            &function.closure,
        ))));

        for (param, value) in function.declaration.params.iter().zip(arguments) {
            environment.borrow_mut().define(&param.lexeme, value);
        }

        debug!("Calling {:?}", function);

        match self.execute_block(&function.declaration.body, environment) {
            // An initializer yields the receiver no matter how the body
            // exited; `this` sits at distance 0 in its closure.
            Ok(()) if function.is_initializer => Ok(self.initializer_receiver(function)?),

            Ok(()) => Ok(Value::Nil),

            Err(Unwind::Return(_)) if function.is_initializer => {
                Ok(self.initializer_receiver(function)?)
            }

            Err(Unwind::Return(value)) => Ok(value),

            Err(err) => Err(err),
        }
    }

    fn initializer_receiver(&self, function: &LoxFunction) -> Result<Value, LoxError> {
        Environment::get_at(
            &function.closure,
            0,
            "this",
            function.declaration.name.line,
        )
    }

    fn look_up_variable(&self, name: &Token, id: ExprId) -> Result<Value, LoxError> {
        match self.locals.get(&id) {
            Some(&distance) => {
                Environment::get_at(&self.environment, distance, &name.lexeme, name.line)
            }

            None => self.globals.borrow().get(&name.lexeme, name.line),
        }
    }

    fn evaluate_literal(&self, token: &Token) -> Result<Value, LoxError> {
        match &token.token_type {
            TokenType::NUMBER(n) => Ok(Value::Number(*n)),

            TokenType::STRING(s) => Ok(Value::String(s.clone())),

            TokenType::TRUE => Ok(Value::Bool(true)),

            TokenType::FALSE => Ok(Value::Bool(false)),

            TokenType::NIL => Ok(Value::Nil),

            _ => Err(LoxError::runtime(token.line, "Invalid literal.")),
        }
    }

    fn evaluate_unary(&mut self, operator: &Token, right: &Expr) -> Result<Value, Unwind> {
        let value: Value = self.evaluate(right)?;

        match operator.token_type {
            TokenType::MINUS => match value {
                Value::Number(n) => Ok(Value::Number(-n)),

                _ => Err(LoxError::runtime(operator.line, "Operand must be a number.").into()),
            },

            TokenType::BANG => Ok(Value::Bool(!is_truthy(&value))),

            _ => Err(LoxError::runtime(operator.line, "Invalid unary operator.").into()),
        }
    }

    fn evaluate_binary(
        &mut self,
        left: &Expr,
        operator: &Token,
        right: &Expr,
    ) -> Result<Value, Unwind> {
        let left_value: Value = self.evaluate(left)?;
        let right_value: Value = self.evaluate(right)?;

        match operator.token_type {
            TokenType::PLUS => match (left_value, right_value) {
                (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),

                (Value::String(a), Value::String(b)) => Ok(Value::String(a + &b)),

                _ => Err(LoxError::runtime(
                    operator.line,
                    "Operands must be two numbers or two strings.",
                )
                .into()),
            },

            TokenType::MINUS => match (left_value, right_value) {
                (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a - b)),

                _ => Err(LoxError::runtime(operator.line, "Operands must be numbers.").into()),
            },

            TokenType::STAR => match (left_value, right_value) {
                (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a * b)),

                _ => Err(LoxError::runtime(operator.line, "Operands must be numbers.").into()),
            },

            TokenType::SLASH => match (left_value, right_value) {
                // IEEE-754 division; x/0 is inf, not an error.
                (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a / b)),

                _ => Err(LoxError::runtime(operator.line, "Operands must be numbers.").into()),
            },

            TokenType::EQUAL_EQUAL => Ok(Value::Bool(is_equal(&left_value, &right_value))),

            TokenType::BANG_EQUAL => Ok(Value::Bool(!is_equal(&left_value, &right_value))),

            TokenType::GREATER => match (left_value, right_value) {
                (Value::Number(a), Value::Number(b)) => Ok(Value::Bool(a > b)),

                _ => Err(LoxError::runtime(operator.line, "Operands must be numbers.").into()),
            },

            TokenType::GREATER_EQUAL => match (left_value, right_value) {
                (Value::Number(a), Value::Number(b)) => Ok(Value::Bool(a >= b)),

                _ => Err(LoxError::runtime(operator.line, "Operands must be numbers.").into()),
            },

            TokenType::LESS => match (left_value, right_value) {
                (Value::Number(a), Value::Number(b)) => Ok(Value::Bool(a < b)),

                _ => Err(LoxError::runtime(operator.line, "Operands must be numbers.").into()),
            },

            TokenType::LESS_EQUAL => match (left_value, right_value) {
                (Value::Number(a), Value::Number(b)) => Ok(Value::Bool(a <= b)),

                _ => Err(LoxError::runtime(operator.line, "Operands must be numbers.").into()),
            },

            _ => Err(LoxError::runtime(operator.line, "Invalid binary operator.").into()),
        }
    }
}

fn check_arity(expected: usize, got: usize, paren: &Token) -> Result<(), Unwind> {
    if expected != got {
        return Err(LoxError::runtime(
            paren.line,
            format!("Expected {} arguments but got {}.", expected, got),
        )
        .into());
    }

    Ok(())
}

/// `nil` and `false` are falsey; everything else, `0` and `""` included, is
/// truthy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Nil => false,

        Value::Bool(b) => *b,

        _ => true,
    }
}

fn is_equal(left: &Value, right: &Value) -> bool {
    left == right
}

fn clock_native(_args: &[Value]) -> Result<Value, String> {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| format!("Clock error: {}", e))?
        .as_secs_f64();

    Ok(Value::Number(timestamp))
}
