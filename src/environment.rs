use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::error::{LoxError, Result};
use crate::value::Value;

/// One scope's name-to-value mapping plus a link to its enclosing scope.
///
/// Environments form a singly-linked acyclic chain rooted at the globals.
/// They are shared behind `Rc<RefCell<..>>` because closures keep their
/// declaration environment alive past the block that created it.
pub struct Environment {
    values: HashMap<String, Value>,
    enclosing: Option<Rc<RefCell<Environment>>>,
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            values: HashMap::new(),
            enclosing: None,
        }
    }

    pub fn with_enclosing(enclosing: Rc<RefCell<Environment>>) -> Self {
        Environment {
            values: HashMap::new(),
            enclosing: Some(enclosing),
        }
    }

    pub fn define(&mut self, name: &str, value: Value) {
        self.values.insert(name.to_string(), value);
    }

    /// Chain-walking read, used for names the resolver left unresolved
    /// (globals).
    pub fn get(&self, name: &str, line: usize) -> Result<Value> {
        if let Some(value) = self.values.get(name) {
            Ok(value.clone())
        } else if let Some(enclosing) = &self.enclosing {
            enclosing.borrow().get(name, line)
        } else {
            Err(LoxError::runtime(
                line,
                format!("Undefined variable '{}'.", name),
            ))
        }
    }

    /// Chain-walking write.
    pub fn assign(&mut self, name: &str, value: Value, line: usize) -> Result<()> {
        if self.values.contains_key(name) {
            self.values.insert(name.to_string(), value);
            Ok(())
        } else if let Some(enclosing) = &self.enclosing {
            enclosing.borrow_mut().assign(name, value, line)
        } else {
            Err(LoxError::runtime(
                line,
                format!("Undefined variable '{}'.", name),
            ))
        }
    }

    /// Read at exactly `distance` hops up the chain, with no further
    /// traversal past that scope.
    pub fn get_at(
        env: &Rc<RefCell<Environment>>,
        distance: usize,
        name: &str,
        line: usize,
    ) -> Result<Value> {
        let target = Environment::ancestor(env, distance, name, line)?;
        let scope = target.borrow();

        scope.values.get(name).cloned().ok_or_else(|| {
            LoxError::runtime(line, format!("Undefined variable '{}'.", name))
        })
    }

    /// Write at exactly `distance` hops up the chain.
    pub fn assign_at(
        env: &Rc<RefCell<Environment>>,
        distance: usize,
        name: &str,
        value: Value,
        line: usize,
    ) -> Result<()> {
        let target = Environment::ancestor(env, distance, name, line)?;

        target.borrow_mut().values.insert(name.to_string(), value);

        Ok(())
    }

    fn ancestor(
        env: &Rc<RefCell<Environment>>,
        distance: usize,
        name: &str,
        line: usize,
    ) -> Result<Rc<RefCell<Environment>>> {
        let mut current = Rc::clone(env);

        for _ in 0..distance {
            // The resolver guarantees the chain is deep enough; a short
            // chain means the binding is gone.
            let next = current.borrow().enclosing.clone();

            match next {
                Some(enclosing) => current = enclosing,
                None => {
                    return Err(LoxError::runtime(
                        line,
                        format!("Undefined variable '{}'.", name),
                    ));
                }
            }
        }

        Ok(current)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::new()
    }
}

impl fmt::Debug for Environment {
    /// Shallow view: local names only.  Walking `enclosing` here could chase
    /// a closure cycle.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("names", &self.values.keys().collect::<Vec<_>>())
            .field("has_enclosing", &self.enclosing.is_some())
            .finish()
    }
}
