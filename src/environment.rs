use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::RuntimeError;
use crate::object::Object;
use crate::token::Token;

/// A scope: a mutable name-to-value mapping plus an optional enclosing
/// environment. The chain of environments mirrors the lexical nesting of
/// the program at runtime.
///
/// Environments are shared behind `Rc<RefCell<...>>` because closures and
/// bound methods keep their defining environment alive past its textual
/// scope. Closures can form reference cycles through the chain; those are
/// tolerated and live for the rest of the interpreter run.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    pub enclosing: Option<Rc<RefCell<Environment>>>,
    pub variables: HashMap<String, Object>,
}

impl Environment {
    pub fn new(enclosing: Option<Rc<RefCell<Environment>>>) -> Self {
        Environment {
            enclosing,
            variables: HashMap::new(),
        }
    }

    /// Defines a new variable in this scope, overwriting any previous
    /// definition of the same name.
    pub fn define(&mut self, name: &str, value: Object) {
        self.variables.insert(name.to_string(), value);
    }

    /// Walks `distance` scopes up the chain. The resolver guarantees the
    /// ancestor exists; a missing one is an invariant violation.
    fn ancestor(&self, distance: usize) -> Rc<RefCell<Environment>> {
        let mut environment = Rc::clone(self.enclosing.as_ref()
            .unwrap_or_else(|| panic!("enclosing environment to exist at depth 1")));

        for depth in 1..distance {
            let enclosing = Rc::clone(environment.borrow().enclosing.as_ref()
                .unwrap_or_else(|| panic!("enclosing environment to exist at depth {}", depth + 1)));
            environment = enclosing;
        }

        environment
    }

    /// Assigns to an existing variable, searching the chain outwards.
    pub fn assign(&mut self, name: &Token, value: Object) -> Result<(), RuntimeError> {
        if self.variables.contains_key(&name.lexeme) {
            self.variables.insert(name.lexeme.clone(), value);
            return Ok(());
        }

        if let Some(enclosing) = &self.enclosing {
            return enclosing.borrow_mut().assign(name, value);
        }

        Err(RuntimeError {
            token: name.clone(),
            message: format!("Undefined variable '{}'.", name.lexeme),
        })
    }

    /// Assigns to a variable exactly `distance` scopes up.
    pub fn assign_at(&mut self, distance: usize, name: &Token, value: Object) {
        if distance > 0 {
            self.ancestor(distance).borrow_mut().variables.insert(name.lexeme.clone(), value);
        } else {
            self.variables.insert(name.lexeme.clone(), value);
        }
    }

    /// Looks a variable up, searching the chain outwards.
    pub fn get(&self, name: &Token) -> Result<Object, RuntimeError> {
        if let Some(variable) = self.variables.get(&name.lexeme) {
            return Ok(variable.clone());
        }

        if let Some(enclosing) = &self.enclosing {
            return enclosing.borrow().get(name);
        }

        Err(RuntimeError {
            token: name.clone(),
            message: format!("Undefined variable '{}'.", name.lexeme),
        })
    }

    /// Looks a variable up exactly `distance` scopes up.
    pub fn get_at(&self, distance: usize, name: &Token) -> Result<Object, RuntimeError> {
        let variable = if distance > 0 {
            self.ancestor(distance).borrow().variables.get(&name.lexeme).cloned()
        } else {
            self.variables.get(&name.lexeme).cloned()
        };

        variable.ok_or_else(|| RuntimeError {
            token: name.clone(),
            message: format!("Undefined variable '{}'.", name.lexeme),
        })
    }
}
