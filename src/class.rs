use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::rc::Rc;

use crate::error::RuntimeError;
use crate::function::Function;
use crate::interpreter::Interpreter;
use crate::object::{Callable, Object};
use crate::token::Token;

#[derive(Clone)]
pub struct Class {
    pub name: String,
    pub superclass: Option<Rc<RefCell<Class>>>,
    pub methods: HashMap<String, Function>,
}

impl Class {
    pub fn new(
        name: String,
        superclass: Option<Rc<RefCell<Class>>>,
        methods: HashMap<String, Function>,
    ) -> Self {
        Class { name, superclass, methods }
    }

    /// Looks up a method on this class or any of its ancestors.
    pub fn find_method(&self, name: &str) -> Option<Function> {
        if let Some(method) = self.methods.get(name) {
            return Some(method.clone());
        }

        self.superclass.as_ref().and_then(|superclass| superclass.borrow().find_method(name))
    }
}

impl Debug for Class {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<class {}>", self.name)
    }
}

impl Display for Class {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<class {}>", self.name)
    }
}

/// Calling a class constructs an instance. The shared handle implements
/// the callable protocol so the new instance can refer back to its class.
impl Callable for Rc<RefCell<Class>> {
    fn arity(&self) -> usize {
        match self.borrow().find_method("init") {
            Some(initializer) => initializer.arity(),
            None => 0,
        }
    }

    fn call(&self, interpreter: &mut Interpreter, arguments: Vec<Object>) -> Result<Object, RuntimeError> {
        let instance = Object::from(Instance::from(self));

        if let Some(initializer) = self.borrow().find_method("init") {
            initializer.bind(instance.clone()).call(interpreter, arguments)?;
        }

        Ok(instance)
    }
}

#[derive(Clone)]
pub struct Instance {
    pub class: Rc<RefCell<Class>>,
    pub fields: HashMap<String, Object>,
}

impl Instance {
    /// Property lookup. Fields shadow methods; a method comes back bound
    /// to this instance.
    pub fn get(instance: &Rc<RefCell<Instance>>, name: &Token) -> Result<Object, RuntimeError> {
        if let Some(field) = instance.borrow().fields.get(&name.lexeme) {
            return Ok(field.clone());
        }

        let method = instance.borrow().class.borrow().find_method(&name.lexeme);
        match method {
            Some(method) => Ok(Object::from(method.bind(Object::from(Rc::clone(instance))))),
            None => Err(RuntimeError {
                token: name.clone(),
                message: format!("Undefined property '{}'.", name.lexeme),
            }),
        }
    }

    /// Writes a field, overwriting any prior value.
    pub fn set(&mut self, name: &Token, value: Object) {
        self.fields.insert(name.lexeme.clone(), value);
    }
}

impl From<&Rc<RefCell<Class>>> for Instance {
    fn from(value: &Rc<RefCell<Class>>) -> Self {
        Instance { class: Rc::clone(value), fields: HashMap::new() }
    }
}

impl Debug for Instance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<instance {}>", self.class.borrow().name)
    }
}

impl Display for Instance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<instance {}>", self.class.borrow().name)
    }
}
