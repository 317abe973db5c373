use std::cell::RefCell;
use std::fmt::{Debug, Display};
use std::io;
use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::environment::Environment;
use crate::error::RuntimeError;
use crate::interpreter::{Interpreter, Interrupt};
use crate::literal::Literal;
use crate::object::{Callable, Object};
use crate::stmt::FunctionData;
use crate::token::Token;

/// A user-defined function: its declaration, the environment it closed
/// over, and whether it is a class initializer. A bound method is the same
/// thing with a `this` frame spliced into the closure.
#[derive(Clone)]
pub struct Function {
    pub declaration: Rc<FunctionData>,
    pub closure: Rc<RefCell<Environment>>,
    pub is_initializer: bool,
}

impl Function {
    pub fn new(declaration: Rc<FunctionData>, closure: Rc<RefCell<Environment>>, is_initializer: bool) -> Self {
        Function { declaration, closure, is_initializer }
    }

    /// Returns a copy of this function whose closure defines `this` as the
    /// given instance.
    pub fn bind(&self, instance: Object) -> Function {
        let mut environment = Environment::new(Some(Rc::clone(&self.closure)));
        environment.define("this", instance);

        Function {
            declaration: Rc::clone(&self.declaration),
            closure: Rc::new(RefCell::new(environment)),
            is_initializer: self.is_initializer,
        }
    }
}

impl Callable for Function {
    fn call(&self, interpreter: &mut Interpreter, arguments: Vec<Object>) -> Result<Object, RuntimeError> {
        let mut environment = Environment::new(Some(Rc::clone(&self.closure)));

        for (param, argument) in self.declaration.params.iter().zip(arguments) {
            environment.define(&param.lexeme, argument);
        }

        match interpreter.execute_block(&self.declaration.body, Rc::new(RefCell::new(environment))) {
            Ok(()) => (),
            Err(Interrupt::Return { value, .. }) => {
                if !self.is_initializer {
                    return Ok(value);
                }
            },
            Err(interrupt) => return Err(interrupt.into_runtime_error()),
        }

        // An initializer always hands back the instance, even on a bare
        // return or when the body falls off the end.
        if self.is_initializer {
            return self.closure.borrow().get_at(0, &Token::from("this"));
        }

        Ok(Object::from(Literal::Nil))
    }

    fn arity(&self) -> usize {
        self.declaration.params.len()
    }
}

impl Display for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<fn {}>", self.declaration.name.lexeme)
    }
}

impl Debug for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<fn {}>", self.declaration.name.lexeme)
    }
}

/// A function with a host-language body.
#[derive(Clone)]
pub struct NativeFunction {
    pub name: &'static str,
    pub arity: usize,
    pub function: fn(&mut Interpreter, Vec<Object>) -> Result<Object, RuntimeError>,
}

impl Callable for NativeFunction {
    fn call(&self, interpreter: &mut Interpreter, arguments: Vec<Object>) -> Result<Object, RuntimeError> {
        (self.function)(interpreter, arguments)
    }

    fn arity(&self) -> usize {
        self.arity
    }
}

impl NativeFunction {
    /// The native seed installed into the global environment.
    pub fn globals() -> Vec<NativeFunction> {
        vec![
            NativeFunction {
                name: "clock",
                arity: 0,
                function: |_, _| {
                    let now = SystemTime::now()
                        .duration_since(UNIX_EPOCH)
                        .expect("system clock to be set past the epoch");
                    Ok(Object::from(now.as_secs_f64()))
                },
            },
            NativeFunction {
                name: "input",
                arity: 0,
                function: |_, _| {
                    let mut input = String::new();
                    if io::stdin().read_line(&mut input).is_err() {
                        return Ok(Object::from(Literal::Nil));
                    }
                    input.truncate(input.trim_end_matches(['\r', '\n']).len());
                    Ok(Object::from(input))
                },
            },
        ]
    }
}

impl Display for NativeFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<native fn {}>", self.name)
    }
}

impl Debug for NativeFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<native fn {}>", self.name)
    }
}
