use std::cell::RefCell;
use std::collections::HashMap;
use std::io::Write;
use std::mem;
use std::rc::Rc;

use crate::class::{Class, Instance};
use crate::environment::Environment;
use crate::error::{Error, RuntimeError};
use crate::expr::{self, Expr, ExprVisitor};
use crate::function::{Function, NativeFunction};
use crate::literal::Literal;
use crate::object::{Callable, Object};
use crate::stmt::{self, FunctionData, Stmt, StmtVisitor};
use crate::token::{Token, Type};

type EvalResult = Result<Object, RuntimeError>;
type ExecResult = Result<(), Interrupt>;

/// Non-local control flow unwinding through statement execution.
///
/// `Return` unwinds to the enclosing call, `Break` and `Continue` to the
/// enclosing loop. Runtime errors ride the same channel so every unwind
/// path restores the environment the same way.
#[derive(Debug)]
pub enum Interrupt {
    Return { keyword: Token, value: Object },
    Break(Token),
    Continue(Token),
    Error(RuntimeError),
}

impl Interrupt {
    /// A `return` escaping its call frame or a flow statement escaping its
    /// loop becomes a runtime error. The resolver rejects both statically,
    /// so this is the backstop for an invariant slip.
    pub fn into_runtime_error(self) -> RuntimeError {
        match self {
            Interrupt::Error(error) => error,
            Interrupt::Return { keyword, .. } => RuntimeError {
                token: keyword,
                message: "Can't return from top-level code.".to_string(),
            },
            Interrupt::Break(keyword) | Interrupt::Continue(keyword) => RuntimeError {
                message: format!("Can't use '{}' outside of a loop.", keyword.lexeme),
                token: keyword,
            },
        }
    }
}

impl From<RuntimeError> for Interrupt {
    fn from(error: RuntimeError) -> Self {
        Interrupt::Error(error)
    }
}

/// Executes resolved statements against the environment chain.
pub struct Interpreter<'a> {
    pub globals: Rc<RefCell<Environment>>,
    environment: Rc<RefCell<Environment>>,
    locals: HashMap<usize, usize>,
    pub out: &'a mut dyn Write,
    pub repl: bool,
}

impl<'a> Interpreter<'a> {
    pub fn new(out: &'a mut dyn Write) -> Self {
        let globals = Rc::new(RefCell::new(Environment::default()));

        for native in NativeFunction::globals() {
            let name = native.name;
            globals.borrow_mut().define(name, Object::from(native));
        }

        Interpreter {
            environment: Rc::clone(&globals),
            globals,
            locals: HashMap::new(),
            out,
            repl: false,
        }
    }

    /// Executes the statements in order. The first runtime error aborts
    /// the program.
    pub fn interpret(&mut self, statements: &[Stmt]) {
        for statement in statements {
            if let Err(interrupt) = self.execute(statement) {
                interrupt.into_runtime_error().throw();
                return;
            }
        }
    }

    /// Records the resolver's scope distance for a variable reference.
    pub fn resolve(&mut self, id: usize, depth: usize) {
        self.locals.insert(id, depth);
    }

    fn execute(&mut self, stmt: &Stmt) -> ExecResult {
        stmt.accept(self)
    }

    fn evaluate(&mut self, expr: &Expr) -> EvalResult {
        expr.accept(self)
    }

    /// Executes statements in the given environment, restoring the
    /// previous one on every exit path.
    pub fn execute_block(&mut self, statements: &[Stmt], environment: Rc<RefCell<Environment>>) -> ExecResult {
        let previous = mem::replace(&mut self.environment, environment);

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

    /// Fetches a variable through its recorded depth, or from globals when
    /// the resolver left it untouched.
    fn look_up_variable(&self, id: usize, name: &Token) -> EvalResult {
        match self.locals.get(&id) {
            Some(&distance) => self.environment.borrow().get_at(distance, name),
            None => self.globals.borrow().get(name),
        }
    }
}

impl ExprVisitor<EvalResult> for Interpreter<'_> {
    fn visit_literal_expr(&mut self, literal: &Literal) -> EvalResult {
        Ok(Object::from(literal.clone()))
    }

    fn visit_grouping_expr(&mut self, grouping: &expr::GroupingData) -> EvalResult {
        self.evaluate(&grouping.expr)
    }

    fn visit_unary_expr(&mut self, unary: &expr::UnaryData) -> EvalResult {
        let right = self.evaluate(&unary.expr)?;

        match unary.operator.r#type {
            Type::Minus => (-right).ok_or_else(|| RuntimeError {
                token: unary.operator.clone(),
                message: "Operand must be a number.".to_string(),
            }),
            Type::Bang => Ok(!right),
            _ => unreachable!("unary operator to be '-' or '!'"),
        }
    }

    fn visit_binary_expr(&mut self, binary: &expr::BinaryData) -> EvalResult {
        let left = self.evaluate(&binary.left)?;
        let right = self.evaluate(&binary.right)?;

        let operator = &binary.operator;
        match operator.r#type {
            Type::Greater | Type::GreaterEqual | Type::Less | Type::LessEqual => {
                match (&left, &right) {
                    (Object::Literal(Literal::Number(l)), Object::Literal(Literal::Number(r))) => {
                        let result = match operator.r#type {
                            Type::Greater => l > r,
                            Type::GreaterEqual => l >= r,
                            Type::Less => l < r,
                            Type::LessEqual => l <= r,
                            _ => unreachable!(),
                        };
                        Ok(Object::from(result))
                    },
                    _ => Err(RuntimeError {
                        token: operator.clone(),
                        message: "Operands must be numbers.".to_string(),
                    }),
                }
            },
            Type::EqualEqual => Ok(Object::from(left == right)),
            Type::BangEqual => Ok(Object::from(left != right)),
            Type::Plus => (left + right).ok_or_else(|| RuntimeError {
                token: operator.clone(),
                message: "Operands must be two numbers or two strings.".to_string(),
            }),
            Type::Minus => (left - right).ok_or_else(|| RuntimeError {
                token: operator.clone(),
                message: "Operands must be numbers.".to_string(),
            }),
            Type::Star => (left * right).ok_or_else(|| RuntimeError {
                token: operator.clone(),
                message: "Operands must be numbers.".to_string(),
            }),
            Type::Slash => (left / right).ok_or_else(|| RuntimeError {
                token: operator.clone(),
                message: "Operands must be numbers.".to_string(),
            }),
            _ => unreachable!("binary operator to be arithmetic, comparison or equality"),
        }
    }

    fn visit_logical_expr(&mut self, logical: &expr::LogicalData) -> EvalResult {
        let left = self.evaluate(&logical.left)?;

        match logical.operator.r#type {
            Type::Or if left.is_truthy() => Ok(left),
            Type::And if !left.is_truthy() => Ok(left),
            _ => self.evaluate(&logical.right),
        }
    }

    fn visit_ternary_expr(&mut self, ternary: &expr::TernaryData) -> EvalResult {
        let condition = self.evaluate(&ternary.condition)?;

        if condition.is_truthy() {
            self.evaluate(&ternary.then_expr)
        } else {
            self.evaluate(&ternary.else_expr)
        }
    }

    fn visit_variable_expr(&mut self, variable: &expr::VariableData) -> EvalResult {
        self.look_up_variable(variable.id, &variable.name)
    }

    fn visit_assign_expr(&mut self, assign: &expr::AssignData) -> EvalResult {
        let value = self.evaluate(&assign.value)?;

        match self.locals.get(&assign.id) {
            Some(&distance) => {
                self.environment.borrow_mut().assign_at(distance, &assign.name, value.clone());
            },
            None => {
                self.globals.borrow_mut().assign(&assign.name, value.clone())?;
            },
        }

        Ok(value)
    }

    fn visit_call_expr(&mut self, call: &expr::CallData) -> EvalResult {
        let callee = self.evaluate(&call.callee)?;

        let mut arguments = Vec::with_capacity(call.arguments.len());
        for argument in &call.arguments {
            arguments.push(self.evaluate(argument)?);
        }

        let callable: &dyn Callable = match &callee {
            Object::Function(function) => function.as_ref(),
            Object::NativeFunction(native) => native,
            Object::Class(class) => class,
            _ => return Err(RuntimeError {
                token: call.paren.clone(),
                message: "Can only call functions and classes.".to_string(),
            }),
        };

        if arguments.len() != callable.arity() {
            return Err(RuntimeError {
                token: call.paren.clone(),
                message: format!("Expected {} arguments but got {}.", callable.arity(), arguments.len()),
            });
        }

        callable.call(self, arguments)
    }

    fn visit_get_expr(&mut self, get: &expr::GetData) -> EvalResult {
        let object = self.evaluate(&get.object)?;

        match &object {
            Object::Instance(instance) => Instance::get(instance, &get.name),
            _ => Err(RuntimeError {
                token: get.name.clone(),
                message: "Only instances have properties.".to_string(),
            }),
        }
    }

    fn visit_set_expr(&mut self, set: &expr::SetData) -> EvalResult {
        let object = self.evaluate(&set.object)?;

        let Object::Instance(instance) = object else {
            return Err(RuntimeError {
                token: set.name.clone(),
                message: "Only instances have fields.".to_string(),
            });
        };

        let value = self.evaluate(&set.value)?;
        instance.borrow_mut().set(&set.name, value.clone());

        Ok(value)
    }

    fn visit_this_expr(&mut self, this: &expr::ThisData) -> EvalResult {
        self.look_up_variable(this.id, &this.keyword)
    }

    fn visit_super_expr(&mut self, super_expr: &expr::SuperData) -> EvalResult {
        let &distance = self.locals.get(&super_expr.id)
            .expect("'super' to have been resolved");

        let superclass = self.environment.borrow().get_at(distance, &super_expr.keyword)?;
        let instance = self.environment.borrow().get_at(distance - 1, &Token::from("this"))?;

        let Object::Class(superclass) = superclass else {
            unreachable!("'super' to resolve to a class");
        };

        let method = superclass.borrow().find_method(&super_expr.method.lexeme);
        match method {
            Some(method) => Ok(Object::from(method.bind(instance))),
            None => Err(RuntimeError {
                token: super_expr.method.clone(),
                message: format!("Undefined property '{}'.", super_expr.method.lexeme),
            }),
        }
    }
}

impl StmtVisitor<ExecResult> for Interpreter<'_> {
    fn visit_expression_stmt(&mut self, stmt: &stmt::ExpressionData) -> ExecResult {
        let value = self.evaluate(&stmt.expr)?;

        // The prompt echoes the value of a bare expression statement.
        if self.repl {
            writeln!(self.out, "{value}").expect("write to interpreter output");
        }

        Ok(())
    }

    fn visit_print_stmt(&mut self, stmt: &stmt::PrintData) -> ExecResult {
        let value = self.evaluate(&stmt.expr)?;
        writeln!(self.out, "{value}").expect("write to interpreter output");

        Ok(())
    }

    fn visit_var_stmt(&mut self, stmt: &stmt::VarData) -> ExecResult {
        let value = match &stmt.initializer {
            Some(initializer) => self.evaluate(initializer)?,
            None => Object::from(Literal::Nil),
        };

        self.environment.borrow_mut().define(&stmt.name.lexeme, value);
        Ok(())
    }

    fn visit_block_stmt(&mut self, stmt: &stmt::BlockData) -> ExecResult {
        let environment = Environment::new(Some(Rc::clone(&self.environment)));
        self.execute_block(&stmt.statements, Rc::new(RefCell::new(environment)))
    }

    fn visit_if_stmt(&mut self, stmt: &stmt::IfData) -> ExecResult {
        if self.evaluate(&stmt.condition)?.is_truthy() {
            self.execute(&stmt.then_branch)
        } else if let Some(else_branch) = &stmt.else_branch {
            self.execute(else_branch)
        } else {
            Ok(())
        }
    }

    fn visit_while_stmt(&mut self, stmt: &stmt::WhileData) -> ExecResult {
        while self.evaluate(&stmt.condition)?.is_truthy() {
            match self.execute(&stmt.body) {
                Err(Interrupt::Break(_)) => break,
                Err(Interrupt::Continue(_)) => continue,
                other => other?,
            }
        }

        Ok(())
    }

    fn visit_flow_stmt(&mut self, stmt: &stmt::FlowData) -> ExecResult {
        match stmt.keyword.r#type {
            Type::Break => Err(Interrupt::Break(stmt.keyword.clone())),
            Type::Continue => Err(Interrupt::Continue(stmt.keyword.clone())),
            _ => unreachable!("flow keyword to be 'break' or 'continue'"),
        }
    }

    fn visit_function_stmt(&mut self, stmt: &Rc<FunctionData>) -> ExecResult {
        let function = Function::new(Rc::clone(stmt), Rc::clone(&self.environment), false);
        self.environment.borrow_mut().define(&stmt.name.lexeme, Object::from(function));

        Ok(())
    }

    fn visit_return_stmt(&mut self, stmt: &stmt::ReturnData) -> ExecResult {
        let value = match &stmt.value {
            Some(value) => self.evaluate(value)?,
            None => Object::from(Literal::Nil),
        };

        Err(Interrupt::Return { keyword: stmt.keyword.clone(), value })
    }

    fn visit_class_stmt(&mut self, stmt: &stmt::ClassData) -> ExecResult {
        self.environment.borrow_mut().define(&stmt.name.lexeme, Object::from(Literal::Nil));

        let superclass = match &stmt.superclass {
            Some(variable) => match self.visit_variable_expr(variable)? {
                Object::Class(class) => Some(class),
                _ => return Err(RuntimeError {
                    token: variable.name.clone(),
                    message: "Superclass must be a class.".to_string(),
                }.into()),
            },
            None => None,
        };

        // Methods of a subclass close over an extra scope holding `super`.
        let enclosing = Rc::clone(&self.environment);
        if let Some(superclass) = &superclass {
            let mut environment = Environment::new(Some(Rc::clone(&self.environment)));
            environment.define("super", Object::Class(Rc::clone(superclass)));
            self.environment = Rc::new(RefCell::new(environment));
        }

        let mut methods = HashMap::new();
        for method in &stmt.methods {
            let is_initializer = method.name.lexeme == "init";
            let function = Function::new(Rc::clone(method), Rc::clone(&self.environment), is_initializer);
            methods.insert(method.name.lexeme.clone(), function);
        }

        let class = Class::new(stmt.name.lexeme.clone(), superclass, methods);

        self.environment = enclosing;
        self.environment.borrow_mut().assign(&stmt.name, Object::from(Rc::new(RefCell::new(class))))?;

        Ok(())
    }
}
