use std::collections::HashMap;
use std::mem;
use std::rc::Rc;

use crate::error::{Error, ResolveError};
use crate::expr::{self, Expr, ExprVisitor};
use crate::interpreter::Interpreter;
use crate::stmt::{self, FunctionData, Stmt, StmtVisitor};
use crate::token::Token;

enum FunctionType {
    None,
    Function,
    Initializer,
    Method,
}

enum ClassType {
    None,
    Class,
    Subclass,
}

/// Walks the tree before execution and records, for every variable
/// reference, how many scopes away its binding lives. Also the home of the
/// static errors: self-referential initializers, duplicate locals, and
/// `return`, `this`, `super`, `break` or `continue` in places they cannot
/// appear.
///
/// Globals are not tracked on the scope stack; a reference with no
/// recorded depth falls through to the global environment at runtime.
pub struct Resolver<'a, 'w> {
    interpreter: &'a mut Interpreter<'w>,
    scopes: Vec<HashMap<String, bool>>,
    current_function: FunctionType,
    current_class: ClassType,
    loop_depth: usize,
}

impl<'a, 'w> Resolver<'a, 'w> {
    pub fn new(interpreter: &'a mut Interpreter<'w>) -> Self {
        Resolver {
            interpreter,
            scopes: vec![],
            current_function: FunctionType::None,
            current_class: ClassType::None,
            loop_depth: 0,
        }
    }

    pub fn resolve(&mut self, statements: &[Stmt]) {
        for statement in statements {
            self.resolve_stmt(statement);
        }
    }

    fn resolve_stmt(&mut self, stmt: &Stmt) {
        stmt.accept(self);
    }

    fn resolve_expr(&mut self, expr: &Expr) {
        expr.accept(self);
    }

    fn begin_scope(&mut self) {
        self.scopes.push(HashMap::new());
    }

    fn end_scope(&mut self) {
        self.scopes.pop();
    }

    /// Marks a name as declared but not yet usable in the current scope.
    fn declare(&mut self, name: &Token) {
        if self.scopes.is_empty() {
            return;
        }

        let scope = self.scopes.last_mut().expect("scope stack to be non-empty");
        if scope.contains_key(&name.lexeme) {
            ResolveError {
                token: name.clone(),
                message: "Already a variable with this name in this scope.".to_string(),
            }.throw();
        }
        scope.insert(name.lexeme.to_owned(), false);
    }

    /// Marks a declared name as fully usable.
    fn define(&mut self, name: &Token) {
        if self.scopes.is_empty() {
            return;
        }

        self.scopes
            .last_mut()
            .expect("scope stack to be non-empty")
            .insert(name.lexeme.to_owned(), true);
    }

    /// Walks the scope stack from innermost outwards and records the
    /// distance of the first match. No match means the name is a global.
    fn resolve_local(&mut self, id: usize, name: &Token) {
        for (distance, scope) in self.scopes.iter().rev().enumerate() {
            if scope.contains_key(&name.lexeme) {
                self.interpreter.resolve(id, distance);
                return;
            }
        }
    }

    /// Resolves a function body in its own scope. A function boundary
    /// hides any enclosing loop, so a flow statement inside cannot target
    /// a loop outside.
    fn resolve_function(&mut self, function: &FunctionData, r#type: FunctionType) {
        let enclosing_function = mem::replace(&mut self.current_function, r#type);
        let enclosing_loop_depth = mem::replace(&mut self.loop_depth, 0);

        self.begin_scope();
        for param in &function.params {
            self.declare(param);
            self.define(param);
        }
        self.resolve(&function.body);
        self.end_scope();

        self.loop_depth = enclosing_loop_depth;
        self.current_function = enclosing_function;
    }
}

impl ExprVisitor<()> for Resolver<'_, '_> {
    fn visit_literal_expr(&mut self, _literal: &crate::literal::Literal) {}

    fn visit_grouping_expr(&mut self, grouping: &expr::GroupingData) {
        self.resolve_expr(&grouping.expr);
    }

    fn visit_unary_expr(&mut self, unary: &expr::UnaryData) {
        self.resolve_expr(&unary.expr);
    }

    fn visit_binary_expr(&mut self, binary: &expr::BinaryData) {
        self.resolve_expr(&binary.left);
        self.resolve_expr(&binary.right);
    }

    fn visit_logical_expr(&mut self, logical: &expr::LogicalData) {
        self.resolve_expr(&logical.left);
        self.resolve_expr(&logical.right);
    }

    fn visit_ternary_expr(&mut self, ternary: &expr::TernaryData) {
        self.resolve_expr(&ternary.condition);
        self.resolve_expr(&ternary.then_expr);
        self.resolve_expr(&ternary.else_expr);
    }

    fn visit_variable_expr(&mut self, variable: &expr::VariableData) {
        if let Some(scope) = self.scopes.last() {
            if scope.get(&variable.name.lexeme) == Some(&false) {
                ResolveError {
                    token: variable.name.clone(),
                    message: "Cannot read local variable in its own initializer.".to_string(),
                }.throw();
            }
        }

        self.resolve_local(variable.id, &variable.name);
    }

    fn visit_assign_expr(&mut self, assign: &expr::AssignData) {
        self.resolve_expr(&assign.value);
        self.resolve_local(assign.id, &assign.name);
    }

    fn visit_call_expr(&mut self, call: &expr::CallData) {
        self.resolve_expr(&call.callee);

        for argument in &call.arguments {
            self.resolve_expr(argument);
        }
    }

    fn visit_get_expr(&mut self, get: &expr::GetData) {
        self.resolve_expr(&get.object);
    }

    fn visit_set_expr(&mut self, set: &expr::SetData) {
        self.resolve_expr(&set.value);
        self.resolve_expr(&set.object);
    }

    fn visit_this_expr(&mut self, this: &expr::ThisData) {
        if let ClassType::None = self.current_class {
            ResolveError {
                token: this.keyword.clone(),
                message: "Can't use 'this' outside of a class.".to_string(),
            }.throw();

            return;
        }

        self.resolve_local(this.id, &this.keyword);
    }

    fn visit_super_expr(&mut self, super_expr: &expr::SuperData) {
        match self.current_class {
            ClassType::Subclass => (),
            ClassType::None => ResolveError {
                token: super_expr.keyword.clone(),
                message: "Can't use 'super' outside of a class.".to_string(),
            }.throw(),
            ClassType::Class => ResolveError {
                token: super_expr.keyword.clone(),
                message: "Can't use 'super' in a class with no superclass.".to_string(),
            }.throw(),
        }

        self.resolve_local(super_expr.id, &super_expr.keyword);
    }
}

impl StmtVisitor<()> for Resolver<'_, '_> {
    fn visit_expression_stmt(&mut self, stmt: &stmt::ExpressionData) {
        self.resolve_expr(&stmt.expr);
    }

    fn visit_print_stmt(&mut self, stmt: &stmt::PrintData) {
        self.resolve_expr(&stmt.expr);
    }

    fn visit_var_stmt(&mut self, stmt: &stmt::VarData) {
        self.declare(&stmt.name);
        if let Some(initializer) = &stmt.initializer {
            self.resolve_expr(initializer);
        }
        self.define(&stmt.name);
    }

    fn visit_block_stmt(&mut self, stmt: &stmt::BlockData) {
        self.begin_scope();
        self.resolve(&stmt.statements);
        self.end_scope();
    }

    fn visit_if_stmt(&mut self, stmt: &stmt::IfData) {
        self.resolve_expr(&stmt.condition);
        self.resolve_stmt(&stmt.then_branch);
        if let Some(else_branch) = &stmt.else_branch {
            self.resolve_stmt(else_branch);
        }
    }

    fn visit_while_stmt(&mut self, stmt: &stmt::WhileData) {
        self.resolve_expr(&stmt.condition);

        self.loop_depth += 1;
        self.resolve_stmt(&stmt.body);
        self.loop_depth -= 1;
    }

    fn visit_flow_stmt(&mut self, stmt: &stmt::FlowData) {
        if self.loop_depth == 0 {
            ResolveError {
                token: stmt.keyword.clone(),
                message: format!("Can't use '{}' outside of a loop.", stmt.keyword.lexeme),
            }.throw();
        }
    }

    fn visit_function_stmt(&mut self, stmt: &Rc<FunctionData>) {
        self.declare(&stmt.name);
        self.define(&stmt.name);

        self.resolve_function(stmt, FunctionType::Function);
    }

    fn visit_return_stmt(&mut self, stmt: &stmt::ReturnData) {
        if let FunctionType::None = self.current_function {
            ResolveError {
                token: stmt.keyword.clone(),
                message: "Can't return from top-level code.".to_string(),
            }.throw();
        }

        if let Some(value) = &stmt.value {
            if let FunctionType::Initializer = self.current_function {
                ResolveError {
                    token: stmt.keyword.clone(),
                    message: "Can't return a value from an initializer.".to_string(),
                }.throw();
                return;
            }

            self.resolve_expr(value);
        }
    }

    fn visit_class_stmt(&mut self, stmt: &stmt::ClassData) {
        let enclosing_class = mem::replace(&mut self.current_class, ClassType::Class);

        self.declare(&stmt.name);
        self.define(&stmt.name);

        if let Some(superclass) = &stmt.superclass {
            if stmt.name.lexeme == superclass.name.lexeme {
                ResolveError {
                    token: superclass.name.clone(),
                    message: "A class can't inherit from itself.".to_string(),
                }.throw();
            }

            self.current_class = ClassType::Subclass;
            self.visit_variable_expr(superclass);

            // Methods of a subclass see `super` one scope outside `this`.
            self.begin_scope();
            self.scopes
                .last_mut()
                .expect("scope stack to be non-empty")
                .insert("super".to_string(), true);
        }

        self.begin_scope();
        self.scopes
            .last_mut()
            .expect("scope stack to be non-empty")
            .insert("this".to_string(), true);

        for method in &stmt.methods {
            let declaration = if method.name.lexeme == "init" {
                FunctionType::Initializer
            } else {
                FunctionType::Method
            };
            self.resolve_function(method, declaration);
        }

        self.end_scope();

        if stmt.superclass.is_some() {
            self.end_scope();
        }

        self.current_class = enclosing_class;
    }
}
