use crate::expr::*;
use crate::literal::Literal;
use crate::stmt::*;
use std::rc::Rc;

/// Returns a string representation of the expression in parentheses.
macro_rules! parenthesize {
    ( $self:ident, $name:expr, $( $x:expr ),+ ) => {
        {
            let mut string = String::new();
            string += "(";
            string += $name;
            $(
                string += " ";
                string += &$x.accept($self);
            )*
            string += ")";

            string
        }
    };
}

/// Prints the tree in parenthesized prefix form, for the `parse` command
/// and for debugging. Literals keep the `.0` on integral numbers so the
/// printed tree shows what the scanner actually produced.
pub struct ASTPrinter;

impl ASTPrinter {
    /// Prints the expression using the visitor pattern.
    pub fn print(&mut self, expr: &Expr) -> String {
        expr.accept(self)
    }

    /// Prints the statement using the visitor pattern.
    pub fn print_stmt(&mut self, stmt: &Stmt) -> String {
        stmt.accept(self)
    }
}

impl ExprVisitor<String> for ASTPrinter {
    fn visit_literal_expr(&mut self, literal: &Literal) -> String {
        literal.token_form()
    }

    fn visit_grouping_expr(&mut self, grouping: &GroupingData) -> String {
        parenthesize!(self, "group", grouping.expr)
    }

    fn visit_unary_expr(&mut self, unary: &UnaryData) -> String {
        parenthesize!(self, &unary.operator.lexeme, unary.expr)
    }

    fn visit_binary_expr(&mut self, binary: &BinaryData) -> String {
        parenthesize!(self, &binary.operator.lexeme, binary.left, binary.right)
    }

    fn visit_logical_expr(&mut self, logical: &LogicalData) -> String {
        parenthesize!(self, &logical.operator.lexeme, logical.left, logical.right)
    }

    fn visit_ternary_expr(&mut self, ternary: &TernaryData) -> String {
        parenthesize!(self, "?", ternary.condition, ternary.then_expr, ternary.else_expr)
    }

    fn visit_variable_expr(&mut self, variable: &VariableData) -> String {
        variable.name.lexeme.clone()
    }

    fn visit_assign_expr(&mut self, assign: &AssignData) -> String {
        parenthesize!(self, format!("= {}", &assign.name.lexeme).as_str(), assign.value)
    }

    fn visit_call_expr(&mut self, call: &CallData) -> String {
        let mut string = String::new();
        string += &call.callee.accept(self);
        string += "(";
        for arg in &call.arguments {
            string += &arg.accept(self);
            string += " ";
        }
        string = string.trim_end().to_string();
        string += ")";
        string
    }

    fn visit_get_expr(&mut self, get: &GetData) -> String {
        format!("(. {} {})", get.object.accept(self), get.name.lexeme)
    }

    fn visit_set_expr(&mut self, set: &SetData) -> String {
        format!(
            "(= (. {} {}) {})",
            set.object.accept(self),
            set.name.lexeme,
            set.value.accept(self)
        )
    }

    fn visit_this_expr(&mut self, _this: &ThisData) -> String {
        String::from("this")
    }

    fn visit_super_expr(&mut self, super_expr: &SuperData) -> String {
        format!("(super {})", super_expr.method.lexeme)
    }
}

impl StmtVisitor<String> for ASTPrinter {
    fn visit_expression_stmt(&mut self, stmt: &ExpressionData) -> String {
        parenthesize!(self, "expr", stmt.expr)
    }

    fn visit_print_stmt(&mut self, stmt: &PrintData) -> String {
        parenthesize!(self, "print", stmt.expr)
    }

    fn visit_var_stmt(&mut self, stmt: &VarData) -> String {
        let mut string = String::new();
        string += "(var ";
        string += &stmt.name.lexeme;
        if let Some(initializer) = &stmt.initializer {
            string += " = ";
            string += &initializer.accept(self);
        }
        string += ")";

        string
    }

    fn visit_block_stmt(&mut self, stmt: &BlockData) -> String {
        let mut string = String::new();
        string += "{";
        for stmt in &stmt.statements {
            string += " ";
            string += &stmt.accept(self);
        }
        string += " }";

        string
    }

    fn visit_if_stmt(&mut self, stmt: &IfData) -> String {
        let mut string = String::new();
        string += "(if ";
        string += &stmt.condition.accept(self);
        string += " ";
        string += &stmt.then_branch.accept(self);
        if let Some(else_branch) = &stmt.else_branch {
            string += " else ";
            string += &else_branch.accept(self);
        }
        string += ")";

        string
    }

    fn visit_while_stmt(&mut self, stmt: &WhileData) -> String {
        parenthesize!(self, "while", stmt.condition, stmt.body)
    }

    fn visit_flow_stmt(&mut self, stmt: &FlowData) -> String {
        format!("({})", stmt.keyword.lexeme)
    }

    fn visit_function_stmt(&mut self, stmt: &Rc<FunctionData>) -> String {
        let mut string = String::new();
        string += "(fun ";
        string += &stmt.name.lexeme;
        string += "(";
        for param in &stmt.params {
            string += &param.lexeme;
            string += " ";
        }
        string = string.trim_end().to_string();
        string += ") { ";
        string += &stmt.body.iter().map(|stmt| stmt.accept(self)).collect::<Vec<String>>().join(" ");
        string += " })";

        string
    }

    fn visit_return_stmt(&mut self, stmt: &ReturnData) -> String {
        match &stmt.value {
            Some(value) => parenthesize!(self, "return", value),
            None => String::from("(return)"),
        }
    }

    fn visit_class_stmt(&mut self, stmt: &ClassData) -> String {
        let mut string = String::new();
        string += "(class ";
        string += &stmt.name.lexeme;
        if let Some(superclass) = &stmt.superclass {
            string += " < ";
            string += &superclass.name.lexeme;
        }
        for method in &stmt.methods {
            string += " ";
            string += &self.visit_function_stmt(method);
        }
        string += ")";

        string
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::parser::Parser;
    use crate::scanner::Scanner;

    fn print(source: &str) -> String {
        let expr = Parser::new(Scanner::new(source).scan_tokens())
            .parse_expression()
            .expect("expression to parse");
        ASTPrinter.print(&expr)
    }

    #[test]
    fn prints_nested_expression() {
        assert_eq!(print("-123 * (45.67)"), "(* (- 123.0) (group 45.67))");
    }

    #[test]
    fn prints_integral_numbers_with_fraction() {
        assert_eq!(print("1 + 2"), "(+ 1.0 2.0)");
    }

    #[test]
    fn prints_ternary() {
        assert_eq!(print("true ? 1 : 2"), "(? true 1.0 2.0)");
    }

    #[test]
    fn prints_logical_and_variables() {
        assert_eq!(print("a or b and c"), "(or a (and b c))");
    }

    #[test]
    fn prints_call_and_property_access() {
        assert_eq!(print("foo(1, bar.baz)"), "foo(1.0 (. bar baz))");
    }

    #[test]
    fn prints_assignment() {
        assert_eq!(print("a = nil"), "(= a nil)");
    }

    #[test]
    fn prints_statements() {
        let statements = Parser::new(Scanner::new("var a = 1; { print a; }").scan_tokens()).parse();
        let printed: Vec<String> = statements.iter().map(|stmt| ASTPrinter.print_stmt(stmt)).collect();

        assert_eq!(printed, vec!["(var a = 1.0)", "{ (print a) }"]);
    }
}
