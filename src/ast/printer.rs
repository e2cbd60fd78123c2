use crate::{
    ast::{
        BinaryOperator, Expr, LiteralValue, Program, Statement, UnaryOperator,
        visit::{ExprVisitor, StmtVisitor},
    },
    util::num::format_fixed,
};

/// Renders a literal the way both printers show it: numbers in fixed-point,
/// strings as their raw contents.
fn literal_text(value: &LiteralValue) -> String {
    match value {
        LiteralValue::Number(n) => format_fixed(*n),
        LiteralValue::String(s) => s.clone(),
        LiteralValue::Bool(b) => b.to_string(),
        LiteralValue::Nil => "nil".to_string(),
    }
}

/// Prints trees in a fully parenthesized prefix form.
///
/// # Example
/// ```
/// use treelox::{ast::printer::AstPrinter, parse_source};
///
/// let program = parse_source("-123 * (45.67);").unwrap();
///
/// assert_eq!(AstPrinter.print_program(&program),
///            "(expr (* (- 123.000000) (group 45.670000)))\n");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct AstPrinter;

impl AstPrinter {
    /// Renders one expression.
    #[must_use]
    pub fn print(mut self, expr: &Expr) -> String {
        expr.accept(&mut self)
    }

    /// Renders one statement.
    #[must_use]
    pub fn print_statement(mut self, statement: &Statement) -> String {
        statement.accept(&mut self)
    }

    /// Renders every statement of `program`, one per line.
    #[must_use]
    pub fn print_program(self, program: &Program) -> String {
        program.iter()
               .map(|statement| self.print_statement(statement) + "\n")
               .collect()
    }

    fn parenthesize(&mut self, name: &str, exprs: &[&Expr]) -> String {
        let mut out = format!("({name}");
        for expr in exprs {
            out.push(' ');
            out.push_str(&expr.accept(self));
        }
        out.push(')');
        out
    }
}

impl ExprVisitor for AstPrinter {
    type Output = String;

    fn visit_binary(&mut self,
                    left: &Expr,
                    op: BinaryOperator,
                    right: &Expr,
                    _line: usize)
                    -> String {
        self.parenthesize(op.symbol(), &[left, right])
    }

    fn visit_grouping(&mut self, expr: &Expr, _line: usize) -> String {
        self.parenthesize("group", &[expr])
    }

    fn visit_literal(&mut self, value: &LiteralValue, _line: usize) -> String {
        literal_text(value)
    }

    fn visit_unary(&mut self, op: UnaryOperator, expr: &Expr, _line: usize) -> String {
        self.parenthesize(op.symbol(), &[expr])
    }

    fn visit_variable(&mut self, name: &str, _line: usize) -> String {
        name.to_string()
    }

    fn visit_assign(&mut self, name: &str, value: &Expr, _line: usize) -> String {
        format!("(= {name} {})", value.accept(self))
    }
}

impl StmtVisitor for AstPrinter {
    type Output = String;

    fn visit_expression(&mut self, expr: &Expr, _line: usize) -> String {
        self.parenthesize("expr", &[expr])
    }

    fn visit_print(&mut self, expr: &Expr, _line: usize) -> String {
        self.parenthesize("print", &[expr])
    }

    fn visit_var_declaration(&mut self,
                             name: &str,
                             initializer: Option<&Expr>,
                             _line: usize)
                             -> String {
        match initializer {
            Some(expr) => format!("(var {name} {})", expr.accept(self)),
            None => format!("(var {name})"),
        }
    }
}

/// Prints expressions in reverse Polish notation.
///
/// Operands come first, then the operator. Groupings disappear since the
/// notation needs no parentheses.
///
/// # Example
/// ```
/// use treelox::{ast::printer::RpnPrinter, parse_expression_source};
///
/// let expr = parse_expression_source("(1 + 2) * (4 - 3)").unwrap();
///
/// assert_eq!(RpnPrinter.print(&expr),
///            "1.000000 2.000000 + 4.000000 3.000000 - *");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct RpnPrinter;

impl RpnPrinter {
    /// Renders one expression.
    #[must_use]
    pub fn print(mut self, expr: &Expr) -> String {
        expr.accept(&mut self)
    }

    /// Renders the expression of every `print` and expression statement in
    /// `program`, one per line. Declarations are skipped.
    #[must_use]
    pub fn print_program(self, program: &Program) -> String {
        program.iter()
               .filter_map(|statement| match statement {
                   Statement::Expression { expr, .. } | Statement::Print { expr, .. } => {
                       Some(self.print(expr) + "\n")
                   },
                   Statement::VarDeclaration { .. } => None,
               })
               .collect()
    }
}

impl ExprVisitor for RpnPrinter {
    type Output = String;

    fn visit_binary(&mut self,
                    left: &Expr,
                    op: BinaryOperator,
                    right: &Expr,
                    _line: usize)
                    -> String {
        format!("{} {} {op}", left.accept(self), right.accept(self))
    }

    fn visit_grouping(&mut self, expr: &Expr, _line: usize) -> String {
        expr.accept(self)
    }

    fn visit_literal(&mut self, value: &LiteralValue, _line: usize) -> String {
        literal_text(value)
    }

    fn visit_unary(&mut self, op: UnaryOperator, expr: &Expr, _line: usize) -> String {
        format!("{} {op}", expr.accept(self))
    }

    fn visit_variable(&mut self, name: &str, _line: usize) -> String {
        name.to_string()
    }

    fn visit_assign(&mut self, name: &str, value: &Expr, _line: usize) -> String {
        format!("{} {name} =", value.accept(self))
    }
}
