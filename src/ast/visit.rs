use crate::ast::{BinaryOperator, Expr, LiteralValue, Statement, UnaryOperator};

/// Handles each kind of [`Expr`].
///
/// One method per variant; [`Expr::accept`] picks the method matching the
/// node, so adding a variant is a compile error until every visitor handles
/// it. Handlers recurse by calling `accept` on the children they need.
pub trait ExprVisitor {
    /// What each handler produces.
    type Output;

    fn visit_binary(&mut self,
                    left: &Expr,
                    op: BinaryOperator,
                    right: &Expr,
                    line: usize)
                    -> Self::Output;

    fn visit_grouping(&mut self, expr: &Expr, line: usize) -> Self::Output;

    fn visit_literal(&mut self, value: &LiteralValue, line: usize) -> Self::Output;

    fn visit_unary(&mut self, op: UnaryOperator, expr: &Expr, line: usize) -> Self::Output;

    fn visit_variable(&mut self, name: &str, line: usize) -> Self::Output;

    fn visit_assign(&mut self, name: &str, value: &Expr, line: usize) -> Self::Output;
}

/// Handles each kind of [`Statement`].
pub trait StmtVisitor {
    /// What each handler produces.
    type Output;

    fn visit_expression(&mut self, expr: &Expr, line: usize) -> Self::Output;

    fn visit_print(&mut self, expr: &Expr, line: usize) -> Self::Output;

    fn visit_var_declaration(&mut self,
                             name: &str,
                             initializer: Option<&Expr>,
                             line: usize)
                             -> Self::Output;
}

impl Expr {
    /// Routes `self` to the handler of `visitor` that matches its kind.
    pub fn accept<V: ExprVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Self::Binary { left,
                           op,
                           right,
                           line, } => visitor.visit_binary(left, *op, right, *line),
            Self::Grouping { expr, line } => visitor.visit_grouping(expr, *line),
            Self::Literal { value, line } => visitor.visit_literal(value, *line),
            Self::Unary { op, expr, line } => visitor.visit_unary(*op, expr, *line),
            Self::Variable { name, line } => visitor.visit_variable(name, *line),
            Self::Assign { name, value, line } => visitor.visit_assign(name, value, *line),
        }
    }
}

impl Statement {
    /// Routes `self` to the handler of `visitor` that matches its kind.
    pub fn accept<V: StmtVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Self::Expression { expr, line } => visitor.visit_expression(expr, *line),
            Self::Print { expr, line } => visitor.visit_print(expr, *line),
            Self::VarDeclaration { name,
                                   initializer,
                                   line, } => {
                visitor.visit_var_declaration(name, initializer.as_ref(), *line)
            },
        }
    }
}
