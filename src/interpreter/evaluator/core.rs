use std::io::{self, Write};

use crate::{
    ast::{BinaryOperator, Expr, LiteralValue, Program, Statement, UnaryOperator, visit::ExprVisitor},
    error::RuntimeError,
    interpreter::{environment::Environment, value::core::Value},
};

/// A type alias for evaluation results.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates an expression against `environment`.
///
/// Operands are evaluated left to right and completely before their
/// operator is applied. Assignments update `environment` in place.
///
/// # Errors
/// Returns the first `RuntimeError` raised anywhere in the tree.
///
/// # Example
/// ```
/// use treelox::{
///     interpreter::{environment::Environment, evaluator::core::evaluate, value::core::Value},
///     parse_expression_source,
/// };
///
/// let mut env = Environment::new();
/// env.define("x", Value::Number(4.0));
///
/// let expr = parse_expression_source("x * 2 + 1").unwrap();
///
/// assert_eq!(evaluate(&expr, &mut env).unwrap(), Value::Number(9.0));
/// ```
pub fn evaluate(expr: &Expr, environment: &mut Environment) -> EvalResult<Value> {
    expr.accept(&mut Evaluator::new(environment))
}

/// Walks an expression tree and computes its value.
#[derive(Debug)]
pub struct Evaluator<'env> {
    environment: &'env mut Environment,
}

impl<'env> Evaluator<'env> {
    pub const fn new(environment: &'env mut Environment) -> Self {
        Self { environment }
    }
}

impl ExprVisitor for Evaluator<'_> {
    type Output = EvalResult<Value>;

    fn visit_binary(&mut self,
                    left: &Expr,
                    op: BinaryOperator,
                    right: &Expr,
                    line: usize)
                    -> EvalResult<Value> {
        let left = left.accept(self)?;
        let right = right.accept(self)?;

        Self::eval_binary(op, left, right, line)
    }

    fn visit_grouping(&mut self, expr: &Expr, _line: usize) -> EvalResult<Value> {
        expr.accept(self)
    }

    fn visit_literal(&mut self, value: &LiteralValue, _line: usize) -> EvalResult<Value> {
        Ok(Value::from(value))
    }

    fn visit_unary(&mut self, op: UnaryOperator, expr: &Expr, line: usize) -> EvalResult<Value> {
        let operand = expr.accept(self)?;

        Self::eval_unary(op, operand, line)
    }

    fn visit_variable(&mut self, name: &str, line: usize) -> EvalResult<Value> {
        self.environment.get(name, line)
    }

    fn visit_assign(&mut self, name: &str, value: &Expr, line: usize) -> EvalResult<Value> {
        let value = value.accept(self)?;
        self.environment.assign(name, value.clone(), line)?;

        Ok(value)
    }
}

/// Executes programs one statement at a time.
///
/// The interpreter owns the variable environment, which persists across
/// calls to [`Interpreter::execute_program`], and the sink `print` writes
/// to. By default that sink is standard output.
///
/// # Example
/// ```
/// use treelox::{interpreter::evaluator::core::Interpreter, parse_source};
///
/// let program = parse_source("var a = 1; print a + 2;").unwrap();
/// let mut interpreter = Interpreter::with_output(Vec::new());
///
/// interpreter.execute_program(&program).unwrap();
///
/// assert_eq!(String::from_utf8(interpreter.into_output()).unwrap(), "3.000000\n");
/// ```
#[derive(Debug)]
pub struct Interpreter<W: Write = io::Stdout> {
    pub(in crate::interpreter::evaluator) environment: Environment,
    pub(in crate::interpreter::evaluator) out:         W,
}

impl Interpreter {
    #[must_use]
    pub fn new() -> Self {
        Self::with_output(io::stdout())
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> Interpreter<W> {
    /// Creates an interpreter whose `print` statements write to `out`.
    pub fn with_output(out: W) -> Self {
        Self { environment: Environment::new(),
               out }
    }

    /// Executes every statement of `program` in order.
    ///
    /// # Errors
    /// Stops at the first statement that raises a `RuntimeError` and returns
    /// it. Effects of the statements before it remain visible.
    pub fn execute_program(&mut self, program: &Program) -> EvalResult<()> {
        tracing::debug!(statements = program.len(), "executing program");

        for statement in program {
            self.execute(statement)?;
        }

        Ok(())
    }

    /// Executes one statement.
    pub fn execute(&mut self, statement: &Statement) -> EvalResult<()> {
        tracing::trace!(line = statement.line_number(), "executing statement");

        statement.accept(self)
    }

    /// Evaluates one expression against this interpreter's environment.
    pub fn evaluate(&mut self, expr: &Expr) -> EvalResult<Value> {
        evaluate(expr, &mut self.environment)
    }

    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    #[must_use]
    pub const fn output(&self) -> &W {
        &self.out
    }

    /// Consumes the interpreter and hands back its output sink.
    pub fn into_output(self) -> W {
        self.out
    }
}
