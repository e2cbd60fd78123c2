/// Binary operator semantics.
///
/// Applies arithmetic, comparison and equality operators to two already
/// evaluated operands, reporting a runtime error when the operand kinds do
/// not fit the operator.
pub mod binary;
/// Shared evaluation state and the expression evaluator.
///
/// Declares `EvalResult`, the `Evaluator` that walks expression trees
/// against an environment, and the `Interpreter` that owns the environment
/// and the output sink for a whole program.
pub mod core;
/// Statement execution.
///
/// Implements the statement visitor for the interpreter: expression
/// statements, `print` and variable declarations.
pub mod statement;
/// Unary operator semantics (`-` and `!`).
pub mod unary;
