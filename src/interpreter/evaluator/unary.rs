use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

impl Evaluator<'_> {
    /// Applies a unary operator to an evaluated operand.
    ///
    /// `-` negates a number; `!` negates the operand's truthiness and works
    /// on every kind.
    ///
    /// # Errors
    /// Returns `RuntimeError::OperandMustBeNumber` when `-` is applied to
    /// anything but a number.
    pub fn eval_unary(op: UnaryOperator, operand: Value, line: usize) -> EvalResult<Value> {
        match (op, operand) {
            (UnaryOperator::Negate, Value::Number(n)) => Ok(Value::Number(-n)),
            (UnaryOperator::Negate, other) => {
                Err(RuntimeError::OperandMustBeNumber { operator: op.symbol(),
                                                        found: other.type_name(),
                                                        line })
            },
            (UnaryOperator::Not, value) => Ok(Value::Bool(!value.is_truthy())),
        }
    }
}
