use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

impl Evaluator<'_> {
    /// Applies a binary operator to two evaluated operands.
    ///
    /// `+` adds two numbers or concatenates two strings. The remaining
    /// arithmetic and ordering operators need two numbers. `==` and `!=`
    /// accept any pair of values.
    ///
    /// # Errors
    /// Returns `RuntimeError::InvalidAddition` or
    /// `RuntimeError::OperandsMustBeNumbers` when the operand kinds do not
    /// fit the operator.
    pub fn eval_binary(op: BinaryOperator,
                       left: Value,
                       right: Value,
                       line: usize)
                       -> EvalResult<Value> {
        tracing::trace!(%op,
                        left = left.type_name(),
                        right = right.type_name(),
                        line,
                        "applying binary operator");

        match op {
            BinaryOperator::Add => Self::eval_add(left, right, line),
            BinaryOperator::Sub => numeric(op, &left, &right, line, |l, r| Value::Number(l - r)),
            BinaryOperator::Mul => numeric(op, &left, &right, line, |l, r| Value::Number(l * r)),
            // IEEE 754: dividing by zero yields an infinity or nan.
            BinaryOperator::Div => numeric(op, &left, &right, line, |l, r| Value::Number(l / r)),
            BinaryOperator::Less => numeric(op, &left, &right, line, |l, r| Value::Bool(l < r)),
            BinaryOperator::Greater => numeric(op, &left, &right, line, |l, r| Value::Bool(l > r)),
            BinaryOperator::LessEqual => {
                numeric(op, &left, &right, line, |l, r| Value::Bool(l <= r))
            },
            BinaryOperator::GreaterEqual => {
                numeric(op, &left, &right, line, |l, r| Value::Bool(l >= r))
            },
            BinaryOperator::Equal => Ok(Value::Bool(left.is_equal(&right))),
            BinaryOperator::NotEqual => Ok(Value::Bool(!left.is_equal(&right))),
        }
    }

    fn eval_add(left: Value, right: Value, line: usize) -> EvalResult<Value> {
        match (left, right) {
            (Value::Number(l), Value::Number(r)) => Ok(Value::Number(l + r)),
            (Value::String(mut l), Value::String(r)) => {
                l.push_str(&r);
                Ok(Value::String(l))
            },
            (l, r) => Err(RuntimeError::InvalidAddition { left: l.type_name(),
                                                          right: r.type_name(),
                                                          line }),
        }
    }
}

/// Applies `apply` when both operands are numbers.
fn numeric(op: BinaryOperator,
           left: &Value,
           right: &Value,
           line: usize,
           apply: impl FnOnce(f64, f64) -> Value)
           -> EvalResult<Value> {
    match (left, right) {
        (Value::Number(l), Value::Number(r)) => Ok(apply(*l, *r)),
        _ => Err(RuntimeError::OperandsMustBeNumbers { operator: op.symbol(),
                                                       left:     left.type_name(),
                                                       right:    right.type_name(),
                                                       line }),
    }
}
