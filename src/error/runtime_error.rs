use thiserror::Error;

#[derive(Debug, Error)]
/// Represents all errors that can occur during evaluation and runtime.
pub enum RuntimeError {
    /// Tried to read or assign a variable that was never declared.
    #[error("Error on line {line}: Undefined variable '{name}'.")]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A unary operator that needs a number received something else.
    #[error("Error on line {line}: Operand of '{operator}' must be a number, found {found}.")]
    OperandMustBeNumber {
        /// The operator lexeme.
        operator: &'static str,
        /// The kind of the operand.
        found:    &'static str,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A binary operator that needs two numbers received something else.
    #[error("Error on line {line}: Operands of '{operator}' must be numbers, found {left} and {right}.")]
    OperandsMustBeNumbers {
        /// The operator lexeme.
        operator: &'static str,
        /// The kind of the left operand.
        left:     &'static str,
        /// The kind of the right operand.
        right:    &'static str,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// `+` received something other than two numbers or two strings.
    #[error("Error on line {line}: Operands of '+' must be two numbers or two strings, found {left} and {right}.")]
    InvalidAddition {
        /// The kind of the left operand.
        left:  &'static str,
        /// The kind of the right operand.
        right: &'static str,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Writing the output of a `print` statement failed.
    #[error("Error on line {line}: Failed to write output: {source}.")]
    Output {
        /// The underlying I/O failure.
        source: std::io::Error,
        /// The source line where the error occurred.
        line:   usize,
    },
}

impl RuntimeError {
    /// Gets the source line of the error.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UndefinedVariable { line, .. }
            | Self::OperandMustBeNumber { line, .. }
            | Self::OperandsMustBeNumbers { line, .. }
            | Self::InvalidAddition { line, .. }
            | Self::Output { line, .. } => *line,
        }
    }
}
