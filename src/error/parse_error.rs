use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur during parsing.
///
/// Tokens are reported by their lexeme, or as `end of input` for the EOF
/// token.
pub enum ParseError {
    /// A primary expression (literal, variable or `(`) was expected.
    #[error("Error on line {line}: Expected expression, found {found}.")]
    ExpectedExpression {
        /// The token encountered instead.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A specific token was required but something else was found.
    #[error("Error on line {line}: Expected {expected}, found {found}.")]
    ExpectedToken {
        /// Description of what was expected, e.g. `';' after value`.
        expected: &'static str,
        /// The token encountered instead.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// An operator was not followed by a valid operand.
    #[error("Error on line {line}: Missing operand after operator '{operator}', found {found}.")]
    MissingOperand {
        /// The operator lexeme.
        operator: String,
        /// The token encountered instead of the operand.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    #[error("Error on line {line}: Expected closing parenthesis ')' after expression, found {found}.")]
    ExpectedClosingParen {
        /// The token encountered instead.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The left-hand side of `=` is not a variable.
    #[error("Error on line {line}: Invalid assignment target.")]
    InvalidAssignmentTarget {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl ParseError {
    /// Gets the source line of the error.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::ExpectedExpression { line, .. }
            | Self::ExpectedToken { line, .. }
            | Self::MissingOperand { line, .. }
            | Self::ExpectedClosingParen { line, .. }
            | Self::InvalidAssignmentTarget { line } => *line,
        }
    }
}
