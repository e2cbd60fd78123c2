use thiserror::Error;

/// Represents a diagnostic raised while scanning source text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that cannot start any token.
    #[error("Error on line {line}: Unexpected character '{character}'.")]
    UnexpectedCharacter {
        /// The offending character.
        character: String,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// End of input was reached before the closing `"` of a string.
    #[error("Error on line {line}: Unterminated string. Expected '\"'.")]
    UnterminatedString {
        /// The line on which the string started.
        line: usize,
    },
    /// End of input was reached inside a `/* ... */` comment.
    #[error("Error on line {line}: Unterminated block comment. Expected '*/'.")]
    UnterminatedBlockComment {
        /// The line on which the comment started.
        line: usize,
    },
}

impl LexError {
    /// Gets the source line of the diagnostic.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { line, .. }
            | Self::UnterminatedString { line }
            | Self::UnterminatedBlockComment { line } => *line,
        }
    }
}

/// Every diagnostic reported during one scan, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LexErrors(pub Vec<LexError>);

impl LexErrors {
    /// Iterates over the collected diagnostics.
    pub fn iter(&self) -> std::slice::Iter<'_, LexError> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for LexErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for LexErrors {}

impl From<Vec<LexError>> for LexErrors {
    fn from(errors: Vec<LexError>) -> Self {
        Self(errors)
    }
}
