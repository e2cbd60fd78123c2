use crate::{ast::LiteralValue, util::num};

/// Represents a runtime value in the interpreter.
///
/// Every `String` value owns its buffer, so values can be moved between the
/// evaluator and the environment freely; reading a variable hands out a
/// clone.
///
/// The derived `PartialEq` is structural and exact. Language-level `==`
/// goes through [`Value::is_equal`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A boolean value (`true` or `false`).
    Bool(bool),
    /// The absence of a value.
    Nil,
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A string value.
    String(String),
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<&LiteralValue> for Value {
    fn from(literal: &LiteralValue) -> Self {
        match literal {
            LiteralValue::Number(n) => Self::Number(*n),
            LiteralValue::String(s) => Self::String(s.clone()),
            LiteralValue::Bool(b) => Self::Bool(*b),
            LiteralValue::Nil => Self::Nil,
        }
    }
}

impl Value {
    /// Returns the name of the value's kind, as used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Nil => "nil",
            Self::Number(_) => "number",
            Self::String(_) => "string",
        }
    }

    /// Converts the value to a condition.
    ///
    /// `nil` and `false` are falsy; every other value, including `0` and
    /// the empty string, is truthy.
    ///
    /// # Example
    /// ```
    /// use treelox::interpreter::value::core::Value;
    ///
    /// assert!(!Value::Nil.is_truthy());
    /// assert!(!Value::Bool(false).is_truthy());
    /// assert!(Value::Number(0.0).is_truthy());
    /// assert!(Value::from("").is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        match self {
            Self::Nil => false,
            Self::Bool(b) => *b,
            Self::Number(_) | Self::String(_) => true,
        }
    }

    /// Compares two values the way `==` does.
    ///
    /// Values of different kinds are never equal. Numbers are equal when
    /// they differ by at most [`num::EQUALITY_TOLERANCE`]; strings compare
    /// byte for byte.
    ///
    /// # Example
    /// ```
    /// use treelox::interpreter::value::core::Value;
    ///
    /// assert!(Value::Number(1.0).is_equal(&Value::Number(1.0 + 5e-9)));
    /// assert!(!Value::Number(1.0).is_equal(&Value::Number(1.1)));
    /// assert!(!Value::Nil.is_equal(&Value::Bool(false)));
    /// ```
    #[must_use]
    pub fn is_equal(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Nil, Self::Nil) => true,
            (Self::Number(a), Self::Number(b)) => num::approx_eq(*a, *b),
            (Self::String(a), Self::String(b)) => a == b,
            _ => false,
        }
    }
}

/// Formats the value the way `print` shows it: numbers in fixed-point,
/// strings wrapped in double quotes without escaping.
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Nil => f.write_str("nil"),
            Self::Number(n) => f.write_str(&num::format_fixed(*n)),
            Self::String(s) => write!(f, "\"{s}\""),
        }
    }
}
