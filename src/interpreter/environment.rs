use std::collections::HashMap;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// The variable table of one interpreter.
///
/// A single flat scope: every declaration in a program lands in the same
/// table, which lives as long as the interpreter that owns it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    values: HashMap<String, Value>,
}

impl Environment {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `value`, replacing any earlier binding.
    pub fn define(&mut self, name: &str, value: Value) {
        tracing::trace!(name, kind = value.type_name(), "defining variable");
        self.values.insert(name.to_string(), value);
    }

    /// Returns a copy of the value bound to `name`.
    ///
    /// # Errors
    /// Returns `RuntimeError::UndefinedVariable` if `name` was never
    /// defined.
    ///
    /// # Example
    /// ```
    /// use treelox::interpreter::{environment::Environment, value::core::Value};
    ///
    /// let mut env = Environment::new();
    /// env.define("x", Value::Number(1.0));
    ///
    /// assert_eq!(env.get("x", 1).unwrap(), Value::Number(1.0));
    /// assert!(env.get("y", 1).is_err());
    /// ```
    pub fn get(&self, name: &str, line: usize) -> EvalResult<Value> {
        self.values
            .get(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string(),
                                                             line })
    }

    /// Rebinds an existing variable.
    ///
    /// # Errors
    /// Returns `RuntimeError::UndefinedVariable` if `name` was never
    /// defined; the binding is not created.
    pub fn assign(&mut self, name: &str, value: Value, line: usize) -> EvalResult<()> {
        match self.values.get_mut(name) {
            Some(slot) => {
                *slot = value;
                Ok(())
            },
            None => Err(RuntimeError::UndefinedVariable { name: name.to_string(),
                                                          line }),
        }
    }

    /// Returns `true` if `name` is bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn redefinition_overwrites() {
        let mut env = Environment::new();
        env.define("a", Value::Number(1.0));
        env.define("a", Value::from("two"));

        assert_eq!(env.get("a", 1).unwrap(), Value::from("two"));
        assert_eq!(env.len(), 1);
    }

    #[test]
    fn assign_replaces_existing_binding() {
        let mut env = Environment::new();
        env.define("a", Value::Nil);
        env.assign("a", Value::Bool(true), 2).unwrap();

        assert_eq!(env.get("a", 3).unwrap(), Value::Bool(true));
    }

    #[test]
    fn assign_to_undefined_does_not_create_binding() {
        let mut env = Environment::new();
        let error = env.assign("ghost", Value::Nil, 7).unwrap_err();

        assert!(matches!(error,
                         RuntimeError::UndefinedVariable { ref name, line: 7 } if name == "ghost"));
        assert!(!env.contains("ghost"));
        assert!(env.is_empty());
    }

    #[test]
    fn names_match_by_content() {
        let mut env = Environment::new();
        let name = String::from("counter");
        env.define(&name, Value::Number(3.0));

        assert_eq!(env.get(&format!("count{}", "er"), 1).unwrap(), Value::Number(3.0));
        assert!(env.get("Counter", 1).is_err());
    }
}
