use std::collections::HashMap;

use crate::interpreter::value::core::Value;

/// Mapping from variable names to their current values.
///
/// An environment starts empty and lives as long as the [`Context`] that owns
/// it. Only successful assignment statements write to it; a later assignment
/// to the same name replaces the earlier value.
///
/// [`Context`]: crate::interpreter::evaluator::core::Context
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    variables: HashMap<String, Value>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current value of `name`, if it was ever assigned.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Binds `name` to `value`, returning the value it replaced.
    pub fn assign(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.variables.insert(name.into(), value)
    }

    /// Returns `true` if `name` has been assigned.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Number of assigned variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns `true` if no variable has been assigned yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Iterates over all bindings ordered by name.
    ///
    /// # Example
    /// ```
    /// use calcline::interpreter::{environment::Environment, value::core::Value};
    ///
    /// let mut env = Environment::new();
    /// env.assign("b", Value::Bool(true));
    /// env.assign("a", Value::Number(1.0));
    ///
    /// let names: Vec<&str> = env.iter_sorted().map(|(name, _)| name).collect();
    /// assert_eq!(names, ["a", "b"]);
    /// ```
    pub fn iter_sorted(&self) -> impl Iterator<Item = (&str, &Value)> {
        let mut bindings: Vec<(&str, &Value)> =
            self.variables.iter().map(|(name, value)| (name.as_str(), value)).collect();
        bindings.sort_unstable_by(|a, b| a.0.cmp(b.0));
        bindings.into_iter()
    }
}
