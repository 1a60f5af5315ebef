//! Binding store mapping variable names to values

mod shared;

pub use shared::SharedEnvironment;

use std::collections::HashMap;
use std::hash::BuildHasher;

use indexmap::IndexMap;

use crate::error::{EvalError, Result};

/// Read access to variable bindings during evaluation.
///
/// Evaluation only ever reads from a store, so the tree borrows it for
/// the duration of a call and never owns it. Implement `lookup` to plug
/// in a custom store; `get` and `has` are derived from it.
pub trait Bindings {
    /// Look up the value bound to `name`, or `None` when it is unbound.
    fn lookup(&self, name: &str) -> Option<f64>;

    /// Look up the value bound to `name`.
    ///
    /// # Errors
    ///
    /// `UndefinedVariable` if `name` has never been set.
    fn get(&self, name: &str) -> Result<f64> {
        self.lookup(name)
            .ok_or_else(|| EvalError::undefined_variable(name))
    }

    /// Check whether `name` is bound. Never fails.
    fn has(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }
}

/// The binding store used for evaluation.
///
/// Each name maps to exactly one value; setting an existing name
/// overwrites it. Bindings are never removed.
///
/// # Example
///
/// ```
/// use exprtree::{Bindings, Environment};
///
/// let mut env = Environment::new();
/// env.set("x", 10);
/// env.set("x", 20); // Overwrites
///
/// assert_eq!(env.get("x"), Ok(20.0));
/// assert!(env.has("x"));
/// assert!(!env.has("y"));
/// assert!(env.get("y").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    bindings: IndexMap<String, f64>,
}

impl Environment {
    /// Create a new empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `value`, overwriting any existing binding.
    ///
    /// Returns the previous value when the name was already bound.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<f64>) -> Option<f64> {
        self.bindings.insert(name.into(), value.into())
    }

    /// Iterate over all bindings.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.bindings.iter().map(|(name, value)| (name.as_str(), *value))
    }

    /// Get all bound names.
    pub fn names(&self) -> Vec<&str> {
        self.bindings.keys().map(String::as_str).collect()
    }

    /// Get the number of bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Check if the environment is empty.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Bindings for Environment {
    fn lookup(&self, name: &str) -> Option<f64> {
        self.bindings.get(name).copied()
    }
}

impl<S: BuildHasher> Bindings for HashMap<String, f64, S> {
    fn lookup(&self, name: &str) -> Option<f64> {
        HashMap::get(self, name).copied()
    }
}

impl<K: Into<String>, V: Into<f64>> FromIterator<(K, V)> for Environment {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut env = Environment::new();
        env.extend(iter);
        env
    }
}

impl<K: Into<String>, V: Into<f64>> Extend<(K, V)> for Environment {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.set(name, value);
        }
    }
}
