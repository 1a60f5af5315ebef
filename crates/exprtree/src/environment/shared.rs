//! Thread-safe binding store

use std::sync::Arc;

use dashmap::DashMap;

use super::{Bindings, Environment};

/// A binding store that can be updated and read from many threads at once.
///
/// Clones share the same underlying bindings. Each `set` and `lookup` is
/// atomic per name; an evaluation running alongside writers sees whatever
/// value each variable holds at the moment it is looked up. Take a
/// [`snapshot`](Self::snapshot) to evaluate against a frozen view.
///
/// # Example
///
/// ```
/// use exprtree::{Bindings, SharedEnvironment};
///
/// let env = SharedEnvironment::new();
/// let writer = env.clone();
///
/// std::thread::spawn(move || {
///     writer.set("x", 3);
/// })
/// .join()
/// .unwrap();
///
/// assert_eq!(env.get("x"), Ok(3.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedEnvironment {
    bindings: Arc<DashMap<String, f64>>,
}

impl SharedEnvironment {
    /// Create a new empty shared environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `value`, overwriting any existing binding.
    ///
    /// Returns the previous value when the name was already bound.
    pub fn set(&self, name: impl Into<String>, value: impl Into<f64>) -> Option<f64> {
        self.bindings.insert(name.into(), value.into())
    }

    /// Get the number of bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Check if the environment is empty.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Copy the current bindings into a single-owner [`Environment`].
    pub fn snapshot(&self) -> Environment {
        self.bindings
            .iter()
            .map(|entry| (entry.key().clone(), *entry.value()))
            .collect()
    }
}

impl Bindings for SharedEnvironment {
    fn lookup(&self, name: &str) -> Option<f64> {
        self.bindings.get(name).map(|entry| *entry.value())
    }
}

impl From<Environment> for SharedEnvironment {
    fn from(env: Environment) -> Self {
        let shared = SharedEnvironment::new();
        for (name, value) in env.iter() {
            shared.set(name, value);
        }
        shared
    }
}
