//! Error types for expression evaluation

use thiserror::Error;

/// Errors produced while evaluating an expression tree.
///
/// `Expr::evaluate` and `Bindings::get` only ever produce
/// [`EvalError::UndefinedVariable`]. The depth guard is reported only by
/// `Expr::evaluate_with`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// A variable was looked up that has no binding in the store
    #[error("Variable '{name}' is not defined")]
    UndefinedVariable {
        /// Name of the missing variable
        name: String,
    },

    /// Tree nesting went past the configured depth limit
    #[error("Expression depth limit exceeded: depth {depth} > max {max}")]
    DepthLimitExceeded {
        /// Depth at which evaluation stopped
        depth: usize,
        /// Configured maximum depth
        max: usize,
    },
}

impl EvalError {
    /// Create an `UndefinedVariable` error for `name`.
    pub fn undefined_variable(name: impl Into<String>) -> Self {
        EvalError::UndefinedVariable { name: name.into() }
    }

    /// The missing variable's name, if this is an `UndefinedVariable` error.
    pub fn variable_name(&self) -> Option<&str> {
        match self {
            EvalError::UndefinedVariable { name } => Some(name.as_str()),
            EvalError::DepthLimitExceeded { .. } => None,
        }
    }
}

/// Result type alias for evaluation
pub type Result<T> = std::result::Result<T, EvalError>;
