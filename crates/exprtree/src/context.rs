//! Evaluation context configuration

/// Settings for [`Expr::evaluate_with`](crate::Expr::evaluate_with).
///
/// Plain [`Expr::evaluate`](crate::Expr::evaluate) ignores these and has
/// no depth limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalContext {
    /// Maximum tree depth (stack overflow protection)
    pub max_depth: usize,

    /// Whether to trace evaluation to stderr (for debugging)
    pub trace: bool,
}

impl Default for EvalContext {
    fn default() -> Self {
        Self {
            max_depth: 1000,
            trace: false,
        }
    }
}

impl EvalContext {
    /// Create a new context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context with a custom depth limit.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth,
            ..Default::default()
        }
    }

    /// Enable or disable tracing.
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }
}
