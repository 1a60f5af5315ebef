//! # exprtree
//!
//! Arithmetic expression trees built in code and evaluated against a
//! mutable binding store.
//!
//! Trees are assembled from constants, variable references, additions and
//! multiplications. Variables are resolved at evaluation time, so the same
//! tree can be evaluated repeatedly as bindings change, or against many
//! independent stores.
//!
//! ## Architecture
//!
//! - **Environment**: the binding store, passed by reference to evaluation
//! - **Expr**: the closed set of node kinds, owning their operands
//! - **Evaluation**: left-to-right recursion that stops at the first error
//! - **Rendering**: fully parenthesized text that mirrors the tree shape
//!
//! ```
//! use exprtree::{Environment, EvalError, Expr};
//!
//! let expr = Expr::variable("x") * 5;
//! let mut env = Environment::new();
//!
//! assert_eq!(expr.evaluate(&env), Err(EvalError::undefined_variable("x")));
//!
//! env.set("x", 4);
//! assert_eq!(expr.evaluate(&env), Ok(20.0));
//! assert_eq!(expr.render(), "(x * 5)");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod context;
pub mod environment;
pub mod error;
pub mod eval;
pub mod expr;
pub mod render;

// Re-export main types
pub use context::EvalContext;
pub use environment::{Bindings, Environment, SharedEnvironment};
pub use error::{EvalError, Result};
pub use eval::BinaryOp;
pub use expr::Expr;
pub use render::format_number;

/// exprtree version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_expr_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Expr>();
        assert_send_sync::<Environment>();
        assert_send_sync::<SharedEnvironment>();
    }
}
