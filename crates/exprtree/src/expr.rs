//! Expression tree representation

use std::ops;

use indexmap::IndexSet;

use crate::environment::Bindings;
use crate::eval::BinaryOp;

/// An arithmetic expression tree.
///
/// Leaves are constants and variable references; internal nodes own
/// their two operands. The shape of a tree never changes after
/// construction, so one tree can be evaluated against any number of
/// stores, from any number of threads.
///
/// # Example
///
/// ```
/// use exprtree::{Environment, Expr};
///
/// // 2 + x * 3
/// let expr = Expr::addition(
///     Expr::constant(2),
///     Expr::multiplication(Expr::variable("x"), Expr::constant(3)),
/// );
///
/// let mut env = Environment::new();
/// env.set("x", 20);
///
/// assert_eq!(expr.evaluate(&env), Ok(62.0));
/// assert_eq!(expr.render(), "(2 + (x * 3))");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value
    Constant(f64),

    /// A reference to a binding, resolved at evaluation time
    Variable(String),

    /// Sum of the left and right operands
    Addition(Box<Expr>, Box<Expr>),

    /// Product of the left and right operands
    Multiplication(Box<Expr>, Box<Expr>),
}

// ═══════════════════════════════════════════════════════════════════
// Constructors
// ═══════════════════════════════════════════════════════════════════

impl Expr {
    /// Create a constant from any value convertible to `f64`.
    pub fn constant(value: impl Into<f64>) -> Self {
        Expr::Constant(value.into())
    }

    /// Create a constant from an `i64`, rounding to the nearest `f64`
    /// when the magnitude exceeds 2^53.
    pub fn constant_i64(value: i64) -> Self {
        Expr::Constant(value as f64)
    }

    /// Create a variable reference. The name is not validated here.
    pub fn variable(name: impl Into<String>) -> Self {
        Expr::Variable(name.into())
    }

    /// Create an addition node owning both operands.
    pub fn addition(left: impl Into<Expr>, right: impl Into<Expr>) -> Self {
        Expr::Addition(Box::new(left.into()), Box::new(right.into()))
    }

    /// Create a multiplication node owning both operands.
    pub fn multiplication(left: impl Into<Expr>, right: impl Into<Expr>) -> Self {
        Expr::Multiplication(Box::new(left.into()), Box::new(right.into()))
    }

    /// Create an internal node for `op`.
    pub fn binary(op: BinaryOp, left: impl Into<Expr>, right: impl Into<Expr>) -> Self {
        match op {
            BinaryOp::Add => Expr::addition(left, right),
            BinaryOp::Mul => Expr::multiplication(left, right),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// Structural Queries
// ═══════════════════════════════════════════════════════════════════

impl Expr {
    /// Split an internal node into its operator and operands.
    ///
    /// Returns `None` for leaves.
    pub fn as_binary(&self) -> Option<(BinaryOp, &Expr, &Expr)> {
        match self {
            Expr::Addition(left, right) => Some((BinaryOp::Add, left, right)),
            Expr::Multiplication(left, right) => Some((BinaryOp::Mul, left, right)),
            Expr::Constant(_) | Expr::Variable(_) => None,
        }
    }

    /// Check if this node is a constant or variable.
    pub fn is_leaf(&self) -> bool {
        self.as_binary().is_none()
    }

    /// Height of the tree; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        match self.as_binary() {
            Some((_, left, right)) => 1 + left.depth().max(right.depth()),
            None => 1,
        }
    }

    /// Total number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        match self.as_binary() {
            Some((_, left, right)) => 1 + left.node_count() + right.node_count(),
            None => 1,
        }
    }

    /// Distinct variable names, in left-to-right order of first occurrence.
    pub fn variables(&self) -> IndexSet<&str> {
        let mut names = IndexSet::new();
        self.collect_variables(&mut names);
        names
    }

    /// Variables referenced by this tree that `store` has no binding for.
    ///
    /// Evaluation succeeds exactly when this set is empty.
    pub fn unbound_variables<B: Bindings + ?Sized>(&self, store: &B) -> IndexSet<&str> {
        self.variables()
            .into_iter()
            .filter(|name| !store.has(name))
            .collect()
    }

    fn collect_variables<'a>(&'a self, names: &mut IndexSet<&'a str>) {
        match self {
            Expr::Variable(name) => {
                names.insert(name.as_str());
            }
            Expr::Constant(_) => {}
            Expr::Addition(left, right) | Expr::Multiplication(left, right) => {
                left.collect_variables(names);
                right.collect_variables(names);
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// From Traits
// ═══════════════════════════════════════════════════════════════════

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Expr::Constant(value)
    }
}

impl From<i32> for Expr {
    fn from(value: i32) -> Self {
        Expr::Constant(value.into())
    }
}

impl From<&str> for Expr {
    fn from(name: &str) -> Self {
        Expr::Variable(name.to_string())
    }
}

impl From<String> for Expr {
    fn from(name: String) -> Self {
        Expr::Variable(name)
    }
}

// ═══════════════════════════════════════════════════════════════════
// Operator Builders
// ═══════════════════════════════════════════════════════════════════

impl<R: Into<Expr>> ops::Add<R> for Expr {
    type Output = Expr;

    fn add(self, rhs: R) -> Expr {
        Expr::addition(self, rhs)
    }
}

impl<R: Into<Expr>> ops::Mul<R> for Expr {
    type Output = Expr;

    fn mul(self, rhs: R) -> Expr {
        Expr::multiplication(self, rhs)
    }
}
