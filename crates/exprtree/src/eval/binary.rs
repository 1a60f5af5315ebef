//! Binary operator table

use std::fmt;

/// The operator carried by an internal node.
///
/// Evaluation and rendering both go through this table, so a new
/// operator only needs a variant here and a node in `Expr`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// `+`
    Add,
    /// `*`
    Mul,
}

impl BinaryOp {
    /// Combine two already-evaluated operands.
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            BinaryOp::Add => left + right,
            BinaryOp::Mul => left * right,
        }
    }

    /// The operator's symbol as it appears in rendered text.
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Mul => "*",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
