//! Canonical text rendering for expression trees
//!
//! Every internal node is wrapped in parentheses regardless of operator
//! precedence, so the text spells out the exact tree shape.

use std::fmt;

use crate::{BinaryOp, Expr};

impl Expr {
    /// Render the canonical, fully parenthesized form of this tree.
    ///
    /// ```
    /// use exprtree::Expr;
    ///
    /// let expr = Expr::addition(2, Expr::multiplication(3, 4));
    /// assert_eq!(expr.render(), "(2 + (3 * 4))");
    /// assert_eq!(Expr::constant(5.0).render(), "5");
    /// ```
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Constant(value) => f.write_str(&format_number(*value)),
            Expr::Variable(name) => f.write_str(name),
            Expr::Addition(left, right) => write!(f, "({} {} {})", left, BinaryOp::Add, right),
            Expr::Multiplication(left, right) => {
                write!(f, "({} {} {})", left, BinaryOp::Mul, right)
            }
        }
    }
}

/// Format a number the way constants render.
///
/// Integer-valued numbers drop the fractional part (`5`, `-5`, `0`);
/// anything else uses the shortest decimal form that round-trips
/// (`3.14`). Negative zero renders as `0`. Infinities and NaN render as
/// `inf`, `-inf` and `NaN`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        // f64's Display never prints a trailing `.0` for integral values
        value.to_string()
    }
}
