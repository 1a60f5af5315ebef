//! Expression evaluation

pub mod binary;

pub use binary::BinaryOp;

use crate::{Bindings, EvalContext, EvalError, Expr, Result};

impl Expr {
    /// Evaluate this tree against `store`.
    ///
    /// Internal nodes evaluate their left operand, then their right
    /// operand, and stop at the first failure: if the left operand fails
    /// the right one is never touched. The only possible error is
    /// [`EvalError::UndefinedVariable`].
    ///
    /// Nesting is bounded only by the call stack. Use
    /// [`evaluate_with`](Self::evaluate_with) to impose a depth limit.
    pub fn evaluate<B: Bindings + ?Sized>(&self, store: &B) -> Result<f64> {
        match self {
            Expr::Constant(value) => Ok(*value),
            Expr::Variable(name) => store.get(name),
            Expr::Addition(left, right) => {
                let left = left.evaluate(store)?;
                let right = right.evaluate(store)?;
                Ok(BinaryOp::Add.apply(left, right))
            }
            Expr::Multiplication(left, right) => {
                let left = left.evaluate(store)?;
                let right = right.evaluate(store)?;
                Ok(BinaryOp::Mul.apply(left, right))
            }
        }
    }

    /// Evaluate this tree under the settings in `ctx`.
    ///
    /// Same results and ordering as [`evaluate`](Self::evaluate), plus:
    /// - a node nested deeper than `ctx.max_depth` (the root is depth 1)
    ///   fails with [`EvalError::DepthLimitExceeded`] before it is evaluated;
    /// - with `ctx.trace` set, every node's outcome is written to stderr.
    pub fn evaluate_with<B: Bindings + ?Sized>(
        &self,
        store: &B,
        ctx: &EvalContext,
    ) -> Result<f64> {
        eval_node(self, store, ctx, 1)
    }
}

fn eval_node<B: Bindings + ?Sized>(
    expr: &Expr,
    store: &B,
    ctx: &EvalContext,
    depth: usize,
) -> Result<f64> {
    if depth > ctx.max_depth {
        return Err(EvalError::DepthLimitExceeded {
            depth,
            max: ctx.max_depth,
        });
    }

    let result = match expr {
        Expr::Constant(value) => Ok(*value),
        Expr::Variable(name) => store.get(name),
        Expr::Addition(left, right) => eval_binary(BinaryOp::Add, left, right, store, ctx, depth),
        Expr::Multiplication(left, right) => {
            eval_binary(BinaryOp::Mul, left, right, store, ctx, depth)
        }
    };

    if ctx.trace {
        trace_node(expr, &result, depth);
    }
    result
}

fn eval_binary<B: Bindings + ?Sized>(
    op: BinaryOp,
    left: &Expr,
    right: &Expr,
    store: &B,
    ctx: &EvalContext,
    depth: usize,
) -> Result<f64> {
    let left = eval_node(left, store, ctx, depth + 1)?;
    let right = eval_node(right, store, ctx, depth + 1)?;
    Ok(op.apply(left, right))
}

fn trace_node(expr: &Expr, result: &Result<f64>, depth: usize) {
    let indent = (depth - 1) * 2;
    match result {
        Ok(value) => eprintln!("{:indent$}{} => {}", "", expr, value, indent = indent),
        Err(err) => eprintln!("{:indent$}{} !! {}", "", expr, err, indent = indent),
    }
}
