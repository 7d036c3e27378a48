use crate::expression::error::EvalError;
use crate::expression::expr::{BinaryOp, Expr};

/// Evaluate an expression tree to a number.
///
/// Arithmetic follows IEEE-754 without guarding (division by zero yields
/// infinity or NaN). Comparisons yield `1.0` or `0.0`. Named operations are
/// not evaluable: they are logged and contribute `0.0`.
pub fn evaluate(expr: &Expr) -> f64 {
    let res = eval_with(expr, &mut |func: &str| {
        tracing::warn!(operation = func, "unknown operation '{func}'");
        Ok(0.0)
    });
    res.unwrap_or(0.0)
}

/// Like [`evaluate`], but reports the first named operation as an error.
pub fn evaluate_checked(expr: &Expr) -> Result<f64, EvalError> {
    eval_with(expr, &mut |func: &str| {
        Err(EvalError::UnknownOperation {
            name: func.to_owned(),
        })
    })
}

fn eval_with(
    expr: &Expr,
    on_call: &mut impl FnMut(&str) -> Result<f64, EvalError>,
) -> Result<f64, EvalError> {
    match expr {
        Expr::Var { value, .. } | Expr::Const(value) => Ok(*value),
        Expr::Binary { op, left, right } => {
            let a = eval_with(left, on_call)?;
            let b = eval_with(right, on_call)?;
            Ok(apply_binary(*op, a, b))
        }
        Expr::Call { func, .. } => on_call(func),
    }
}

pub(crate) fn apply_binary(op: BinaryOp, a: f64, b: f64) -> f64 {
    match op {
        BinaryOp::Add => a + b,
        BinaryOp::Sub => a - b,
        BinaryOp::Mul => a * b,
        BinaryOp::Div => a / b,
        BinaryOp::Mod => truncating_mod(a, b),
        BinaryOp::Pow => a.powf(b),
        BinaryOp::Eq => bool_to_f64(a == b),
        BinaryOp::Lt => bool_to_f64(a < b),
        BinaryOp::Le => bool_to_f64(a <= b),
    }
}

fn bool_to_f64(v: bool) -> f64 {
    if v { 1.0 } else { 0.0 }
}

// Both operands are truncated toward zero first; the remainder takes the sign
// of the dividend. A zero divisor has no integer remainder and yields NaN.
fn truncating_mod(a: f64, b: f64) -> f64 {
    let (a, b) = (a as i64, b as i64);
    match a.checked_rem(b) {
        Some(r) => r as f64,
        None => {
            tracing::warn!(dividend = a, divisor = b, "integer remainder is undefined");
            f64::NAN
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/expression/eval.rs"]
mod tests;
