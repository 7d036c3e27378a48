use crate::expression::ast::{Syntax, SyntaxOp};
use crate::expression::error::CompileError;
use crate::expression::eval::apply_binary;
use crate::expression::expr::{BinaryOp, Expr, VarEnv};
use crate::expression::parser::parse_formula;
use crate::expression::print::format_compact;

/// Compile formula text into an expression tree.
///
/// Every identifier must name an entry of `env`; it becomes a variable leaf
/// holding the entry's value at this moment, rounded the way the printer
/// formats numbers. Operations whose operands are both plain numbers are
/// folded into constants, so only operations that touch a variable or a named
/// call produce tree nodes.
pub fn compile(src: &str, env: &VarEnv) -> Result<Expr, CompileError> {
    tracing::debug!(src, vars = env.len(), "compiling expression");
    let syntax = parse_formula(src)?;
    lower(&syntax, env)
}

/// [`compile`], falling back to [`Expr::zero`] when the text does not compile.
pub fn compile_or_zero(src: &str, env: &VarEnv) -> Expr {
    compile(src, env).unwrap_or_else(|e| {
        tracing::warn!(src, error = %e, "expression rejected, using 0");
        Expr::zero()
    })
}

/// Value a variable leaf captures for `value`.
pub(crate) fn snapshot_value(value: f64) -> f64 {
    format_compact(value).parse().unwrap_or(value)
}

fn lower(syntax: &Syntax, env: &VarEnv) -> Result<Expr, CompileError> {
    match syntax {
        Syntax::Number(v) => Ok(Expr::Const(*v)),
        Syntax::Ident { name, offset } => match env.get(name) {
            Some(v) => Ok(Expr::var(name.clone(), snapshot_value(*v))),
            None => Err(CompileError::new(
                *offset,
                format!("unknown variable '{name}'"),
            )),
        },
        Syntax::Neg(inner) => match lower(inner, env)? {
            Expr::Const(v) => Ok(Expr::Const(-v)),
            e => Ok(Expr::binary(BinaryOp::Mul, Expr::Const(-1.0), e)),
        },
        Syntax::Binary { op, left, right } => {
            let l = lower(left, env)?;
            let r = lower(right, env)?;
            let (op, l, r) = match op {
                SyntaxOp::Add => (BinaryOp::Add, l, r),
                SyntaxOp::Sub => (BinaryOp::Sub, l, r),
                SyntaxOp::Mul => (BinaryOp::Mul, l, r),
                SyntaxOp::Div => (BinaryOp::Div, l, r),
                SyntaxOp::Mod => (BinaryOp::Mod, l, r),
                SyntaxOp::Pow => (BinaryOp::Pow, l, r),
                SyntaxOp::Eq => (BinaryOp::Eq, l, r),
                SyntaxOp::Lt => (BinaryOp::Lt, l, r),
                SyntaxOp::Le => (BinaryOp::Le, l, r),
                SyntaxOp::Gt => (BinaryOp::Lt, r, l),
                SyntaxOp::Ge => (BinaryOp::Le, r, l),
            };
            Ok(fold(op, l, r))
        }
        Syntax::Call { func, args } => {
            let args = args
                .iter()
                .map(|a| lower(a, env))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Expr::call(func.clone(), args))
        }
    }
}

fn fold(op: BinaryOp, left: Expr, right: Expr) -> Expr {
    match (&left, &right) {
        (Expr::Const(a), Expr::Const(b)) => Expr::Const(apply_binary(op, *a, *b)),
        _ => Expr::binary(op, left, right),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/expression/compile.rs"]
mod tests;
