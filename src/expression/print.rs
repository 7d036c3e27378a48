use crate::expression::expr::Expr;

/// Render an expression as formula text.
///
/// Equivalent to [`serialize_at`] with level 0.
pub fn serialize(expr: &Expr) -> String {
    serialize_at(expr, 0)
}

/// Render an expression as formula text at a nesting `level`.
///
/// Every binary node below the top level is parenthesized, whatever the
/// operator precedence, so `2 * x + 1` nested once becomes `(2 * x + 1)`.
/// Negative constants below the top level are parenthesized too.
/// Named operations always print in call form with arguments at level 0.
pub fn serialize_at(expr: &Expr, level: usize) -> String {
    match expr {
        Expr::Var { name, .. } => name.clone(),
        Expr::Const(v) => {
            let text = format_compact(*v);
            // `-2 ^ x` would read back as `-(2 ^ x)`.
            if level > 0 && text.starts_with('-') {
                format!("({text})")
            } else {
                text
            }
        }
        Expr::Binary { op, left, right } => {
            let body = format!(
                "{} {} {}",
                serialize_at(left, level + 1),
                op.symbol(),
                serialize_at(right, level + 1)
            );
            if level > 0 { format!("({body})") } else { body }
        }
        Expr::Call { func, args } => {
            let args: Vec<String> = args.iter().map(serialize).collect();
            format!("{func}({})", args.join(","))
        }
    }
}

/// Six-decimal fixed notation with trailing zeros and a trailing point removed.
///
/// `2.0 -> "2"`, `2.5 -> "2.5"`, `0.1234567 -> "0.123457"`.
pub fn format_compact(value: f64) -> String {
    let s = format!("{value:.6}");
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.').to_owned()
}

#[cfg(test)]
#[path = "../../tests/unit/expression/print.rs"]
mod tests;
