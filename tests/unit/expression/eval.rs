use super::*;

fn c(v: f64) -> Expr {
    Expr::Const(v)
}

#[test]
fn arithmetic_is_ieee() {
    let cases = [
        (BinaryOp::Add, 0.1, 0.2, 0.1 + 0.2),
        (BinaryOp::Sub, 1.0, 3.5, -2.5),
        (BinaryOp::Mul, 1.5, -4.0, -6.0),
        (BinaryOp::Div, 1.0, 3.0, 1.0 / 3.0),
        (BinaryOp::Pow, 2.0, 10.0, 1024.0),
        (BinaryOp::Pow, 4.0, 0.5, 2.0),
    ];
    for (op, a, b, want) in cases {
        assert_eq!(evaluate(&Expr::binary(op, c(a), c(b))), want, "{op:?}");
    }
    assert_eq!(evaluate(&Expr::binary(BinaryOp::Div, c(1.0), c(0.0))), f64::INFINITY);
    assert!(evaluate(&Expr::binary(BinaryOp::Div, c(0.0), c(0.0))).is_nan());
}

#[test]
fn mod_truncates_operands() {
    assert_eq!(evaluate(&Expr::binary(BinaryOp::Mod, c(7.9), c(2.9))), 1.0);
    assert_eq!(evaluate(&Expr::binary(BinaryOp::Mod, c(-7.0), c(2.0))), -1.0);
    assert!(evaluate(&Expr::binary(BinaryOp::Mod, c(5.0), c(0.4))).is_nan());
}

#[test]
fn comparisons_yield_one_or_zero() {
    assert_eq!(evaluate(&Expr::binary(BinaryOp::Eq, c(2.0), c(2.0))), 1.0);
    assert_eq!(evaluate(&Expr::binary(BinaryOp::Eq, c(2.0), c(3.0))), 0.0);
    assert_eq!(evaluate(&Expr::binary(BinaryOp::Lt, c(2.0), c(3.0))), 1.0);
    assert_eq!(evaluate(&Expr::binary(BinaryOp::Lt, c(3.0), c(3.0))), 0.0);
    assert_eq!(evaluate(&Expr::binary(BinaryOp::Le, c(3.0), c(3.0))), 1.0);
}

#[test]
fn variables_use_their_snapshot() {
    let e = Expr::binary(BinaryOp::Mul, Expr::var("h", 1.5), c(2.0));
    assert_eq!(evaluate(&e), 3.0);
}

#[test]
fn named_operations_evaluate_to_zero() {
    let e = Expr::binary(BinaryOp::Add, c(1.0), Expr::call("sin", vec![c(0.5)]));
    assert_eq!(evaluate(&e), 1.0);
    assert_eq!(
        evaluate_checked(&e),
        Err(EvalError::UnknownOperation {
            name: "sin".to_owned()
        })
    );
    assert_eq!(evaluate_checked(&c(2.0)), Ok(2.0));
}
