use super::*;

fn sample() -> Expr {
    // 2 * x + 1
    Expr::binary(
        BinaryOp::Add,
        Expr::binary(BinaryOp::Mul, Expr::constant(2.0), Expr::var("x", 3.0)),
        Expr::constant(1.0),
    )
}

#[test]
fn tags_round_trip() {
    for op in BinaryOp::ALL {
        assert_eq!(BinaryOp::from_tag(op.tag()), Some(op));
    }
    assert_eq!(BinaryOp::from_tag("sin"), None);
}

#[test]
fn accessors_follow_node_kind() {
    let e = sample();
    assert_eq!(e.operation(), "add");
    assert_eq!(e.name(), "");
    assert_eq!(e.value(), 0.0);
    assert_eq!(e.parameters().len(), 2);

    let v = Expr::var("height", 1.8);
    assert_eq!(v.operation(), "var");
    assert_eq!(v.name(), "height");
    assert_eq!(v.value(), 1.8);
    assert!(v.parameters().is_empty());

    let c = Expr::call("clamp", vec![Expr::zero(), Expr::constant(1.0), Expr::zero()]);
    assert_eq!(c.operation(), "clamp");
    assert_eq!(c.parameters().len(), 3);
}

#[test]
fn from_parts_validates_parameter_counts() {
    assert_eq!(
        Expr::from_parts("const", String::new(), 4.0, vec![]),
        Ok(Expr::Const(4.0))
    );
    assert!(Expr::from_parts("var", "x".into(), 1.0, vec![Expr::zero()]).is_err());
    assert!(Expr::from_parts("add", String::new(), 0.0, vec![Expr::zero()]).is_err());

    let e = Expr::from_parts(
        "sub",
        String::new(),
        0.0,
        vec![Expr::constant(5.0), Expr::constant(2.0)],
    )
    .unwrap();
    assert_eq!(e.evaluate(), 3.0);

    let call = Expr::from_parts("sin", String::new(), 0.0, vec![Expr::zero()]).unwrap();
    assert_eq!(call, Expr::call("sin", vec![Expr::zero()]));
}

#[test]
fn rebind_replaces_only_known_variables() {
    let e = Expr::binary(BinaryOp::Add, Expr::var("x", 1.0), Expr::var("y", 2.0));
    let mut env = VarEnv::new();
    env.insert("x".to_owned(), 10.0);

    let fresh = e.rebind(&env);
    assert_eq!(fresh.evaluate(), 12.0);
    assert_eq!(e.evaluate(), 3.0);
}

#[test]
fn approx_eq_tolerates_rounding_only() {
    let a = Expr::var("x", 0.1 + 0.2);
    assert!(a.approx_eq(&Expr::var("x", 0.3), 1e-9));
    assert!(!a.approx_eq(&Expr::var("y", 0.3), 1e-9));
    assert!(!a.approx_eq(&Expr::Const(0.3), 1e-9));
    assert!(Expr::Const(1e6).approx_eq(&Expr::Const(1e6 + 1e-4), 1e-9));
    assert!(!sample().approx_eq(&(sample() + 1e-3), 1e-9));
}

#[test]
fn display_uses_the_printer() {
    assert_eq!(sample().to_string(), "2 * x + 1");
    assert_eq!((Expr::var("x", 0.0) - 0.5).to_string(), "x - 0.5");
}
