use super::*;
use crate::expression::expr::BinaryOp;
use serde_json::json;

fn at(key: &str) -> DocPath {
    DocPath::root().field(key)
}

#[test]
fn encodes_tagged_mappings() {
    let e = Expr::binary(BinaryOp::Mul, Expr::Const(2.0), Expr::var("x", 3.0));
    assert_eq!(
        e.encode(),
        json!({
            "_type": "expression",
            "operation": "mul",
            "name": "",
            "value": 0.0,
            "p1": {"_type": "expression", "operation": "const", "name": "", "value": 2.0},
            "p2": {"_type": "expression", "operation": "var", "name": "x", "value": 3.0},
        })
    );
}

#[test]
fn decodes_numbers_and_sparse_mappings() {
    assert_eq!(Expr::decode(&json!(1.5), &at("e")), Ok(Expr::Const(1.5)));
    assert_eq!(
        Expr::decode(&json!({"operation": "var", "name": "h"}), &at("e")),
        Ok(Expr::var("h", 0.0))
    );

    let e = Expr::decode(
        &json!({"operation": "add", "p1": 1, "p2": {"operation": "const", "value": 2}}),
        &at("e"),
    )
    .unwrap();
    assert_eq!(e.evaluate(), 3.0);
}

#[test]
fn p2_without_p1_is_ignored() {
    let e = Expr::decode(&json!({"operation": "sin", "p2": 1}), &at("e")).unwrap();
    assert_eq!(e, Expr::call("sin", vec![]));

    let err = Expr::decode(&json!({"operation": "sub", "p2": 1}), &at("e")).unwrap_err();
    assert_eq!(err.path(), &at("e"));
}

#[test]
fn malformed_expressions_are_rejected() {
    let err = Expr::decode(&json!({"name": "x"}), &at("e")).unwrap_err();
    assert_eq!(err, BindError::missing(&at("e").field("operation")));

    assert!(Expr::decode(&json!({"operation": "const", "p1": 1}), &at("e")).is_err());
    assert!(Expr::decode(&json!("x + 1"), &at("e")).is_err());

    let err = Expr::decode(
        &json!({"operation": "add", "p1": 1, "p2": {"operation": "mul", "p1": 2}}),
        &at("e"),
    )
    .unwrap_err();
    assert_eq!(err.path(), &at("e").field("p2"));
}

#[test]
fn calls_keep_two_parameters() {
    let e = Expr::call(
        "clamp",
        vec![Expr::var("x", 1.0), Expr::Const(0.0), Expr::Const(2.0)],
    );
    let back = Expr::decode(&e.encode(), &at("e")).unwrap();
    assert_eq!(
        back,
        Expr::call("clamp", vec![Expr::var("x", 1.0), Expr::Const(0.0)])
    );
}

#[test]
fn expression_vectors_and_matrices() {
    let v = ExprVec3::new(
        Expr::var("w", 0.25),
        Expr::Const(1.0),
        Expr::binary(BinaryOp::Sub, Expr::var("w", 0.25), Expr::Const(1.0)),
    );
    let back = ExprVec3::decode(&v.encode(), &at("v")).unwrap();
    assert!(back.approx_eq(&v, 1e-12));

    let plain = ExprVec3::decode(&json!([1, 2, 3]), &at("v")).unwrap();
    assert_eq!(plain, ExprVec3::from_values(1.0, 2.0, 3.0));

    let err = ExprVec3::decode(&json!([1, 2]), &at("v")).unwrap_err();
    assert_eq!(err.path(), &at("v"));

    let m = ExprMat33::decode(&json!([[1, 0, 0], [0, 1, 0], [0, 0, 1]]), &at("m")).unwrap();
    assert_eq!(m, ExprMat33::identity());
    let err = ExprMat33::decode(&json!([[1, 0, 0], [0, 1, "a"], [0, 0, 1]]), &at("m"))
        .unwrap_err();
    assert_eq!(err.path(), &at("m").index(2).index(3));
}
