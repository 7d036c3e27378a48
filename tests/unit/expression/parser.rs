use super::*;

fn num(v: f64) -> Syntax {
    Syntax::Number(v)
}

fn ident(name: &str, offset: usize) -> Syntax {
    Syntax::Ident {
        name: name.to_owned(),
        offset,
    }
}

fn bin(op: SyntaxOp, left: Syntax, right: Syntax) -> Syntax {
    Syntax::Binary {
        op,
        left: Box::new(left),
        right: Box::new(right),
    }
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(
        parse_formula("1 + 2 * 3").unwrap(),
        bin(SyntaxOp::Add, num(1.0), bin(SyntaxOp::Mul, num(2.0), num(3.0)))
    );
    assert_eq!(
        parse_formula("8 - 2 - 1").unwrap(),
        bin(SyntaxOp::Sub, bin(SyntaxOp::Sub, num(8.0), num(2.0)), num(1.0))
    );
}

#[test]
fn power_is_right_associative_and_above_negation() {
    assert_eq!(
        parse_formula("2 ^ 3 ^ 2").unwrap(),
        bin(SyntaxOp::Pow, num(2.0), bin(SyntaxOp::Pow, num(3.0), num(2.0)))
    );
    assert_eq!(
        parse_formula("-x ^ 2").unwrap(),
        Syntax::Neg(Box::new(bin(SyntaxOp::Pow, ident("x", 1), num(2.0))))
    );
    assert_eq!(
        parse_formula("2 ^ -1").unwrap(),
        bin(SyntaxOp::Pow, num(2.0), Syntax::Neg(Box::new(num(1.0))))
    );
}

#[test]
fn comparison_is_lowest() {
    assert_eq!(
        parse_formula("a + 1 >= b").unwrap(),
        bin(
            SyntaxOp::Ge,
            bin(SyntaxOp::Add, ident("a", 0), num(1.0)),
            ident("b", 9)
        )
    );
}

#[test]
fn calls_and_parentheses() {
    assert_eq!(
        parse_formula("max(a, (1 + 2) * 3)").unwrap(),
        Syntax::Call {
            func: "max".to_owned(),
            args: vec![
                ident("a", 4),
                bin(SyntaxOp::Mul, bin(SyntaxOp::Add, num(1.0), num(2.0)), num(3.0)),
            ],
        }
    );
    assert_eq!(
        parse_formula("now()").unwrap(),
        Syntax::Call {
            func: "now".to_owned(),
            args: vec![],
        }
    );
}

#[test]
fn leading_equals_is_ignored_and_offsets_are_kept() {
    assert_eq!(parse_formula("=x").unwrap(), ident("x", 1));
    assert_eq!(parse_formula("  = 2").unwrap(), num(2.0));
    assert_eq!(parse_formula("=1 +").unwrap_err().offset, 4);
}

#[test]
fn malformed_input_reports_an_offset() {
    let err = parse_formula("").unwrap_err();
    assert_eq!(err.offset, 0);
    assert_eq!(err.message, "empty expression");

    assert_eq!(parse_formula("   ").unwrap_err().offset, 3);
    assert_eq!(parse_formula("(1 + 2").unwrap_err().offset, 6);
    assert_eq!(parse_formula("1 2").unwrap_err().offset, 2);
    assert_eq!(parse_formula("* 2").unwrap_err().offset, 0);
    assert_eq!(parse_formula("f(1,").unwrap_err().offset, 4);
}

#[test]
fn deep_nesting_is_rejected_not_overflowed() {
    for n in [2_000, 20_000] {
        let src = format!("{}1{}", "(".repeat(n), ")".repeat(n));
        let err = parse_formula(&src).unwrap_err();
        assert_eq!(err.message, "expression nested too deeply");
        assert!(err.offset < n);
    }

    let negs = format!("{}x", "-".repeat(5_000));
    assert_eq!(
        parse_formula(&negs).unwrap_err().message,
        "expression nested too deeply"
    );

    let powers = vec!["2"; 5_000].join(" ^ ");
    assert!(parse_formula(&powers).is_err());

    let long_sum = vec!["x"; 5_000].join(" + ");
    assert!(parse_formula(&long_sum).is_err());
}

#[test]
fn moderate_nesting_still_parses() {
    let src = format!("{}1{}", "(".repeat(50), ")".repeat(50));
    assert_eq!(parse_formula(&src).unwrap(), num(1.0));

    let sum = vec!["1"; 100].join(" + ");
    assert!(parse_formula(&sum).is_ok());
}
