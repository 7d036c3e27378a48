use super::*;

fn kinds(src: &str) -> Vec<TokenKind> {
    lex(src).unwrap().into_iter().map(|t| t.kind).collect()
}

#[test]
fn lexes_operators_and_identifiers() {
    assert_eq!(
        kinds("a_1 <= (b2 % 3)^x"),
        vec![
            TokenKind::Ident("a_1".to_owned()),
            TokenKind::Le,
            TokenKind::LParen,
            TokenKind::Ident("b2".to_owned()),
            TokenKind::Percent,
            TokenKind::Number(3.0),
            TokenKind::RParen,
            TokenKind::Caret,
            TokenKind::Ident("x".to_owned()),
            TokenKind::Eof,
        ]
    );
    assert_eq!(
        kinds("== < > >= , - + * /"),
        vec![
            TokenKind::EqEq,
            TokenKind::Lt,
            TokenKind::Gt,
            TokenKind::Ge,
            TokenKind::Comma,
            TokenKind::Minus,
            TokenKind::Plus,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn lexes_number_forms() {
    assert_eq!(
        kinds("1 2.5 .5 3. 1e3 2.5E-2"),
        vec![
            TokenKind::Number(1.0),
            TokenKind::Number(2.5),
            TokenKind::Number(0.5),
            TokenKind::Number(3.0),
            TokenKind::Number(1000.0),
            TokenKind::Number(0.025),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn spans_are_byte_offsets() {
    let toks = lex("  ab + 1").unwrap();
    assert_eq!(toks[0].span, Span { start: 2, end: 4 });
    assert_eq!(toks[1].span, Span { start: 5, end: 6 });
    assert_eq!(toks[3].span, Span { start: 8, end: 8 });
}

#[test]
fn rejects_bad_input() {
    let err = lex("1 + $").unwrap_err();
    assert_eq!(err.offset, 4);
    assert!(err.message.contains('$'));

    let err = lex("2e+").unwrap_err();
    assert_eq!(err.offset, 1);

    // A lone `=` is not an operator.
    assert_eq!(lex("a = b").unwrap_err().offset, 2);
    assert_eq!(lex("x ° 2").unwrap_err().offset, 2);
}
