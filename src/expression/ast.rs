/// Untyped formula syntax, before variables are bound.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Syntax {
    Number(f64),
    Ident {
        name: String,
        offset: usize,
    },
    Neg(Box<Syntax>),
    Binary {
        op: SyntaxOp,
        left: Box<Syntax>,
        right: Box<Syntax>,
    },
    Call {
        func: String,
        args: Vec<Syntax>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SyntaxOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
    Eq,
    Lt,
    Le,
    // Lowered by swapping operands: `a > b` is `b < a`.
    Gt,
    Ge,
}
