//! Scalar symbolic expressions: tree model, evaluation, printing, and the
//! formula compiler (lexer -> parser -> variable binding).

pub(crate) mod ast;
pub(crate) mod compile;
pub(crate) mod error;
pub(crate) mod eval;
pub(crate) mod expr;
pub(crate) mod lexer;
pub(crate) mod parser;
pub(crate) mod print;
pub(crate) mod vector;
