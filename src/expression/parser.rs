use crate::expression::ast::{Syntax, SyntaxOp};
use crate::expression::error::CompileError;
use crate::expression::lexer::{Token, TokenKind, lex};

/// Parse formula text into untyped syntax.
///
/// Precedence, lowest first: comparison, additive, multiplicative, unary
/// minus, power (right-associative). `-x ^ 2` is `-(x ^ 2)` and `2 ^ -1` is
/// accepted.
pub(crate) fn parse_formula(src: &str) -> Result<Syntax, CompileError> {
    // A leading `=` marks formula input in property editors; blank it so byte
    // offsets still point into `src`.
    let lead = src.len() - src.trim_start().len();
    let blanked;
    let input = if src[lead..].starts_with('=') {
        blanked = format!("{} {}", &src[..lead], &src[lead + 1..]);
        blanked.as_str()
    } else {
        src
    };

    let tokens = lex(input)?;
    let mut p = Parser {
        tokens,
        pos: 0,
        depth: 0,
    };
    if p.peek().kind == TokenKind::Eof {
        return Err(CompileError::new(src.len(), "empty expression"));
    }
    let syntax = p.parse_comparison()?;
    p.expect(TokenKind::Eof)?;
    Ok(syntax)
}

// Bounds the height of the syntax tree: every nested sub-expression and every
// chained operator counts one level.
const MAX_DEPTH: usize = 256;

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
}

impl Parser {
    fn enter(&mut self) -> Result<(), CompileError> {
        if self.depth >= MAX_DEPTH {
            return Err(CompileError::new(
                self.peek().span.start,
                "expression nested too deeply",
            ));
        }
        self.depth += 1;
        Ok(())
    }

    fn peek(&self) -> &Token {
        // The token stream always ends with Eof and `bump` never moves past it.
        &self.tokens[self.pos]
    }

    fn bump(&mut self) -> Token {
        let t = self.tokens[self.pos].clone();
        if t.kind != TokenKind::Eof {
            self.pos += 1;
        }
        t
    }

    fn expect(&mut self, kind: TokenKind) -> Result<(), CompileError> {
        if self.peek().kind == kind {
            self.bump();
            Ok(())
        } else {
            Err(CompileError::new(
                self.peek().span.start,
                format!("expected {kind:?}, found {:?}", self.peek().kind),
            ))
        }
    }

    fn consume(&mut self, kind: TokenKind) -> bool {
        if self.peek().kind == kind {
            self.bump();
            true
        } else {
            false
        }
    }

    fn binary(op: SyntaxOp, left: Syntax, right: Syntax) -> Syntax {
        Syntax::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    fn parse_comparison(&mut self) -> Result<Syntax, CompileError> {
        self.enter()?;
        let mut levels = 1;
        let mut e = self.parse_term()?;
        loop {
            let op = match self.peek().kind {
                TokenKind::EqEq => SyntaxOp::Eq,
                TokenKind::Lt => SyntaxOp::Lt,
                TokenKind::Le => SyntaxOp::Le,
                TokenKind::Gt => SyntaxOp::Gt,
                TokenKind::Ge => SyntaxOp::Ge,
                _ => break,
            };
            self.bump();
            self.enter()?;
            levels += 1;
            let r = self.parse_term()?;
            e = Self::binary(op, e, r);
        }
        self.depth -= levels;
        Ok(e)
    }

    fn parse_term(&mut self) -> Result<Syntax, CompileError> {
        let mut levels = 0;
        let mut e = self.parse_factor()?;
        loop {
            let op = if self.consume(TokenKind::Plus) {
                SyntaxOp::Add
            } else if self.consume(TokenKind::Minus) {
                SyntaxOp::Sub
            } else {
                break;
            };
            self.enter()?;
            levels += 1;
            let r = self.parse_factor()?;
            e = Self::binary(op, e, r);
        }
        self.depth -= levels;
        Ok(e)
    }

    fn parse_factor(&mut self) -> Result<Syntax, CompileError> {
        let mut levels = 0;
        let mut e = self.parse_unary()?;
        loop {
            let op = if self.consume(TokenKind::Star) {
                SyntaxOp::Mul
            } else if self.consume(TokenKind::Slash) {
                SyntaxOp::Div
            } else if self.consume(TokenKind::Percent) {
                SyntaxOp::Mod
            } else {
                break;
            };
            self.enter()?;
            levels += 1;
            let r = self.parse_unary()?;
            e = Self::binary(op, e, r);
        }
        self.depth -= levels;
        Ok(e)
    }

    fn parse_unary(&mut self) -> Result<Syntax, CompileError> {
        self.enter()?;
        let e = if self.consume(TokenKind::Minus) {
            Syntax::Neg(Box::new(self.parse_unary()?))
        } else {
            self.parse_power()?
        };
        self.depth -= 1;
        Ok(e)
    }

    fn parse_power(&mut self) -> Result<Syntax, CompileError> {
        let base = self.parse_primary()?;
        if self.consume(TokenKind::Caret) {
            let exp = self.parse_unary()?;
            return Ok(Self::binary(SyntaxOp::Pow, base, exp));
        }
        Ok(base)
    }

    fn parse_args(&mut self) -> Result<Vec<Syntax>, CompileError> {
        let mut args = Vec::new();
        if self.consume(TokenKind::RParen) {
            return Ok(args);
        }
        loop {
            args.push(self.parse_comparison()?);
            if self.consume(TokenKind::Comma) {
                continue;
            }
            self.expect(TokenKind::RParen)?;
            return Ok(args);
        }
    }

    fn parse_primary(&mut self) -> Result<Syntax, CompileError> {
        let t = self.bump();
        match t.kind {
            TokenKind::Number(v) => Ok(Syntax::Number(v)),
            TokenKind::Ident(name) => {
                if self.consume(TokenKind::LParen) {
                    let args = self.parse_args()?;
                    return Ok(Syntax::Call { func: name, args });
                }
                Ok(Syntax::Ident {
                    name,
                    offset: t.span.start,
                })
            }
            TokenKind::LParen => {
                let e = self.parse_comparison()?;
                self.expect(TokenKind::RParen)?;
                Ok(e)
            }
            other => Err(CompileError::new(
                t.span.start,
                format!("unexpected token {other:?}"),
            )),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/expression/parser.rs"]
mod tests;
