use crate::expression::error::CompileError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Span {
    pub(crate) start: usize,
    pub(crate) end: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Token {
    pub(crate) kind: TokenKind,
    pub(crate) span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TokenKind {
    Ident(String),
    Number(f64),

    LParen,
    RParen,
    Comma,

    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Caret,

    EqEq,
    Lt,
    Le,
    Gt,
    Ge,

    Eof,
}

pub(crate) fn lex(input: &str) -> Result<Vec<Token>, CompileError> {
    let mut out = Vec::new();
    let bytes = input.as_bytes();
    let mut i = 0usize;

    while i < bytes.len() {
        let c = bytes[i] as char;
        if c.is_ascii_whitespace() {
            i += 1;
            continue;
        }

        let start = i;

        // [0-9]+(.[0-9]*)?([eE][+-]?[0-9]+)? or .[0-9]+(...)
        if c.is_ascii_digit() || (c == '.' && next_is_digit(bytes, i)) {
            i = scan_digits(bytes, i);
            if i < bytes.len() && bytes[i] == b'.' {
                i = scan_digits(bytes, i + 1);
            }
            if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
                let e_pos = i;
                i += 1;
                if i < bytes.len() && matches!(bytes[i], b'+' | b'-') {
                    i += 1;
                }
                let exp_start = i;
                i = scan_digits(bytes, i);
                if exp_start == i {
                    return Err(CompileError::new(
                        e_pos,
                        "invalid number exponent (expected digits)",
                    ));
                }
            }

            let v: f64 = input[start..i]
                .parse()
                .map_err(|_| CompileError::new(start, "invalid number"))?;
            out.push(Token {
                kind: TokenKind::Number(v),
                span: Span { start, end: i },
            });
            continue;
        }

        if c.is_ascii_alphabetic() || c == '_' {
            i += 1;
            while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'_') {
                i += 1;
            }
            out.push(Token {
                kind: TokenKind::Ident(input[start..i].to_owned()),
                span: Span { start, end: i },
            });
            continue;
        }

        let two = input.get(i..i + 2);
        let kind = match two {
            Some("==") => Some(TokenKind::EqEq),
            Some("<=") => Some(TokenKind::Le),
            Some(">=") => Some(TokenKind::Ge),
            _ => None,
        };
        if let Some(kind) = kind {
            i += 2;
            out.push(Token {
                kind,
                span: Span { start, end: i },
            });
            continue;
        }

        let kind = match c {
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            ',' => TokenKind::Comma,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '%' => TokenKind::Percent,
            '^' => TokenKind::Caret,
            '<' => TokenKind::Lt,
            '>' => TokenKind::Gt,
            _ => {
                let ch = input[start..].chars().next().unwrap_or(c);
                return Err(CompileError::new(start, format!("unexpected character '{ch}'")));
            }
        };
        i += 1;
        out.push(Token {
            kind,
            span: Span { start, end: i },
        });
    }

    out.push(Token {
        kind: TokenKind::Eof,
        span: Span {
            start: input.len(),
            end: input.len(),
        },
    });

    Ok(out)
}

fn next_is_digit(bytes: &[u8], i: usize) -> bool {
    bytes.get(i + 1).is_some_and(u8::is_ascii_digit)
}

fn scan_digits(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    i
}

#[cfg(test)]
#[path = "../../tests/unit/expression/lexer.rs"]
mod tests;
