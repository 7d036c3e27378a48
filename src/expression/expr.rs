use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Add, Sub};

/// Variable environment used when compiling formulas: name -> current value.
pub type VarEnv = BTreeMap<String, f64>;

/// Built-in binary operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BinaryOp {
    /// `a + b`
    Add,
    /// `a - b`
    Sub,
    /// `a * b`
    Mul,
    /// `a / b`
    Div,
    /// `a % b` on operands truncated to integers.
    Mod,
    /// `a ^ b`
    Pow,
    /// `a == b`, yields 1 or 0.
    Eq,
    /// `a < b`, yields 1 or 0.
    Lt,
    /// `a <= b`, yields 1 or 0.
    Le,
}

impl BinaryOp {
    /// All built-in binary operations.
    pub const ALL: [BinaryOp; 9] = [
        BinaryOp::Add,
        BinaryOp::Sub,
        BinaryOp::Mul,
        BinaryOp::Div,
        BinaryOp::Mod,
        BinaryOp::Pow,
        BinaryOp::Eq,
        BinaryOp::Lt,
        BinaryOp::Le,
    ];

    /// Operation tag used in model documents.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
            Self::Div => "div",
            Self::Mod => "mod",
            Self::Pow => "pow",
            Self::Eq => "eq",
            Self::Lt => "lt",
            Self::Le => "le",
        }
    }

    /// Infix symbol used by the printer.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "^",
            Self::Eq => "==",
            Self::Lt => "<",
            Self::Le => "<=",
        }
    }

    /// Inverse of [`BinaryOp::tag`].
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.tag() == tag)
    }
}

/// A node of a scalar symbolic expression.
///
/// Variables carry the value they had when the tree was compiled; evaluation
/// never looks the name up again (see [`Expr::rebind`] for producing a fresh
/// tree against new values).
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Expr {
    /// Snapshot variable leaf.
    Var {
        /// Variable name as written in the formula.
        name: String,
        /// Value captured at compile time.
        value: f64,
    },
    /// Numeric constant.
    Const(f64),
    /// Built-in binary operation.
    Binary {
        /// Operation.
        op: BinaryOp,
        /// Left operand.
        left: Box<Expr>,
        /// Right operand.
        right: Box<Expr>,
    },
    /// Named operation written in call form, `name(a, b)`. Not evaluable.
    Call {
        /// Operation name.
        func: String,
        /// Arguments in order.
        args: Vec<Expr>,
    },
}

impl Default for Expr {
    fn default() -> Self {
        Self::zero()
    }
}

impl Expr {
    /// `const 0`, the neutral expression.
    pub const fn zero() -> Self {
        Self::Const(0.0)
    }

    /// Constant leaf.
    pub const fn constant(value: f64) -> Self {
        Self::Const(value)
    }

    /// Variable leaf with a snapshot value.
    pub fn var(name: impl Into<String>, value: f64) -> Self {
        Self::Var {
            name: name.into(),
            value,
        }
    }

    /// Binary node.
    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Self::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Named-operation node.
    pub fn call(func: impl Into<String>, args: Vec<Expr>) -> Self {
        Self::Call {
            func: func.into(),
            args,
        }
    }

    /// Document tag for this node's operation.
    pub fn operation(&self) -> &str {
        match self {
            Self::Var { .. } => "var",
            Self::Const(_) => "const",
            Self::Binary { op, .. } => op.tag(),
            Self::Call { func, .. } => func.as_str(),
        }
    }

    /// Variable name; empty for every other node kind.
    pub fn name(&self) -> &str {
        match self {
            Self::Var { name, .. } => name.as_str(),
            _ => "",
        }
    }

    /// Stored leaf value; 0 for operation nodes.
    pub fn value(&self) -> f64 {
        match self {
            Self::Var { value, .. } | Self::Const(value) => *value,
            _ => 0.0,
        }
    }

    /// Child nodes in order.
    pub fn parameters(&self) -> Vec<&Expr> {
        match self {
            Self::Var { .. } | Self::Const(_) => Vec::new(),
            Self::Binary { left, right, .. } => vec![left.as_ref(), right.as_ref()],
            Self::Call { args, .. } => args.iter().collect(),
        }
    }

    /// Assemble a node from its document fields.
    ///
    /// Returns a description of the expected shape when the parameter count
    /// does not fit the tag.
    pub(crate) fn from_parts(
        operation: &str,
        name: String,
        value: f64,
        mut parameters: Vec<Expr>,
    ) -> Result<Self, String> {
        match operation {
            "var" | "const" if !parameters.is_empty() => Err(format!(
                "'{operation}' expression without parameters (found {})",
                parameters.len()
            )),
            "var" => Ok(Self::Var { name, value }),
            "const" => Ok(Self::Const(value)),
            tag => match BinaryOp::from_tag(tag) {
                Some(op) => {
                    if parameters.len() != 2 {
                        return Err(format!(
                            "'{tag}' expression with parameters p1 and p2 (found {})",
                            parameters.len()
                        ));
                    }
                    let right = parameters.pop();
                    let left = parameters.pop();
                    match (left, right) {
                        (Some(l), Some(r)) => Ok(Self::binary(op, l, r)),
                        _ => Err(format!("'{tag}' expression with parameters p1 and p2")),
                    }
                }
                None => Ok(Self::Call {
                    func: tag.to_owned(),
                    args: parameters,
                }),
            },
        }
    }

    /// Copy of this tree with every variable whose name is in `env` holding
    /// the environment's value. Other variables keep their snapshot.
    pub fn rebind(&self, env: &VarEnv) -> Self {
        match self {
            Self::Var { name, value } => Self::Var {
                name: name.clone(),
                value: env.get(name).copied().unwrap_or(*value),
            },
            Self::Const(v) => Self::Const(*v),
            Self::Binary { op, left, right } => {
                Self::binary(*op, left.rebind(env), right.rebind(env))
            }
            Self::Call { func, args } => Self::Call {
                func: func.clone(),
                args: args.iter().map(|a| a.rebind(env)).collect(),
            },
        }
    }

    /// Structural equality with leaf values compared within `tol`
    /// (absolute, or relative to the larger magnitude when that is above 1).
    pub fn approx_eq(&self, other: &Expr, tol: f64) -> bool {
        fn close(a: f64, b: f64, tol: f64) -> bool {
            if a == b {
                return true;
            }
            let scale = a.abs().max(b.abs()).max(1.0);
            (a - b).abs() <= tol * scale
        }

        match (self, other) {
            (Self::Var { name: a, value: va }, Self::Var { name: b, value: vb }) => {
                a == b && close(*va, *vb, tol)
            }
            (Self::Const(a), Self::Const(b)) => close(*a, *b, tol),
            (
                Self::Binary {
                    op: oa,
                    left: la,
                    right: ra,
                },
                Self::Binary {
                    op: ob,
                    left: lb,
                    right: rb,
                },
            ) => oa == ob && la.approx_eq(lb, tol) && ra.approx_eq(rb, tol),
            (Self::Call { func: fa, args: aa }, Self::Call { func: fb, args: ab }) => {
                fa == fb
                    && aa.len() == ab.len()
                    && aa.iter().zip(ab).all(|(a, b)| a.approx_eq(b, tol))
            }
            _ => false,
        }
    }

    /// Numeric value of this tree. See [`crate::evaluate`].
    pub fn evaluate(&self) -> f64 {
        crate::expression::eval::evaluate(self)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::expression::print::serialize(self))
    }
}

impl Add<f64> for Expr {
    type Output = Expr;

    fn add(self, rhs: f64) -> Expr {
        Expr::binary(BinaryOp::Add, self, Expr::Const(rhs))
    }
}

impl Sub<f64> for Expr {
    type Output = Expr;

    fn sub(self, rhs: f64) -> Expr {
        Expr::binary(BinaryOp::Sub, self, Expr::Const(rhs))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/expression/expr.rs"]
mod tests;
