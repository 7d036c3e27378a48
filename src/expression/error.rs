/// Formula text that could not be turned into an expression tree.
///
/// Recoverable: callers typically fall back to [`crate::Expr::zero`] and show
/// the message to the user.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("expression error at byte {offset}: {message}")]
pub struct CompileError {
    /// Byte offset into the formula where the problem was detected.
    pub offset: usize,
    /// Human readable description.
    pub message: String,
}

impl CompileError {
    /// Build an error at `offset`.
    pub fn new(offset: usize, message: impl Into<String>) -> Self {
        Self {
            offset,
            message: message.into(),
        }
    }
}

/// Failure reported by [`crate::evaluate_checked`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// A named operation has no numeric meaning.
    #[error("unknown operation '{name}'")]
    UnknownOperation {
        /// Operation name.
        name: String,
    },
}
