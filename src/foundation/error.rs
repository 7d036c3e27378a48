use crate::document::path::BindError;
use crate::expression::error::CompileError;

/// Convenience result type used across the crate.
pub type PuppeteerResult<T> = Result<T, PuppeteerError>;

/// Top-level error taxonomy used by loading and compile APIs.
#[derive(thiserror::Error, Debug)]
pub enum PuppeteerError {
    /// A model document does not have the shape a typed accessor requires.
    #[error("structure error: {0}")]
    Structure(#[from] BindError),

    /// User-entered expression text failed to compile.
    #[error("compile error: {0}")]
    Compile(#[from] CompileError),

    /// Document text could not be parsed or written.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Reading or writing a document file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Wrapped lower-level error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PuppeteerError {
    /// Build a [`PuppeteerError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for PuppeteerError {
    fn from(e: serde_json::Error) -> Self {
        Self::serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
