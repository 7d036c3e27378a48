use std::fmt;

/// One step of a document path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathElem {
    /// Mapping key.
    Field(String),
    /// 1-based array position (or integer mapping key).
    Index(usize),
}

/// Location of a node inside a document, from the root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DocPath(Vec<PathElem>);

impl DocPath {
    /// The document root.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Path of a mapping entry below this one.
    pub fn field(&self, key: impl Into<String>) -> Self {
        let mut elems = self.0.clone();
        elems.push(PathElem::Field(key.into()));
        Self(elems)
    }

    /// Path of a 1-based array element below this one.
    pub fn index(&self, i: usize) -> Self {
        let mut elems = self.0.clone();
        elems.push(PathElem::Index(i));
        Self(elems)
    }

    /// Steps from the root.
    pub fn elems(&self) -> &[PathElem] {
        &self.0
    }

    /// Path made of the first `len` steps.
    pub(crate) fn prefix(&self, len: usize) -> Self {
        Self(self.0[..len.min(self.0.len())].to_vec())
    }
}

impl fmt::Display for DocPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for p in &self.0 {
            match p {
                PathElem::Field(name) => write!(f, ".{name}")?,
                PathElem::Index(i) => write!(f, "[{i}]")?,
            }
        }
        Ok(())
    }
}

/// A document that does not have the shape a typed accessor needs.
///
/// Loading stops at the first such error; a partially valid model is never
/// returned.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BindError {
    /// The node exists but has the wrong shape.
    #[error("{path}: expected {expected}")]
    Shape {
        /// Offending node.
        path: DocPath,
        /// Shape the accessor needed.
        expected: String,
    },
    /// A required node is absent.
    #[error("{path}: required value is missing")]
    Missing {
        /// Absent node.
        path: DocPath,
    },
    /// A write had to pass through a node that cannot hold the requested
    /// child: a scalar, or an array addressed by key.
    #[error("{path}: node cannot hold the requested child")]
    NotAContainer {
        /// Scalar node on the way.
        path: DocPath,
    },
}

impl BindError {
    /// Shape mismatch at `path`.
    pub fn shape(path: &DocPath, expected: impl Into<String>) -> Self {
        Self::Shape {
            path: path.clone(),
            expected: expected.into(),
        }
    }

    /// Required value absent at `path`.
    pub fn missing(path: &DocPath) -> Self {
        Self::Missing { path: path.clone() }
    }

    /// Path the error refers to.
    pub fn path(&self) -> &DocPath {
        match self {
            Self::Shape { path, .. } | Self::Missing { path } | Self::NotAContainer { path } => {
                path
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/document/path.rs"]
mod tests;
