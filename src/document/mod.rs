//! Shared model documents and typed access to their nodes.

pub(crate) mod codec;
pub(crate) mod expr;
pub(crate) mod path;
pub(crate) mod session;
