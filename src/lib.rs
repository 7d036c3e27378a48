//! Parametric expressions and typed model documents for skeleton fitting.
//!
//! Model documents are JSON trees shared by every [`DocNode`] that addresses
//! them. Numeric model parameters may be stored as symbolic [`Expr`] trees,
//! compiled from formula text with [`compile`] against a [`VarEnv`] of named
//! values.
//!
//! ```
//! use puppeteer_doc::{Document, ExprVec3, VarEnv, compile};
//!
//! let mut env = VarEnv::new();
//! env.insert("height".to_owned(), 1.8);
//!
//! let doc = Document::new();
//! let offset = ExprVec3::new(
//!     compile("0", &env).unwrap(),
//!     compile("height * 0.5", &env).unwrap(),
//!     compile("0", &env).unwrap(),
//! );
//! doc.field("offset").set(&offset).unwrap();
//!
//! let back: ExprVec3 = doc.field("offset").get().unwrap();
//! assert!((back.to_vector3d()[1] - 0.9).abs() < 1e-12);
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod document;
mod expression;
mod foundation;
mod model;

pub use document::codec::DocValue;
pub use document::path::{BindError, DocPath, PathElem};
pub use document::session::{DocNode, Document};
pub use expression::compile::{compile, compile_or_zero};
pub use expression::error::{CompileError, EvalError};
pub use expression::eval::{evaluate, evaluate_checked};
pub use expression::expr::{BinaryOp, Expr, VarEnv};
pub use expression::print::{format_compact, serialize, serialize_at};
pub use expression::vector::{ExprMat33, ExprVec3};
pub use foundation::error::{PuppeteerError, PuppeteerResult};
pub use foundation::math::{
    Matrix3d, Matrix33f, Quaternion, SpatialVector, Vector3d, Vector3f, Vector4f,
};
pub use model::body::Body;
pub use model::frame::{ModelFrame, load_model_frames};
pub use model::joint::{Joint, JointType, MotionSubspace};
pub use model::transform::SpatialTransform;
pub use model::visuals::Visuals;
