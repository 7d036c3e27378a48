use serde_json::Value;
use smallvec::SmallVec;

use crate::document::codec::DocValue;
use crate::document::path::{BindError, DocPath};
use crate::foundation::math::SpatialVector;

/// Joint types that are written by name instead of by motion subspace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum JointType {
    /// Three rotational DOFs parametrized by a quaternion.
    Spherical,
    /// Euler angles, Z then Y then X.
    EulerZYX,
    /// Euler angles, X then Y then Z.
    EulerXYZ,
    /// Euler angles, Y then X then Z.
    EulerYXZ,
    /// Three translational DOFs.
    TranslationXYZ,
}

impl JointType {
    /// Every named joint type.
    pub const ALL: [JointType; 5] = [
        JointType::Spherical,
        JointType::EulerZYX,
        JointType::EulerXYZ,
        JointType::EulerYXZ,
        JointType::TranslationXYZ,
    ];

    /// Name used in model documents.
    pub fn name(self) -> &'static str {
        match self {
            Self::Spherical => "JointTypeSpherical",
            Self::EulerZYX => "JointTypeEulerZYX",
            Self::EulerXYZ => "JointTypeEulerXYZ",
            Self::EulerYXZ => "JointTypeEulerYXZ",
            Self::TranslationXYZ => "JointTypeTranslationXYZ",
        }
    }

    /// Inverse of [`JointType::name`].
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }
}

/// Motion subspace columns of a joint, one per degree of freedom.
pub type MotionSubspace = SmallVec<[SpatialVector; 6]>;

/// Connection between a body and its parent.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Joint {
    /// No degrees of freedom.
    #[default]
    Fixed,
    /// A named joint type.
    Canonical(JointType),
    /// One to six degrees of freedom given by their motion subspace columns.
    Subspace(MotionSubspace),
}

impl Joint {
    /// Maximum number of degrees of freedom of a subspace joint.
    pub const MAX_DOFS: usize = 6;

    /// Degrees of freedom.
    pub fn dof_count(&self) -> usize {
        match self {
            Self::Fixed => 0,
            Self::Canonical(_) => 3,
            Self::Subspace(cols) => cols.len(),
        }
    }

    /// Single-DOF rotation about the unit axis `(x, y, z)`.
    pub fn revolute(x: f64, y: f64, z: f64) -> Self {
        Self::Subspace(smallvec::smallvec![SpatialVector::new(x, y, z, 0.0, 0.0, 0.0)])
    }
}

// Stored form, dispatched on the array length:
//   []                       fixed
//   ["JointTypeSpherical"]   named joint type (any string of the vocabulary)
//   [[6 numbers], ...]       1 to 6 motion subspace columns
impl DocValue for Joint {
    fn decode(value: &Value, path: &DocPath) -> Result<Self, BindError> {
        let items = value
            .as_array()
            .ok_or_else(|| BindError::shape(path, "joint (an array)"))?;

        if let [Value::String(name)] = items.as_slice() {
            if let Some(t) = JointType::from_name(name) {
                return Ok(Self::Canonical(t));
            }
        }

        if items.len() > Self::MAX_DOFS {
            return Err(BindError::shape(
                path,
                format!(
                    "joint with at most {} degrees of freedom (found {})",
                    Self::MAX_DOFS,
                    items.len()
                ),
            ));
        }
        if items.is_empty() {
            return Ok(Self::Fixed);
        }

        let mut cols = MotionSubspace::new();
        for (i, item) in items.iter().enumerate() {
            let col_path = path.index(i + 1);
            if item.as_array().map(Vec::len) != Some(6) {
                return Err(BindError::shape(
                    &col_path,
                    "joint motion subspace column (array of 6 numbers)",
                ));
            }
            cols.push(SpatialVector::decode(item, &col_path)?);
        }
        Ok(Self::Subspace(cols))
    }

    fn encode(&self) -> Value {
        match self {
            Self::Fixed => Value::Array(Vec::new()),
            Self::Canonical(t) => Value::Array(vec![Value::from(t.name())]),
            Self::Subspace(cols) => Value::Array(cols.iter().map(DocValue::encode).collect()),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/joint.rs"]
mod tests;
