use serde_json::{Map, Value};

use crate::document::codec::{DocValue, as_object, field_or};
use crate::document::path::{BindError, DocPath};
use crate::expression::vector::ExprVec3;
use crate::foundation::math::{Matrix3d, Vector3d};

/// Placement of a joint frame relative to its parent: translation `r` and
/// rotation `e` (the `E` entry of the stored form).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpatialTransform {
    /// Translation.
    pub r: Vector3d,
    /// Rotation matrix.
    pub e: Matrix3d,
}

impl Default for SpatialTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl SpatialTransform {
    /// No translation, no rotation.
    pub const IDENTITY: Self = Self {
        r: Vector3d::ZERO,
        e: Matrix3d::IDENTITY,
    };

    /// Pure translation.
    pub fn translation(r: Vector3d) -> Self {
        Self {
            r,
            e: Matrix3d::IDENTITY,
        }
    }
}

// `r` may hold expressions; they are evaluated on load.
impl DocValue for SpatialTransform {
    fn decode(value: &Value, path: &DocPath) -> Result<Self, BindError> {
        let obj = as_object(value, path, "spatial transform")?;
        let r: ExprVec3 = field_or(obj, path, "r", ExprVec3::default())?;
        Ok(Self {
            r: r.to_vector3d(),
            e: field_or(obj, path, "E", Matrix3d::IDENTITY)?,
        })
    }

    fn encode(&self) -> Value {
        let mut obj = Map::new();
        obj.insert("r".to_owned(), self.r.encode());
        obj.insert("E".to_owned(), self.e.encode());
        Value::Object(obj)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/transform.rs"]
mod tests;
