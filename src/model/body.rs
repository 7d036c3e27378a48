use serde_json::{Map, Value};

use crate::document::codec::{DocValue, as_object, field_or, field_required};
use crate::document::path::{BindError, DocPath};
use crate::foundation::math::{Matrix3d, Vector3d};

/// Rigid-body inertial parameters.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Body {
    /// Mass.
    pub mass: f64,
    /// Center of mass in body coordinates.
    pub com: Vector3d,
    /// Inertia about the center of mass.
    pub inertia: Matrix3d,
}

impl Default for Body {
    fn default() -> Self {
        Self {
            mass: 0.0,
            com: Vector3d::ZERO,
            inertia: Matrix3d::IDENTITY,
        }
    }
}

impl Body {
    /// Body with the given parameters.
    pub fn new(mass: f64, com: Vector3d, inertia: Matrix3d) -> Self {
        Self { mass, com, inertia }
    }
}

impl DocValue for Body {
    fn decode(value: &Value, path: &DocPath) -> Result<Self, BindError> {
        let obj = as_object(value, path, "body")?;
        Ok(Self {
            mass: field_required(obj, path, "mass")?,
            com: field_or(obj, path, "com", Vector3d::ZERO)?,
            inertia: field_or(obj, path, "inertia", Matrix3d::IDENTITY)?,
        })
    }

    fn encode(&self) -> Value {
        let mut obj = Map::new();
        obj.insert("mass".to_owned(), self.mass.encode());
        obj.insert("com".to_owned(), self.com.encode());
        obj.insert("inertia".to_owned(), self.inertia.encode());
        Value::Object(obj)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/body.rs"]
mod tests;
