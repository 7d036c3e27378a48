use serde_json::{Map, Value};

use crate::document::codec::{DocValue, as_object, field_or, field_required, member};
use crate::document::path::{BindError, DocPath};
use crate::expression::vector::ExprVec3;
use crate::foundation::math::{Quaternion, Vector3f, Vector4f};

/// How a body segment is drawn: a mesh (or primitive) placed and sized by
/// parametric vectors.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Visuals {
    /// Per-axis scale.
    pub scale: ExprVec3,
    /// Target size of the mesh bounding box; zero means "use `scale`".
    pub dimensions: ExprVec3,
    /// RGBA color.
    pub color: Vector4f,
    /// Point of the mesh placed at `translate`.
    pub mesh_center: ExprVec3,
    /// Offset in body coordinates; `(-1, -1, -1)` when not given.
    pub translate: ExprVec3,
    /// Mesh orientation.
    pub orientation: Quaternion,
    /// Mesh source path.
    pub src: String,
}

impl Default for Visuals {
    fn default() -> Self {
        Self {
            scale: ExprVec3::from_values(1.0, 1.0, 1.0),
            dimensions: ExprVec3::default(),
            color: Self::UNSET_COLOR,
            mesh_center: ExprVec3::default(),
            translate: ExprVec3::from_values(-1.0, -1.0, -1.0),
            orientation: Quaternion::IDENTITY,
            src: String::new(),
        }
    }
}

impl Visuals {
    /// Color a visual gets when the document does not give one.
    pub const UNSET_COLOR: Vector4f = Vector4f::new(-1.0, -1.0, -1.0, 1.0);

    /// Comparison that tolerates the rounding of a document round trip.
    pub fn approx_eq(&self, other: &Visuals, tol: f64) -> bool {
        let tol_f = tol as f32;
        self.scale.approx_eq(&other.scale, tol)
            && self.dimensions.approx_eq(&other.dimensions, tol)
            && self
                .color
                .0
                .iter()
                .zip(&other.color.0)
                .all(|(a, b)| (a - b).abs() <= tol_f)
            && self.mesh_center.approx_eq(&other.mesh_center, tol)
            && self.translate.approx_eq(&other.translate, tol)
            && self.orientation.approx_eq(other.orientation, tol_f)
            && self.src == other.src
    }
}

// Every field of a stored visual is optional. A stored visual resets all
// fields to their defaults except the orientation, which keeps the base
// orientation unless `rotate` is given.
impl DocValue for Visuals {
    fn decode(value: &Value, path: &DocPath) -> Result<Self, BindError> {
        Self::decode_over(Visuals::default(), value, path)
    }

    fn decode_over(base: Self, value: &Value, path: &DocPath) -> Result<Self, BindError> {
        let obj = as_object(value, path, "visuals")?;
        let defaults = Visuals::default();

        let color = match member(obj, "color") {
            Some(c) if c.as_array().map(Vec::len) == Some(4) => {
                Vector4f::decode(c, &path.field("color"))?
            }
            Some(c) => Vector4f::from_xyz(Vector3f::decode(c, &path.field("color"))?, 1.0),
            None => defaults.color,
        };

        let orientation = match member(obj, "rotate") {
            Some(rotate) => {
                let rotate_path = path.field("rotate");
                let rotate = as_object(rotate, &rotate_path, "rotation")?;
                let axis: Vector3f = field_required(rotate, &rotate_path, "axis")?;
                let angle: f32 = field_required(rotate, &rotate_path, "angle")?;
                Quaternion::from_gl_rotate(angle, axis)
            }
            None => base.orientation,
        };

        Ok(Self {
            scale: field_or(obj, path, "scale", defaults.scale)?,
            dimensions: field_or(obj, path, "dimensions", defaults.dimensions)?,
            color,
            mesh_center: field_or(obj, path, "mesh_center", defaults.mesh_center)?,
            translate: field_or(obj, path, "translate", defaults.translate)?,
            orientation,
            src: field_or(obj, path, "src", defaults.src)?,
        })
    }

    fn encode(&self) -> Value {
        let (angle, axis) = self.orientation.to_gl_rotate();
        let mut rotate = Map::new();
        rotate.insert("axis".to_owned(), axis.encode());
        rotate.insert("angle".to_owned(), angle.encode());

        let mut obj = Map::new();
        obj.insert("scale".to_owned(), self.scale.encode());
        obj.insert("dimensions".to_owned(), self.dimensions.encode());
        obj.insert("color".to_owned(), self.color.encode());
        obj.insert("mesh_center".to_owned(), self.mesh_center.encode());
        obj.insert("translate".to_owned(), self.translate.encode());
        obj.insert("rotate".to_owned(), Value::Object(rotate));
        obj.insert("src".to_owned(), self.src.encode());
        Value::Object(obj)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/visuals.rs"]
mod tests;
