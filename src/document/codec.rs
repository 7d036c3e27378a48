//! Typed codecs between domain values and document nodes.

use serde_json::{Map, Value};

use crate::document::path::{BindError, DocPath};
use crate::foundation::math::{Matrix33f, Matrix3d, SpatialVector, Vector3d, Vector3f, Vector4f};

/// A domain type with a document representation.
///
/// `decode` is only called for nodes that exist; defaults for absent nodes
/// are the accessor's business (see [`crate::DocNode::get_or_default`]).
pub trait DocValue: Sized {
    /// Decode an existing node. `path` locates `value` for error reports.
    fn decode(value: &Value, path: &DocPath) -> Result<Self, BindError>;

    /// Decode an existing node on top of `base`, the caller's default.
    ///
    /// Types whose stored form may leave parts unspecified take those parts
    /// from `base`; everything else ignores it.
    fn decode_over(base: Self, value: &Value, path: &DocPath) -> Result<Self, BindError> {
        let _ = base;
        Self::decode(value, path)
    }

    /// Build the node representing `self`.
    fn encode(&self) -> Value;
}

/// Member `key` of a mapping, treating `null` as absent.
pub(crate) fn member<'v>(obj: &'v Map<String, Value>, key: &str) -> Option<&'v Value> {
    obj.get(key).filter(|v| !v.is_null())
}

pub(crate) fn as_object<'v>(
    value: &'v Value,
    path: &DocPath,
    what: &str,
) -> Result<&'v Map<String, Value>, BindError> {
    value
        .as_object()
        .ok_or_else(|| BindError::shape(path, format!("{what} (an object)")))
}

/// Array of exactly `len` elements.
pub(crate) fn as_array_of<'v>(
    value: &'v Value,
    path: &DocPath,
    len: usize,
    what: &str,
) -> Result<&'v [Value], BindError> {
    match value.as_array() {
        Some(items) if items.len() == len => Ok(items),
        Some(items) => Err(BindError::shape(
            path,
            format!("{what} (array of {len} elements, found {})", items.len()),
        )),
        None => Err(BindError::shape(
            path,
            format!("{what} (array of {len} elements)"),
        )),
    }
}

/// Decode `key` when present, otherwise return `default`.
pub(crate) fn field_or<T: DocValue>(
    obj: &Map<String, Value>,
    path: &DocPath,
    key: &str,
    default: T,
) -> Result<T, BindError> {
    match member(obj, key) {
        Some(v) => T::decode(v, &path.field(key)),
        None => Ok(default),
    }
}

/// Decode `key`, which must be present.
pub(crate) fn field_required<T: DocValue>(
    obj: &Map<String, Value>,
    path: &DocPath,
    key: &str,
) -> Result<T, BindError> {
    let path = path.field(key);
    match member(obj, key) {
        Some(v) => T::decode(v, &path),
        None => Err(BindError::missing(&path)),
    }
}

fn decode_array<T: DocValue, const N: usize>(
    value: &Value,
    path: &DocPath,
    what: &str,
) -> Result<[T; N], BindError> {
    let items = as_array_of(value, path, N, what)?;
    let mut out = Vec::with_capacity(N);
    for (i, item) in items.iter().enumerate() {
        out.push(T::decode(item, &path.index(i + 1))?);
    }
    out.try_into()
        .map_err(|_| BindError::shape(path, format!("{what} (array of {N} elements)")))
}

fn encode_array<T: DocValue>(items: &[T]) -> Value {
    Value::Array(items.iter().map(DocValue::encode).collect())
}

// JSON numbers are finite; infinities and NaN are stored as these strings.
const POS_INF: &str = "inf";
const NEG_INF: &str = "-inf";
const NAN: &str = "nan";

impl DocValue for f64 {
    fn decode(value: &Value, path: &DocPath) -> Result<Self, BindError> {
        match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => match s.as_str() {
                POS_INF => Some(f64::INFINITY),
                NEG_INF => Some(f64::NEG_INFINITY),
                NAN => Some(f64::NAN),
                _ => None,
            },
            _ => None,
        }
        .ok_or_else(|| BindError::shape(path, "number"))
    }

    fn encode(&self) -> Value {
        let v = *self;
        if v.is_nan() {
            Value::from(NAN)
        } else if v == f64::INFINITY {
            Value::from(POS_INF)
        } else if v == f64::NEG_INFINITY {
            Value::from(NEG_INF)
        } else {
            Value::from(v)
        }
    }
}

impl DocValue for f32 {
    fn decode(value: &Value, path: &DocPath) -> Result<Self, BindError> {
        f64::decode(value, path).map(|v| v as f32)
    }

    fn encode(&self) -> Value {
        f64::from(*self).encode()
    }
}

impl DocValue for bool {
    fn decode(value: &Value, path: &DocPath) -> Result<Self, BindError> {
        value
            .as_bool()
            .ok_or_else(|| BindError::shape(path, "boolean"))
    }

    fn encode(&self) -> Value {
        Value::Bool(*self)
    }
}

impl DocValue for String {
    fn decode(value: &Value, path: &DocPath) -> Result<Self, BindError> {
        value
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| BindError::shape(path, "string"))
    }

    fn encode(&self) -> Value {
        Value::String(self.clone())
    }
}

impl<T: DocValue> DocValue for Vec<T> {
    fn decode(value: &Value, path: &DocPath) -> Result<Self, BindError> {
        let items = value
            .as_array()
            .ok_or_else(|| BindError::shape(path, "array"))?;
        items
            .iter()
            .enumerate()
            .map(|(i, item)| T::decode(item, &path.index(i + 1)))
            .collect()
    }

    fn encode(&self) -> Value {
        encode_array(self)
    }
}

impl DocValue for Vector3f {
    fn decode(value: &Value, path: &DocPath) -> Result<Self, BindError> {
        decode_array(value, path, "3d vector").map(Self)
    }

    fn encode(&self) -> Value {
        encode_array(&self.0)
    }
}

impl DocValue for Vector4f {
    fn decode(value: &Value, path: &DocPath) -> Result<Self, BindError> {
        decode_array(value, path, "4d vector").map(Self)
    }

    fn encode(&self) -> Value {
        encode_array(&self.0)
    }
}

impl DocValue for Vector3d {
    fn decode(value: &Value, path: &DocPath) -> Result<Self, BindError> {
        decode_array(value, path, "3d vector").map(Self)
    }

    fn encode(&self) -> Value {
        encode_array(&self.0)
    }
}

impl DocValue for SpatialVector {
    fn decode(value: &Value, path: &DocPath) -> Result<Self, BindError> {
        decode_array(value, path, "6d vector").map(Self)
    }

    fn encode(&self) -> Value {
        encode_array(&self.0)
    }
}

impl DocValue for Matrix33f {
    fn decode(value: &Value, path: &DocPath) -> Result<Self, BindError> {
        let rows: [Vector3f; 3] = decode_array(value, path, "3d matrix")?;
        Ok(Self(rows.map(|r| r.0)))
    }

    fn encode(&self) -> Value {
        encode_array(&self.0.map(Vector3f))
    }
}

impl DocValue for Matrix3d {
    fn decode(value: &Value, path: &DocPath) -> Result<Self, BindError> {
        let rows: [Vector3d; 3] = decode_array(value, path, "3d matrix")?;
        Ok(Self(rows.map(|r| r.0)))
    }

    fn encode(&self) -> Value {
        encode_array(&self.0.map(Vector3d))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/document/codec.rs"]
mod tests;
