//! Fixed-size linear algebra values exchanged with model documents.
//!
//! Single-precision types (`*f`) are what the viewport and marker code use;
//! double-precision types (`*d`, [`SpatialVector`]) are what the rigid-body
//! layer uses. Matrices are stored row-major.

use std::ops::{Add, Index, IndexMut, Sub};

/// Single-precision 3-vector.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Vector3f(pub [f32; 3]);

/// Single-precision 4-vector (used for RGBA colors).
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Vector4f(pub [f32; 4]);

/// Single-precision 3×3 matrix, row-major.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Matrix33f(pub [[f32; 3]; 3]);

/// Double-precision 3-vector.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Vector3d(pub [f64; 3]);

/// Six-element spatial vector `(wx, wy, wz, vx, vy, vz)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct SpatialVector(pub [f64; 6]);

/// Double-precision 3×3 matrix, row-major.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Matrix3d(pub [[f64; 3]; 3]);

impl Vector3f {
    /// Build a vector from its components.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self([x, y, z])
    }

    /// Vector with all components set to `v`.
    pub const fn splat(v: f32) -> Self {
        Self([v, v, v])
    }
}

impl Vector4f {
    /// Build a vector from its components.
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self([x, y, z, w])
    }

    /// Extend a 3-vector with a fourth component.
    pub const fn from_xyz(v: Vector3f, w: f32) -> Self {
        Self([v.0[0], v.0[1], v.0[2], w])
    }
}

impl Matrix33f {
    /// The 3×3 identity.
    pub const IDENTITY: Self = Self([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
}

impl Vector3d {
    /// The zero vector.
    pub const ZERO: Self = Self([0.0; 3]);

    /// Build a vector from its components.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self([x, y, z])
    }
}

impl SpatialVector {
    /// Build a spatial vector from its six components.
    pub const fn new(wx: f64, wy: f64, wz: f64, vx: f64, vy: f64, vz: f64) -> Self {
        Self([wx, wy, wz, vx, vy, vz])
    }
}

impl Matrix3d {
    /// The 3×3 identity.
    pub const IDENTITY: Self = Self([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);

    /// Diagonal matrix with `d` on the diagonal.
    pub const fn diagonal(d: [f64; 3]) -> Self {
        Self([[d[0], 0.0, 0.0], [0.0, d[1], 0.0], [0.0, 0.0, d[2]]])
    }
}

macro_rules! impl_index {
    ($ty:ty, $elem:ty) => {
        impl Index<usize> for $ty {
            type Output = $elem;

            fn index(&self, i: usize) -> &$elem {
                &self.0[i]
            }
        }

        impl IndexMut<usize> for $ty {
            fn index_mut(&mut self, i: usize) -> &mut $elem {
                &mut self.0[i]
            }
        }
    };
}

impl_index!(Vector3f, f32);
impl_index!(Vector4f, f32);
impl_index!(Matrix33f, [f32; 3]);
impl_index!(Vector3d, f64);
impl_index!(SpatialVector, f64);
impl_index!(Matrix3d, [f64; 3]);

impl Add for Vector3f {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(std::array::from_fn(|i| self.0[i] + rhs.0[i]))
    }
}

impl Sub for Vector3f {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(std::array::from_fn(|i| self.0[i] - rhs.0[i]))
    }
}

/// Single-precision rotation quaternion stored as `(x, y, z, w)`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Quaternion {
    /// Vector part, x.
    pub x: f32,
    /// Vector part, y.
    pub y: f32,
    /// Vector part, z.
    pub z: f32,
    /// Scalar part.
    pub w: f32,
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quaternion {
    /// The identity rotation.
    pub const IDENTITY: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 1.0,
    };

    /// Rotation of `angle_deg` degrees about `axis`, following the `glRotate`
    /// convention. The axis is used as given (not normalized).
    pub fn from_gl_rotate(angle_deg: f32, axis: Vector3f) -> Self {
        let half = angle_deg.to_radians() * 0.5;
        let st = half.sin();
        Self {
            x: st * axis[0],
            y: st * axis[1],
            z: st * axis[2],
            w: half.cos(),
        }
    }

    /// Inverse of [`Quaternion::from_gl_rotate`]: `(angle_deg, axis)`.
    ///
    /// A (near-)identity rotation yields angle 0 about the x axis.
    pub fn to_gl_rotate(self) -> (f32, Vector3f) {
        let w = self.w.clamp(-1.0, 1.0);
        let half = w.acos();
        let st = half.sin();
        if st.abs() <= 1e-6 {
            return (0.0, Vector3f::new(1.0, 0.0, 0.0));
        }
        let axis = Vector3f::new(self.x / st, self.y / st, self.z / st);
        ((half * 2.0).to_degrees(), axis)
    }

    /// Component-wise comparison with an absolute tolerance.
    pub fn approx_eq(self, other: Self, tol: f32) -> bool {
        (self.x - other.x).abs() <= tol
            && (self.y - other.y).abs() <= tol
            && (self.z - other.z).abs() <= tol
            && (self.w - other.w).abs() <= tol
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
