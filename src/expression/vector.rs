use std::ops::{Add, Index, Sub};

use crate::expression::expr::Expr;
use crate::foundation::math::{Matrix33f, Matrix3d, Vector3d, Vector3f};

/// Three expressions, one per axis. Used for parametric positions and sizes.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ExprVec3(pub [Expr; 3]);

impl ExprVec3 {
    /// Build from three expressions.
    pub fn new(x: Expr, y: Expr, z: Expr) -> Self {
        Self([x, y, z])
    }

    /// Three constant leaves.
    pub fn from_values(x: f64, y: f64, z: f64) -> Self {
        Self::new(Expr::Const(x), Expr::Const(y), Expr::Const(z))
    }

    /// X component.
    pub fn x(&self) -> &Expr {
        &self.0[0]
    }

    /// Y component.
    pub fn y(&self) -> &Expr {
        &self.0[1]
    }

    /// Z component.
    pub fn z(&self) -> &Expr {
        &self.0[2]
    }

    /// Replace the x component.
    pub fn set_x(&mut self, e: Expr) {
        self.0[0] = e;
    }

    /// Replace the y component.
    pub fn set_y(&mut self, e: Expr) {
        self.0[1] = e;
    }

    /// Replace the z component.
    pub fn set_z(&mut self, e: Expr) {
        self.0[2] = e;
    }

    /// Evaluate every component in single precision.
    pub fn to_vector3f(&self) -> Vector3f {
        Vector3f(std::array::from_fn(|i| self.0[i].evaluate() as f32))
    }

    /// Evaluate every component in double precision.
    pub fn to_vector3d(&self) -> Vector3d {
        Vector3d(std::array::from_fn(|i| self.0[i].evaluate()))
    }

    /// Component-wise [`Expr::approx_eq`].
    pub fn approx_eq(&self, other: &ExprVec3, tol: f64) -> bool {
        self.0.iter().zip(&other.0).all(|(a, b)| a.approx_eq(b, tol))
    }
}

impl Index<usize> for ExprVec3 {
    type Output = Expr;

    fn index(&self, i: usize) -> &Expr {
        &self.0[i]
    }
}

impl Add<Vector3f> for ExprVec3 {
    type Output = ExprVec3;

    fn add(self, rhs: Vector3f) -> ExprVec3 {
        let [x, y, z] = self.0;
        ExprVec3::new(
            x + f64::from(rhs[0]),
            y + f64::from(rhs[1]),
            z + f64::from(rhs[2]),
        )
    }
}

impl Sub<Vector3f> for ExprVec3 {
    type Output = ExprVec3;

    fn sub(self, rhs: Vector3f) -> ExprVec3 {
        let [x, y, z] = self.0;
        ExprVec3::new(
            x - f64::from(rhs[0]),
            y - f64::from(rhs[1]),
            z - f64::from(rhs[2]),
        )
    }
}

/// Row-major 3×3 matrix of expressions.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ExprMat33(pub [ExprVec3; 3]);

impl ExprMat33 {
    /// Build from three rows.
    pub fn new(row1: ExprVec3, row2: ExprVec3, row3: ExprVec3) -> Self {
        Self([row1, row2, row3])
    }

    /// Constant identity matrix.
    pub fn identity() -> Self {
        Self::new(
            ExprVec3::from_values(1.0, 0.0, 0.0),
            ExprVec3::from_values(0.0, 1.0, 0.0),
            ExprVec3::from_values(0.0, 0.0, 1.0),
        )
    }

    /// First row.
    pub fn row1(&self) -> &ExprVec3 {
        &self.0[0]
    }

    /// Second row.
    pub fn row2(&self) -> &ExprVec3 {
        &self.0[1]
    }

    /// Third row.
    pub fn row3(&self) -> &ExprVec3 {
        &self.0[2]
    }

    /// Replace the first row.
    pub fn set_row1(&mut self, row: ExprVec3) {
        self.0[0] = row;
    }

    /// Replace the second row.
    pub fn set_row2(&mut self, row: ExprVec3) {
        self.0[1] = row;
    }

    /// Replace the third row.
    pub fn set_row3(&mut self, row: ExprVec3) {
        self.0[2] = row;
    }

    /// Evaluate every entry in single precision.
    pub fn to_matrix33f(&self) -> Matrix33f {
        Matrix33f(std::array::from_fn(|r| self.0[r].to_vector3f().0))
    }

    /// Evaluate every entry in double precision.
    pub fn to_matrix3d(&self) -> Matrix3d {
        Matrix3d(std::array::from_fn(|r| self.0[r].to_vector3d().0))
    }
}

impl Index<usize> for ExprMat33 {
    type Output = ExprVec3;

    fn index(&self, i: usize) -> &ExprVec3 {
        &self.0[i]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/expression/vector.rs"]
mod tests;
