//! 3x3 rotation matrices.
//!
//! Frame changes in this workspace are built from orthonormal axis triples:
//! a matrix whose rows are the target frame's X, Y and Z axes expressed in the
//! source frame maps source vectors into the target frame. Its transpose maps
//! back.
//!
//! ```
//! use celestial_core::{RotationMatrix3, Vector3};
//!
//! let m = RotationMatrix3::from_rows(
//!     Vector3::y_axis(),
//!     -Vector3::x_axis(),
//!     Vector3::z_axis(),
//! );
//! let v = m * Vector3::new(0.0, 1.0, 0.0);
//! assert!((v.x - 1.0).abs() < 1e-15);
//! assert!((m.transpose() * v - Vector3::y_axis()).magnitude() < 1e-15);
//! ```

use super::Vector3;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RotationMatrix3 {
    elements: [[f64; 3]; 3],
}

impl RotationMatrix3 {
    pub fn identity() -> Self {
        Self {
            elements: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Row-major: `elements[i][j]` is row `i`, column `j`. Not validated.
    pub fn from_array(elements: [[f64; 3]; 3]) -> Self {
        Self { elements }
    }

    /// Builds the matrix whose rows are the given axes.
    pub fn from_rows(x: Vector3, y: Vector3, z: Vector3) -> Self {
        Self::from_array([x.to_array(), y.to_array(), z.to_array()])
    }

    /// Rotation by `angle` radians about the Z axis, acting on vectors.
    pub fn about_z(angle: f64) -> Self {
        let (s, c) = libm::sincos(angle);
        Self::from_array([[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]])
    }

    pub fn elements(&self) -> &[[f64; 3]; 3] {
        &self.elements
    }

    pub fn row(&self, i: usize) -> Vector3 {
        Vector3::from_array(self.elements[i])
    }

    pub fn transpose(&self) -> Self {
        let m = &self.elements;
        Self::from_array([
            [m[0][0], m[1][0], m[2][0]],
            [m[0][1], m[1][1], m[2][1]],
            [m[0][2], m[1][2], m[2][2]],
        ])
    }

    pub fn multiply(&self, other: &Self) -> Self {
        let mut out = [[0.0; 3]; 3];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (0..3)
                    .map(|k| self.elements[i][k] * other.elements[k][j])
                    .sum();
            }
        }
        Self::from_array(out)
    }

    pub fn apply(&self, v: &Vector3) -> Vector3 {
        Vector3::new(
            self.row(0).dot(v),
            self.row(1).dot(v),
            self.row(2).dot(v),
        )
    }

    pub fn determinant(&self) -> f64 {
        self.row(0).dot(&self.row(1).cross(&self.row(2)))
    }

    /// True when the matrix is orthonormal with determinant +1.
    pub fn is_rotation_matrix(&self, tolerance: f64) -> bool {
        let should_be_identity = self.multiply(&self.transpose());
        should_be_identity.max_difference(&Self::identity()) <= tolerance
            && (self.determinant() - 1.0).abs() <= tolerance
    }

    pub fn max_difference(&self, other: &Self) -> f64 {
        self.elements
            .iter()
            .flatten()
            .zip(other.elements.iter().flatten())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max)
    }
}

impl std::ops::Mul for RotationMatrix3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl std::ops::Mul<Vector3> for RotationMatrix3 {
    type Output = Vector3;

    fn mul(self, v: Vector3) -> Vector3 {
        self.apply(&v)
    }
}

impl std::ops::Mul<Vector3> for &RotationMatrix3 {
    type Output = Vector3;

    fn mul(self, v: Vector3) -> Vector3 {
        self.apply(&v)
    }
}

impl fmt::Display for RotationMatrix3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.elements {
            writeln!(f, "[{:12.9} {:12.9} {:12.9}]", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_about_z_quarter_turn() {
        let v = RotationMatrix3::about_z(FRAC_PI_2) * Vector3::x_axis();
        assert!((v - Vector3::y_axis()).magnitude() < 1e-15);
    }

    #[test]
    fn test_transpose_inverts_rotation() {
        let m = RotationMatrix3::about_z(0.7);
        assert!(m.is_rotation_matrix(1e-14));
        let round = m.transpose() * m;
        assert!(round.max_difference(&RotationMatrix3::identity()) < 1e-15);
    }

    #[test]
    fn test_reflection_is_not_rotation() {
        let m = RotationMatrix3::from_rows(
            Vector3::x_axis(),
            Vector3::y_axis(),
            -Vector3::z_axis(),
        );
        assert!(!m.is_rotation_matrix(1e-12));
        assert_eq!(m.determinant(), -1.0);
    }
}
