// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use tracing::debug;

use crate::math::{Mat3, Mat4, SquareMatrix, Vec3};

impl Mat3 {
    /// Creates a matrix from row-major array data.
    pub fn new(data: [f32; 9]) -> Self {
        let [a11, a12, a13, a21, a22, a23, a31, a32, a33] = data;
        Self::from_rows([
            Vec3::new(a11, a12, a13),
            Vec3::new(a21, a22, a23),
            Vec3::new(a31, a32, a33),
        ])
    }

    /// Returns the matrix as a row-major array.
    pub fn to_array(self) -> [f32; 9] {
        let [a11, a12, a13] = self.row(0).to_array();
        let [a21, a22, a23] = self.row(1).to_array();
        let [a31, a32, a33] = self.row(2).to_array();
        [a11, a12, a13, a21, a22, a23, a31, a32, a33]
    }
}

impl From<[f32; 9]> for Mat3 {
    fn from(value: [f32; 9]) -> Self {
        Self::new(value)
    }
}

/// Upper-left 3×3 block (rotation and scale, no translation).
impl From<Mat4> for Mat3 {
    fn from(m: Mat4) -> Self {
        m.to_mat3()
    }
}

impl SquareMatrix for Mat3 {
    fn determinant(&self) -> f32 {
        let [a11, a12, a13, a21, a22, a23, a31, a32, a33] = self.to_array();
        a11 * (a22 * a33 - a23 * a32) - a12 * (a21 * a33 - a23 * a31)
            + a13 * (a21 * a32 - a22 * a31)
    }

    /// Adjugate (transposed cofactor matrix) divided by the determinant.
    fn inverse(&self) -> Self {
        let det = self.determinant();
        if det == 0.0 {
            debug!(size = 3, "inverse skipped: singular matrix");
            return *self;
        }
        let inv = 1.0 / det;
        let [a11, a12, a13, a21, a22, a23, a31, a32, a33] = self.to_array();
        Self::new([
            (a22 * a33 - a23 * a32) * inv,
            (a13 * a32 - a12 * a33) * inv,
            (a12 * a23 - a13 * a22) * inv,
            (a23 * a31 - a21 * a33) * inv,
            (a11 * a33 - a13 * a31) * inv,
            (a13 * a21 - a11 * a23) * inv,
            (a21 * a32 - a22 * a31) * inv,
            (a12 * a31 - a11 * a32) * inv,
            (a11 * a22 - a12 * a21) * inv,
        ])
    }
}
