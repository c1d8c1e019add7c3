// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use tracing::debug;

use crate::math::{canonicalize_zero, Mat2, SquareMatrix, Vec2};

impl Mat2 {
    /// Creates a matrix from row-major array data.
    pub fn new(data: [f32; 4]) -> Self {
        let [a, b, c, d] = data;
        Self::from_rows([Vec2::new(a, b), Vec2::new(c, d)])
    }

    /// Returns the matrix as a row-major array.
    pub fn to_array(self) -> [f32; 4] {
        let [a, b] = self.row(0).to_array();
        let [c, d] = self.row(1).to_array();
        [a, b, c, d]
    }

    /// Counter-clockwise rotation by `angle` radians.
    pub fn rotation(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([c, canonicalize_zero(-s), s, c])
    }
}

impl From<[f32; 4]> for Mat2 {
    fn from(value: [f32; 4]) -> Self {
        Self::new(value)
    }
}

impl SquareMatrix for Mat2 {
    fn determinant(&self) -> f32 {
        let [a, b, c, d] = self.to_array();
        a * d - b * c
    }

    fn inverse(&self) -> Self {
        let det = self.determinant();
        if det == 0.0 {
            debug!(size = 2, "inverse skipped: singular matrix");
            return *self;
        }
        let inv = 1.0 / det;
        let [a, b, c, d] = self.to_array();
        Self::new([d * inv, -b * inv, -c * inv, a * inv])
    }
}
