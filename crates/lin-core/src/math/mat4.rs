// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use tracing::debug;

use crate::math::{canonicalize_zero, Mat3, Mat4, Quat, SquareMatrix, Vec3, Vec4, EPSILON};

/// Transform and projection helpers for the 4×4 matrix.
///
/// Layout reminders:
/// - Row-major storage; translation occupies column 3 (flattened indices
///   3, 7, 11).
/// - Column vectors: `transform_point(p)` computes `M * (p, 1)`.
/// - Composing builders (`translate`, `rotate_*`, `scale`) multiply on the
///   right, `self * elementary`, so the most recently added transform is the
///   first one applied to a point.
/// - Projections are right-handed, the camera looks down -Z, and clip-space
///   depth maps to NDC `[-1, 1]` (OpenGL convention).
///
/// # Examples
/// ```
/// use lin_core::math::{Mat4, Vec3};
/// let t = Mat4::translation(5.0, -3.0, 2.0);
/// let p = Vec3::new(2.0, 4.0, -1.0);
/// assert_eq!(t.transform_point(&p).to_array(), [7.0, 1.0, 1.0]);
/// ```
impl Mat4 {
    /// Creates a matrix from row-major array data.
    pub fn new(data: [f32; 16]) -> Self {
        let [a, b, c, d, e, f, g, h, i, j, k, l, m, n, o, p] = data;
        Self::from_rows([
            Vec4::new(a, b, c, d),
            Vec4::new(e, f, g, h),
            Vec4::new(i, j, k, l),
            Vec4::new(m, n, o, p),
        ])
    }

    /// Returns the matrix as a row-major array.
    pub fn to_array(self) -> [f32; 16] {
        let mut out = [0.0; 16];
        for (dst, src) in out.iter_mut().zip(self.iter()) {
            *dst = src;
        }
        out
    }

    /// Builds a translation matrix.
    pub fn translation(tx: f32, ty: f32, tz: f32) -> Self {
        Self::new([
            1.0, 0.0, 0.0, tx,
            0.0, 1.0, 0.0, ty,
            0.0, 0.0, 1.0, tz,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Builds a non-uniform scale matrix.
    pub fn scaling(sx: f32, sy: f32, sz: f32) -> Self {
        Self::new([
            sx, 0.0, 0.0, 0.0,
            0.0, sy, 0.0, 0.0,
            0.0, 0.0, sz, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Builds a rotation matrix around the X axis by `angle` radians.
    pub fn rotation_x(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        let ns = canonicalize_zero(-s);
        Self::new([
            1.0, 0.0, 0.0, 0.0,
            0.0, c,   ns,  0.0,
            0.0, s,   c,   0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Builds a rotation matrix around the Y axis by `angle` radians.
    pub fn rotation_y(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        let ns = canonicalize_zero(-s);
        Self::new([
            c,   0.0, s,   0.0,
            0.0, 1.0, 0.0, 0.0,
            ns,  0.0, c,   0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Builds a rotation matrix around the Z axis by `angle` radians.
    pub fn rotation_z(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        let ns = canonicalize_zero(-s);
        Self::new([
            c,   ns,  0.0, 0.0,
            s,   c,   0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Builds a rotation matrix from an axis and angle in radians.
    ///
    /// The axis is normalized here; a zero-length axis yields the identity.
    pub fn rotation_axis_angle(axis: &Vec3, angle: f32) -> Self {
        let len = axis.length();
        if len <= EPSILON {
            return Self::identity();
        }
        Self::from_quat(&Quat::from_axis_angle(&axis.div_scalar(len), angle))
    }

    /// Rotation matrix for a quaternion; see [`Quat::to_rotation_matrix`].
    pub fn from_quat(q: &Quat) -> Self {
        q.to_rotation_matrix()
    }

    /// Builds a rotation matrix from Euler angles in radians.
    ///
    /// Ordering: `R = R_y(yaw) * R_x(pitch) * R_z(roll)`, so roll is applied
    /// first and yaw last.
    ///
    /// # Examples
    /// ```
    /// use core::f32::consts::FRAC_PI_2;
    /// use lin_core::math::{Mat4, Vec3};
    /// // Yaw=90°: +Z maps to +X
    /// let r = Mat4::rotation_from_euler(FRAC_PI_2, 0.0, 0.0);
    /// let v = r.transform_direction(&Vec3::UNIT_Z);
    /// assert!((v.x() - 1.0).abs() < 1e-6);
    /// ```
    pub fn rotation_from_euler(yaw: f32, pitch: f32, roll: f32) -> Self {
        Self::rotation_y(yaw)
            .matmul(&Self::rotation_x(pitch))
            .matmul(&Self::rotation_z(roll))
    }

    /// Composes a translation: `self * T(v)`.
    pub fn translate(&self, v: &Vec3) -> Self {
        self.matmul(&Self::translation(v.x(), v.y(), v.z()))
    }

    /// Composes a non-uniform scale: `self * S(v)`.
    pub fn scale(&self, v: &Vec3) -> Self {
        self.matmul(&Self::scaling(v.x(), v.y(), v.z()))
    }

    /// Composes a rotation about +X: `self * R_x(angle)`.
    pub fn rotate_x(&self, angle: f32) -> Self {
        self.matmul(&Self::rotation_x(angle))
    }

    /// Composes a rotation about +Y: `self * R_y(angle)`.
    pub fn rotate_y(&self, angle: f32) -> Self {
        self.matmul(&Self::rotation_y(angle))
    }

    /// Composes a rotation about +Z: `self * R_z(angle)`.
    pub fn rotate_z(&self, angle: f32) -> Self {
        self.matmul(&Self::rotation_z(angle))
    }

    /// Composes an axis/angle rotation: `self * R(axis, angle)`.
    pub fn rotate(&self, axis: &Vec3, angle: f32) -> Self {
        self.matmul(&Self::rotation_axis_angle(axis, angle))
    }

    /// Composes a quaternion rotation: `self * R(q)`.
    pub fn rotate_quat(&self, q: &Quat) -> Self {
        self.matmul(&Self::from_quat(q))
    }

    /// Right-handed view matrix looking from `eye` toward `target`.
    ///
    /// With `forward = normalize(target - eye)`, `right = normalize(forward x
    /// up)` and `up' = right x forward`, the rows are `right`, `up'` and
    /// `-forward`, each paired with the translation `-dot(axis, eye)`. The
    /// camera therefore looks down -Z in view space.
    ///
    /// When `up` is parallel to the view direction the basis is degenerate
    /// and the result is not a usable view matrix.
    pub fn look_at(eye: &Vec3, target: &Vec3, up: &Vec3) -> Self {
        let forward = target.sub(eye).normalize();
        let side = forward.cross(up);
        if side.length_squared() <= EPSILON * EPSILON {
            debug!(?eye, ?target, ?up, "look_at: up is parallel to the view direction");
        }
        let right = side.normalize();
        let true_up = right.cross(&forward);
        Self::from_rows([
            right.extend(-right.dot(eye)),
            true_up.extend(-true_up.dot(eye)),
            forward.negate().extend(forward.dot(eye)),
            Vec4::UNIT_W,
        ])
    }

    /// Perspective projection with vertical field of view `fov_y` (radians).
    ///
    /// Maps view-space depth `-near..-far` to NDC `-1..1`; clip `w` is the
    /// view-space distance in front of the camera.
    pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        let f = 1.0 / (fov_y * 0.5).tan();
        let nf = 1.0 / (near - far);
        Self::new([
            f / aspect, 0.0, 0.0,               0.0,
            0.0,        f,   0.0,               0.0,
            0.0,        0.0, (far + near) * nf, 2.0 * far * near * nf,
            0.0,        0.0, -1.0,              0.0,
        ])
    }

    /// Orthographic projection of the box `[left, right] x [bottom, top] x
    /// [-near, -far]` onto the NDC cube `[-1, 1]^3`.
    pub fn orthographic(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        let lr = 1.0 / (left - right);
        let bt = 1.0 / (bottom - top);
        let nf = 1.0 / (near - far);
        Self::new([
            -2.0 * lr, 0.0,       0.0,      (left + right) * lr,
            0.0,       -2.0 * bt, 0.0,      (top + bottom) * bt,
            0.0,       0.0,       2.0 * nf, (far + near) * nf,
            0.0,       0.0,       0.0,      1.0,
        ])
    }

    /// Transforms a point (assumes `w = 1`, no perspective divide).
    pub fn transform_point(&self, point: &Vec3) -> Vec3 {
        self.transform(&point.to_homogeneous()).truncate()
    }

    /// Transforms a direction vector (ignores translation, `w = 0`).
    pub fn transform_direction(&self, direction: &Vec3) -> Vec3 {
        self.transform(&direction.extend(0.0)).truncate()
    }

    /// Transforms a point with `w = 1` and divides by the resulting `w`.
    ///
    /// Use for projection matrices; a resulting `w` of zero leaves the
    /// coordinates undivided.
    pub fn project_point(&self, point: &Vec3) -> Vec3 {
        Vec3::from_homogeneous(self.transform(&point.to_homogeneous()))
    }

    /// Upper-left 3×3 block.
    pub fn to_mat3(&self) -> Mat3 {
        Mat3::from_rows([
            self.row(0).truncate(),
            self.row(1).truncate(),
            self.row(2).truncate(),
        ])
    }
}

impl From<[f32; 16]> for Mat4 {
    fn from(value: [f32; 16]) -> Self {
        Self::new(value)
    }
}

impl SquareMatrix for Mat4 {
    /// Cofactor expansion along the first row, each 3×3 minor written out.
    fn determinant(&self) -> f32 {
        let [a11, a12, a13, a14, a21, a22, a23, a24, a31, a32, a33, a34, a41, a42, a43, a44] =
            self.to_array();
        a11 * (a22 * a33 * a44 + a23 * a34 * a42 + a24 * a32 * a43
            - a24 * a33 * a42
            - a23 * a32 * a44
            - a22 * a34 * a43)
            - a12
                * (a21 * a33 * a44 + a23 * a34 * a41 + a24 * a31 * a43
                    - a24 * a33 * a41
                    - a23 * a31 * a44
                    - a21 * a34 * a43)
            + a13
                * (a21 * a32 * a44 + a22 * a34 * a41 + a24 * a31 * a42
                    - a24 * a32 * a41
                    - a22 * a31 * a44
                    - a21 * a34 * a42)
            - a14
                * (a21 * a32 * a43 + a22 * a33 * a41 + a23 * a31 * a42
                    - a23 * a32 * a41
                    - a22 * a31 * a43
                    - a21 * a33 * a42)
    }

    /// Gauss-Jordan elimination on `[M | I]` with partial pivoting: each
    /// column pivots on the row with the largest absolute value.
    fn inverse(&self) -> Self {
        if self.determinant() == 0.0 {
            debug!(size = 4, "inverse skipped: singular matrix");
            return *self;
        }

        let mut aug = [[0.0_f32; 8]; 4];
        for (r, row) in aug.iter_mut().enumerate() {
            row[..4].copy_from_slice(self.row(r).as_slice());
            row[4 + r] = 1.0;
        }

        for col in 0..4 {
            let mut pivot_row = col;
            for r in (col + 1)..4 {
                if aug[r][col].abs() > aug[pivot_row][col].abs() {
                    pivot_row = r;
                }
            }
            aug.swap(col, pivot_row);

            let pivot = aug[col][col];
            if pivot == 0.0 {
                debug!(size = 4, col, "inverse skipped: zero pivot");
                return *self;
            }
            for v in &mut aug[col] {
                *v /= pivot;
            }

            let pivot_vals = aug[col];
            for (r, row) in aug.iter_mut().enumerate() {
                if r == col {
                    continue;
                }
                let factor = row[col];
                if factor == 0.0 {
                    continue;
                }
                for (v, p) in row.iter_mut().zip(pivot_vals.iter()) {
                    *v -= factor * p;
                }
            }
        }

        Self::from_fn(|r, c| aug[r][4 + c])
    }
}
