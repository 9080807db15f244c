use std::fmt::{Debug, Display, Formatter};
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};

use log::trace;

use super::{struct_mat, Identity, Matrix3};
use crate::number_traits::{Float, One, Zero};
use crate::quaternion::Quaternion;
use crate::vector::Vector3;

pub type Matrix4f = Matrix4<f32>;

struct_mat!(Matrix4, 16, 4 x 4);

impl<T> Matrix4<T>
where
    T: Float,
{
    #[allow(clippy::too_many_arguments)]
    #[rustfmt::skip]
    pub fn set(
        &mut self,
        m00: T, m01: T, m02: T, m03: T,
        m10: T, m11: T, m12: T, m13: T,
        m20: T, m21: T, m22: T, m23: T,
        m30: T, m31: T, m32: T, m33: T,
    ) {
        self.values = [
            m00, m01, m02, m03,
            m10, m11, m12, m13,
            m20, m21, m22, m23,
            m30, m31, m32, m33,
        ];
    }

    pub fn transpose(&mut self) {
        for col in 0..Self::COLS {
            for row in col + 1..Self::ROWS {
                self.values.swap(col * Self::ROWS + row, row * Self::ROWS + col);
            }
        }
    }

    /// The twelve 2x2 minors shared by `determinant` and `try_inverse`.
    #[allow(clippy::similar_names)]
    fn minors(&self) -> [T; 12] {
        let [a00, a01, a02, a03, a10, a11, a12, a13, a20, a21, a22, a23, a30, a31, a32, a33] =
            self.values;
        [
            a00 * a11 - a01 * a10,
            a00 * a12 - a02 * a10,
            a00 * a13 - a03 * a10,
            a01 * a12 - a02 * a11,
            a01 * a13 - a03 * a11,
            a02 * a13 - a03 * a12,
            a20 * a31 - a21 * a30,
            a20 * a32 - a22 * a30,
            a20 * a33 - a23 * a30,
            a21 * a32 - a22 * a31,
            a21 * a33 - a23 * a31,
            a22 * a33 - a23 * a32,
        ]
    }

    pub fn determinant(&self) -> T {
        let [b00, b01, b02, b03, b04, b05, b06, b07, b08, b09, b10, b11] = self.minors();
        b00 * b11 - b01 * b10 + b02 * b09 + b03 * b08 - b04 * b07 + b05 * b06
    }

    #[must_use]
    #[allow(clippy::similar_names)]
    pub fn try_inverse(&self) -> Option<Matrix4<T>> {
        let [a00, a01, a02, a03, a10, a11, a12, a13, a20, a21, a22, a23, a30, a31, a32, a33] =
            self.values;
        let [b00, b01, b02, b03, b04, b05, b06, b07, b08, b09, b10, b11] = self.minors();

        let det = b00 * b11 - b01 * b10 + b02 * b09 + b03 * b08 - b04 * b07 + b05 * b06;
        if det == T::zero() {
            return None;
        }

        let inv_det = T::one() / det;
        Some(Matrix4::with_values([
            (a11 * b11 - a12 * b10 + a13 * b09) * inv_det,
            (a02 * b10 - a01 * b11 - a03 * b09) * inv_det,
            (a31 * b05 - a32 * b04 + a33 * b03) * inv_det,
            (a22 * b04 - a21 * b05 - a23 * b03) * inv_det,
            (a12 * b08 - a10 * b11 - a13 * b07) * inv_det,
            (a00 * b11 - a02 * b08 + a03 * b07) * inv_det,
            (a32 * b02 - a30 * b05 - a33 * b01) * inv_det,
            (a20 * b05 - a22 * b02 + a23 * b01) * inv_det,
            (a10 * b10 - a11 * b08 + a13 * b06) * inv_det,
            (a01 * b08 - a00 * b10 - a03 * b06) * inv_det,
            (a30 * b04 - a31 * b02 + a33 * b00) * inv_det,
            (a21 * b02 - a20 * b04 - a23 * b00) * inv_det,
            (a11 * b07 - a10 * b09 - a12 * b06) * inv_det,
            (a00 * b09 - a01 * b07 + a02 * b06) * inv_det,
            (a31 * b01 - a30 * b03 - a32 * b00) * inv_det,
            (a20 * b03 - a21 * b01 + a22 * b00) * inv_det,
        ]))
    }

    /// Inverts the matrix in place. A singular matrix is left unchanged.
    pub fn invert(&mut self) {
        match self.try_inverse() {
            Some(inverse) => *self = inverse,
            None => trace!("Matrix4::invert skipped, determinant is zero"),
        }
    }

    #[rustfmt::skip]
    #[allow(clippy::similar_names)]
    pub fn adjoint(&mut self) {
        let [a00, a01, a02, a03, a10, a11, a12, a13, a20, a21, a22, a23, a30, a31, a32, a33] =
            self.values;
        self.values = [
            a11 * (a22 * a33 - a23 * a32) - a21 * (a12 * a33 - a13 * a32) + a31 * (a12 * a23 - a13 * a22),
            -(a01 * (a22 * a33 - a23 * a32) - a21 * (a02 * a33 - a03 * a32) + a31 * (a02 * a23 - a03 * a22)),
            a01 * (a12 * a33 - a13 * a32) - a11 * (a02 * a33 - a03 * a32) + a31 * (a02 * a13 - a03 * a12),
            -(a01 * (a12 * a23 - a13 * a22) - a11 * (a02 * a23 - a03 * a22) + a21 * (a02 * a13 - a03 * a12)),
            -(a10 * (a22 * a33 - a23 * a32) - a20 * (a12 * a33 - a13 * a32) + a30 * (a12 * a23 - a13 * a22)),
            a00 * (a22 * a33 - a23 * a32) - a20 * (a02 * a33 - a03 * a32) + a30 * (a02 * a23 - a03 * a22),
            -(a00 * (a12 * a33 - a13 * a32) - a10 * (a02 * a33 - a03 * a32) + a30 * (a02 * a13 - a03 * a12)),
            a00 * (a12 * a23 - a13 * a22) - a10 * (a02 * a23 - a03 * a22) + a20 * (a02 * a13 - a03 * a12),
            a10 * (a21 * a33 - a23 * a31) - a20 * (a11 * a33 - a13 * a31) + a30 * (a11 * a23 - a13 * a21),
            -(a00 * (a21 * a33 - a23 * a31) - a20 * (a01 * a33 - a03 * a31) + a30 * (a01 * a23 - a03 * a21)),
            a00 * (a11 * a33 - a13 * a31) - a10 * (a01 * a33 - a03 * a31) + a30 * (a01 * a13 - a03 * a11),
            -(a00 * (a11 * a23 - a13 * a21) - a10 * (a01 * a23 - a03 * a21) + a20 * (a01 * a13 - a03 * a11)),
            -(a10 * (a21 * a32 - a22 * a31) - a20 * (a11 * a32 - a12 * a31) + a30 * (a11 * a22 - a12 * a21)),
            a00 * (a21 * a32 - a22 * a31) - a20 * (a01 * a32 - a02 * a31) + a30 * (a01 * a22 - a02 * a21),
            -(a00 * (a11 * a32 - a12 * a31) - a10 * (a01 * a32 - a02 * a31) + a30 * (a01 * a12 - a02 * a11)),
            a00 * (a11 * a22 - a12 * a21) - a10 * (a01 * a22 - a02 * a21) + a20 * (a01 * a12 - a02 * a11),
        ];
    }

    pub fn multiply(&mut self, other: &Matrix4<T>) {
        let a = self.values;
        let b = &other.values;

        for col in 0..Self::COLS {
            let j = col * Self::ROWS;
            for row in 0..Self::ROWS {
                self.values[j + row] = a[row] * b[j]
                    + a[Self::ROWS + row] * b[j + 1]
                    + a[Self::ROWS * 2 + row] * b[j + 2]
                    + a[Self::ROWS * 3 + row] * b[j + 3];
            }
        }
    }

    pub fn translate(&mut self, v: &Vector3<T>) {
        for row in 0..Self::ROWS {
            self.values[12 + row] = self.values[row] * v.x
                + self.values[4 + row] * v.y
                + self.values[8 + row] * v.z
                + self.values[12 + row];
        }
    }

    pub fn scale(&mut self, v: &Vector3<T>) {
        for (col, factor) in [v.x, v.y, v.z].into_iter().enumerate() {
            for value in &mut self[col] {
                *value *= factor;
            }
        }
    }

    /// Appends a rotation of `rad` radians around `axis`. An axis shorter than epsilon
    /// leaves the matrix unchanged.
    pub fn rotate(&mut self, rad: T, axis: &Vector3<T>) {
        let Some(rotation) = Matrix3::try_from_axis_angle(axis, rad) else {
            trace!("Matrix4::rotate skipped, zero-length axis");
            return;
        };

        let a = self.values;
        let r = rotation.values();
        for col in 0..3 {
            for row in 0..Self::ROWS {
                self.values[col * Self::ROWS + row] = a[row] * r[col * 3]
                    + a[Self::ROWS + row] * r[col * 3 + 1]
                    + a[Self::ROWS * 2 + row] * r[col * 3 + 2];
            }
        }
    }

    /// Rotates the plane spanned by columns `first` and `second`, turning `first` towards
    /// `second`.
    fn rotate_columns(&mut self, first: usize, second: usize, rad: T) {
        let (s, c) = (rad.sin(), rad.cos());
        for row in 0..Self::ROWS {
            let a = self.values[first * Self::ROWS + row];
            let b = self.values[second * Self::ROWS + row];
            self.values[first * Self::ROWS + row] = a * c + b * s;
            self.values[second * Self::ROWS + row] = b * c - a * s;
        }
    }

    pub fn rotate_x(&mut self, rad: T) {
        self.rotate_columns(1, 2, rad);
    }

    pub fn rotate_y(&mut self, rad: T) {
        self.rotate_columns(2, 0, rad);
    }

    pub fn rotate_z(&mut self, rad: T) {
        self.rotate_columns(0, 1, rad);
    }

    #[rustfmt::skip]
    pub fn from_translation(v: &Vector3<T>) -> Self {
        Self::with_values([
            T::one(), T::zero(), T::zero(), T::zero(),
            T::zero(), T::one(), T::zero(), T::zero(),
            T::zero(), T::zero(), T::one(), T::zero(),
            v.x, v.y, v.z, T::one(),
        ])
    }

    #[rustfmt::skip]
    pub fn from_scaling(v: &Vector3<T>) -> Self {
        Self::with_values([
            v.x, T::zero(), T::zero(), T::zero(),
            T::zero(), v.y, T::zero(), T::zero(),
            T::zero(), T::zero(), v.z, T::zero(),
            T::zero(), T::zero(), T::zero(), T::one(),
        ])
    }

    /// Rotation of `rad` radians around `axis`, or `None` when the axis is shorter than
    /// epsilon.
    #[must_use]
    #[rustfmt::skip]
    pub fn try_from_rotation(rad: T, axis: &Vector3<T>) -> Option<Self> {
        let [b00, b01, b02, b10, b11, b12, b20, b21, b22] =
            *Matrix3::try_from_axis_angle(axis, rad)?.values();
        Some(Self::with_values([
            b00, b01, b02, T::zero(),
            b10, b11, b12, T::zero(),
            b20, b21, b22, T::zero(),
            T::zero(), T::zero(), T::zero(), T::one(),
        ]))
    }

    /// Rotation of `rad` radians around `axis`. A degenerate axis yields the identity.
    pub fn from_rotation(rad: T, axis: &Vector3<T>) -> Self {
        Self::try_from_rotation(rad, axis).unwrap_or_else(|| {
            trace!("Matrix4::from_rotation got a zero-length axis");
            Self::identity()
        })
    }

    #[rustfmt::skip]
    pub fn from_x_rotation(rad: T) -> Self {
        let (s, c) = (rad.sin(), rad.cos());
        Self::with_values([
            T::one(), T::zero(), T::zero(), T::zero(),
            T::zero(), c, s, T::zero(),
            T::zero(), -s, c, T::zero(),
            T::zero(), T::zero(), T::zero(), T::one(),
        ])
    }

    #[rustfmt::skip]
    pub fn from_y_rotation(rad: T) -> Self {
        let (s, c) = (rad.sin(), rad.cos());
        Self::with_values([
            c, T::zero(), -s, T::zero(),
            T::zero(), T::one(), T::zero(), T::zero(),
            s, T::zero(), c, T::zero(),
            T::zero(), T::zero(), T::zero(), T::one(),
        ])
    }

    #[rustfmt::skip]
    pub fn from_z_rotation(rad: T) -> Self {
        let (s, c) = (rad.sin(), rad.cos());
        Self::with_values([
            c, s, T::zero(), T::zero(),
            -s, c, T::zero(), T::zero(),
            T::zero(), T::zero(), T::one(), T::zero(),
            T::zero(), T::zero(), T::zero(), T::one(),
        ])
    }

    pub fn from_quat(q: &Quaternion<T>) -> Self {
        Self::from_rotation_translation(q, &Vector3::new(T::zero(), T::zero(), T::zero()))
    }

    pub fn from_rotation_translation(q: &Quaternion<T>, v: &Vector3<T>) -> Self {
        Self::from_rotation_translation_scale(q, v, &Vector3::new(T::one(), T::one(), T::one()))
    }

    /// `translation(v) * rotation(q) * scaling(s)`
    #[rustfmt::skip]
    pub fn from_rotation_translation_scale(
        q: &Quaternion<T>,
        v: &Vector3<T>,
        s: &Vector3<T>,
    ) -> Self {
        let [r00, r01, r02, r10, r11, r12, r20, r21, r22] = *Matrix3::from_quat(q).values();
        Self::with_values([
            r00 * s.x, r01 * s.x, r02 * s.x, T::zero(),
            r10 * s.y, r11 * s.y, r12 * s.y, T::zero(),
            r20 * s.z, r21 * s.z, r22 * s.z, T::zero(),
            v.x, v.y, v.z, T::one(),
        ])
    }

    /// Same as [`Self::from_rotation_translation_scale`], rotating and scaling around the
    /// pivot `o` instead of the origin.
    pub fn from_rotation_translation_scale_origin(
        q: &Quaternion<T>,
        v: &Vector3<T>,
        s: &Vector3<T>,
        o: &Vector3<T>,
    ) -> Self {
        let mut m = Self::from_rotation_translation_scale(q, v, s);
        let a = m.values;
        let origin: [T; 3] = (*o).into();
        for (row, offset) in origin.into_iter().enumerate() {
            let pivot = a[row] * o.x + a[4 + row] * o.y + a[8 + row] * o.z;
            m.values[12 + row] = a[12 + row] + offset - pivot;
        }
        m
    }

    pub fn translation(&self) -> Vector3<T> {
        Vector3::new(self.values[12], self.values[13], self.values[14])
    }

    /// Length of each basis column. Assumes a translation * rotation * scale composition.
    pub fn scaling(&self) -> Vector3<T> {
        let column_length = |col: usize| {
            let column = &self[col];
            (column[0].squared() + column[1].squared() + column[2].squared()).sqrt()
        };
        Vector3::new(column_length(0), column_length(1), column_length(2))
    }

    /// Rotation of the upper-left block, which is expected to be free of scaling.
    #[allow(clippy::many_single_char_names)]
    pub fn rotation(&self) -> Quaternion<T> {
        let m = self;
        let trace = m[0][0] + m[1][1] + m[2][2];
        let (x, y, z, w) = if trace > T::zero() {
            let s = (trace + T::one()).sqrt() * T::two();
            (
                (m[1][2] - m[2][1]) / s,
                (m[2][0] - m[0][2]) / s,
                (m[0][1] - m[1][0]) / s,
                T::one_quarter() * s,
            )
        } else if m[0][0] > m[1][1] && m[0][0] > m[2][2] {
            let s = (T::one() + m[0][0] - m[1][1] - m[2][2]).sqrt() * T::two();
            (
                T::one_quarter() * s,
                (m[0][1] + m[1][0]) / s,
                (m[2][0] + m[0][2]) / s,
                (m[1][2] - m[2][1]) / s,
            )
        } else if m[1][1] > m[2][2] {
            let s = (T::one() + m[1][1] - m[0][0] - m[2][2]).sqrt() * T::two();
            (
                (m[0][1] + m[1][0]) / s,
                T::one_quarter() * s,
                (m[1][2] + m[2][1]) / s,
                (m[2][0] - m[0][2]) / s,
            )
        } else {
            let s = (T::one() + m[2][2] - m[0][0] - m[1][1]).sqrt() * T::two();
            (
                (m[2][0] + m[0][2]) / s,
                (m[1][2] + m[2][1]) / s,
                T::one_quarter() * s,
                (m[0][1] - m[1][0]) / s,
            )
        };

        Quaternion::new(x, y, z, w)
    }

    #[rustfmt::skip]
    pub fn frustum(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Self {
        let rl = T::one() / (right - left);
        let tb = T::one() / (top - bottom);
        let nf = T::one() / (near - far);
        Self::with_values([
            near * T::two() * rl, T::zero(), T::zero(), T::zero(),
            T::zero(), near * T::two() * tb, T::zero(), T::zero(),
            (right + left) * rl, (top + bottom) * tb, (far + near) * nf, -T::one(),
            T::zero(), T::zero(), far * near * T::two() * nf, T::zero(),
        ])
    }

    /// Perspective projection with a vertical field of view of `fov_y` radians.
    /// A `far` of zero or of [`Float::max_value`] builds a projection without far plane.
    #[rustfmt::skip]
    pub fn perspective(fov_y: T, aspect: T, near: T, far: T) -> Self {
        let f = T::one() / fov_y.half().tan();
        let (m22, m32) = if far != T::zero() && far != T::max_value() {
            let nf = T::one() / (near - far);
            ((far + near) * nf, T::two() * far * near * nf)
        } else {
            (-T::one(), -T::two() * near)
        };

        Self::with_values([
            f / aspect, T::zero(), T::zero(), T::zero(),
            T::zero(), f, T::zero(), T::zero(),
            T::zero(), T::zero(), m22, -T::one(),
            T::zero(), T::zero(), m32, T::zero(),
        ])
    }

    #[rustfmt::skip]
    pub fn ortho(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Self {
        let lr = T::one() / (left - right);
        let bt = T::one() / (bottom - top);
        let nf = T::one() / (near - far);
        Self::with_values([
            -T::two() * lr, T::zero(), T::zero(), T::zero(),
            T::zero(), -T::two() * bt, T::zero(), T::zero(),
            T::zero(), T::zero(), T::two() * nf, T::zero(),
            (left + right) * lr, (top + bottom) * bt, (far + near) * nf, T::one(),
        ])
    }

    /// View matrix of a camera at `eye` looking at `center`.
    ///
    /// Returns the identity when `eye` and `center` coincide. An `up` parallel to the view
    /// direction leaves the x and y axes at zero.
    #[rustfmt::skip]
    pub fn look_at(eye: &Vector3<T>, center: &Vector3<T>, up: &Vector3<T>) -> Self {
        let direction = *eye - *center;
        if direction.x.abs() < T::epsilon()
            && direction.y.abs() < T::epsilon()
            && direction.z.abs() < T::epsilon()
        {
            trace!("Matrix4::look_at got eye == center");
            return Self::identity();
        }

        let z = direction.normalized();
        let x = up.cross(&z).normalized();
        let y = z.cross(&x).normalized();

        Self::with_values([
            x.x, y.x, z.x, T::zero(),
            x.y, y.y, z.y, T::zero(),
            x.z, y.z, z.z, T::zero(),
            -x.dot(eye), -y.dot(eye), -z.dot(eye), T::one(),
        ])
    }

    /// World matrix placing an object at `eye` oriented towards `target`, the inverse of
    /// [`Self::look_at`].
    #[rustfmt::skip]
    pub fn target_to(eye: &Vector3<T>, target: &Vector3<T>, up: &Vector3<T>) -> Self {
        let z = (*eye - *target).normalized();
        let x = up.cross(&z).normalized();
        let y = z.cross(&x);

        Self::with_values([
            x.x, x.y, x.z, T::zero(),
            y.x, y.y, y.z, T::zero(),
            z.x, z.y, z.z, T::zero(),
            eye.x, eye.y, eye.z, T::one(),
        ])
    }
}

#[rustfmt::skip]
impl<T> Identity for Matrix4<T>
    where T: One + Zero {
    fn identity() -> Self {
        Self {
            values: [
                T::one(), T::zero(), T::zero(), T::zero(),
                T::zero(), T::one(), T::zero(), T::zero(),
                T::zero(), T::zero(), T::one(), T::zero(),
                T::zero(), T::zero(), T::zero(), T::one()
            ]
        }
    }
}
