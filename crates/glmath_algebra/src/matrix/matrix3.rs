use std::fmt::{Debug, Display, Formatter};
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};

use log::trace;

use super::{struct_mat, Identity, Matrix2d, Matrix4};
use crate::number_traits::{Float, One, Zero};
use crate::quaternion::Quaternion;
use crate::vector::{Vector2, Vector3};

pub type Matrix3f = Matrix3<f32>;

struct_mat!(Matrix3, 9, 3 x 3);

impl<T> Matrix3<T>
where
    T: Float,
{
    #[allow(clippy::too_many_arguments)]
    pub fn set(&mut self, m00: T, m01: T, m02: T, m10: T, m11: T, m12: T, m20: T, m21: T, m22: T) {
        self.values = [m00, m01, m02, m10, m11, m12, m20, m21, m22];
    }

    pub fn transpose(&mut self) {
        self.values.swap(1, 3);
        self.values.swap(2, 6);
        self.values.swap(5, 7);
    }

    pub fn determinant(&self) -> T {
        let [a00, a01, a02, a10, a11, a12, a20, a21, a22] = self.values;
        a00 * (a22 * a11 - a12 * a21)
            + a01 * (-a22 * a10 + a12 * a20)
            + a02 * (a21 * a10 - a11 * a20)
    }

    #[must_use]
    pub fn try_inverse(&self) -> Option<Matrix3<T>> {
        let [a00, a01, a02, a10, a11, a12, a20, a21, a22] = self.values;
        let b01 = a22 * a11 - a12 * a21;
        let b11 = -a22 * a10 + a12 * a20;
        let b21 = a21 * a10 - a11 * a20;

        let det = a00 * b01 + a01 * b11 + a02 * b21;
        if det == T::zero() {
            return None;
        }

        let inv_det = T::one() / det;
        Some(Matrix3::with_values([
            b01 * inv_det,
            (-a22 * a01 + a02 * a21) * inv_det,
            (a12 * a01 - a02 * a11) * inv_det,
            b11 * inv_det,
            (a22 * a00 - a02 * a20) * inv_det,
            (-a12 * a00 + a02 * a10) * inv_det,
            b21 * inv_det,
            (-a21 * a00 + a01 * a20) * inv_det,
            (a11 * a00 - a01 * a10) * inv_det,
        ]))
    }

    /// Inverts the matrix in place. A singular matrix is left unchanged.
    pub fn invert(&mut self) {
        match self.try_inverse() {
            Some(inverse) => *self = inverse,
            None => trace!("Matrix3::invert skipped, determinant is zero"),
        }
    }

    pub fn adjoint(&mut self) {
        let [a00, a01, a02, a10, a11, a12, a20, a21, a22] = self.values;
        self.values = [
            a11 * a22 - a12 * a21,
            a02 * a21 - a01 * a22,
            a01 * a12 - a02 * a11,
            a12 * a20 - a10 * a22,
            a00 * a22 - a02 * a20,
            a02 * a10 - a00 * a12,
            a10 * a21 - a11 * a20,
            a01 * a20 - a00 * a21,
            a00 * a11 - a01 * a10,
        ];
    }

    pub fn multiply(&mut self, other: &Matrix3<T>) {
        let [a00, a01, a02, a10, a11, a12, a20, a21, a22] = self.values;
        let [b00, b01, b02, b10, b11, b12, b20, b21, b22] = other.values;
        self.values = [
            b00 * a00 + b01 * a10 + b02 * a20,
            b00 * a01 + b01 * a11 + b02 * a21,
            b00 * a02 + b01 * a12 + b02 * a22,
            b10 * a00 + b11 * a10 + b12 * a20,
            b10 * a01 + b11 * a11 + b12 * a21,
            b10 * a02 + b11 * a12 + b12 * a22,
            b20 * a00 + b21 * a10 + b22 * a20,
            b20 * a01 + b21 * a11 + b22 * a21,
            b20 * a02 + b21 * a12 + b22 * a22,
        ];
    }

    pub fn translate(&mut self, v: &Vector2<T>) {
        let [a00, a01, a02, a10, a11, a12, a20, a21, a22] = self.values;
        self.values[6] = v.x * a00 + v.y * a10 + a20;
        self.values[7] = v.x * a01 + v.y * a11 + a21;
        self.values[8] = v.x * a02 + v.y * a12 + a22;
    }

    pub fn rotate(&mut self, rad: T) {
        let [a00, a01, a02, a10, a11, a12, _, _, _] = self.values;
        let (s, c) = (rad.sin(), rad.cos());
        self.values[0] = c * a00 + s * a10;
        self.values[1] = c * a01 + s * a11;
        self.values[2] = c * a02 + s * a12;
        self.values[3] = c * a10 - s * a00;
        self.values[4] = c * a11 - s * a01;
        self.values[5] = c * a12 - s * a02;
    }

    pub fn scale(&mut self, v: &Vector2<T>) {
        for value in &mut self.values[0..3] {
            *value *= v.x;
        }
        for value in &mut self.values[3..6] {
            *value *= v.y;
        }
    }

    #[rustfmt::skip]
    pub fn from_translation(v: &Vector2<T>) -> Self {
        Self::with_values([
            T::one(), T::zero(), T::zero(),
            T::zero(), T::one(), T::zero(),
            v.x, v.y, T::one(),
        ])
    }

    #[rustfmt::skip]
    pub fn from_rotation(rad: T) -> Self {
        let (s, c) = (rad.sin(), rad.cos());
        Self::with_values([
            c, s, T::zero(),
            -s, c, T::zero(),
            T::zero(), T::zero(), T::one(),
        ])
    }

    #[rustfmt::skip]
    pub fn from_scaling(v: &Vector2<T>) -> Self {
        Self::with_values([
            v.x, T::zero(), T::zero(),
            T::zero(), v.y, T::zero(),
            T::zero(), T::zero(), T::one(),
        ])
    }

    /// Rotation of `rad` radians around `axis`, or `None` when the axis is shorter than
    /// epsilon. The axis does not need to be normalized.
    #[must_use]
    pub fn try_from_axis_angle(axis: &Vector3<T>, rad: T) -> Option<Self> {
        let length = axis.length();
        if length < T::epsilon() {
            return None;
        }

        let Vector3 { x, y, z } = *axis / length;
        let (s, c) = (rad.sin(), rad.cos());
        let t = T::one() - c;

        Some(Self::with_values([
            x * x * t + c,
            y * x * t + z * s,
            z * x * t - y * s,
            x * y * t - z * s,
            y * y * t + c,
            z * y * t + x * s,
            x * z * t + y * s,
            y * z * t - x * s,
            z * z * t + c,
        ]))
    }

    /// Rotation of `rad` radians around `axis`. A degenerate axis yields the identity.
    pub fn from_axis_angle(axis: &Vector3<T>, rad: T) -> Self {
        Self::try_from_axis_angle(axis, rad).unwrap_or_else(|| {
            trace!("Matrix3::from_axis_angle got a zero-length axis");
            Self::identity()
        })
    }

    /// Upper-left 3x3 block of `m`.
    pub fn from_mat4(m: &Matrix4<T>) -> Self {
        let a = m.values();
        Self::with_values([a[0], a[1], a[2], a[4], a[5], a[6], a[8], a[9], a[10]])
    }

    #[rustfmt::skip]
    pub fn from_mat2d(m: &Matrix2d<T>) -> Self {
        let [a, b, c, d, tx, ty] = *m.values();
        Self::with_values([
            a, b, T::zero(),
            c, d, T::zero(),
            tx, ty, T::one(),
        ])
    }

    #[allow(clippy::similar_names)]
    pub fn from_quat(q: &Quaternion<T>) -> Self {
        let Quaternion { x, y, z, w } = *q;
        let x2 = x + x;
        let y2 = y + y;
        let z2 = z + z;

        let xx = x * x2;
        let yx = y * x2;
        let yy = y * y2;
        let zx = z * x2;
        let zy = z * y2;
        let zz = z * z2;
        let wx = w * x2;
        let wy = w * y2;
        let wz = w * z2;

        Self::with_values([
            T::one() - yy - zz,
            yx + wz,
            zx - wy,
            yx - wz,
            T::one() - xx - zz,
            zy + wx,
            zx + wy,
            zy - wx,
            T::one() - xx - yy,
        ])
    }

    /// Inverse-transpose of the upper-left block of `m`, used to transform normals.
    /// `None` when `m` is singular.
    #[must_use]
    #[allow(clippy::similar_names)]
    pub fn try_normal_from_mat4(m: &Matrix4<T>) -> Option<Self> {
        let [a00, a01, a02, a03, a10, a11, a12, a13, a20, a21, a22, a23, a30, a31, a32, a33] =
            *m.values();

        let b00 = a00 * a11 - a01 * a10;
        let b01 = a00 * a12 - a02 * a10;
        let b02 = a00 * a13 - a03 * a10;
        let b03 = a01 * a12 - a02 * a11;
        let b04 = a01 * a13 - a03 * a11;
        let b05 = a02 * a13 - a03 * a12;
        let b06 = a20 * a31 - a21 * a30;
        let b07 = a20 * a32 - a22 * a30;
        let b08 = a20 * a33 - a23 * a30;
        let b09 = a21 * a32 - a22 * a31;
        let b10 = a21 * a33 - a23 * a31;
        let b11 = a22 * a33 - a23 * a32;

        let det = b00 * b11 - b01 * b10 + b02 * b09 + b03 * b08 - b04 * b07 + b05 * b06;
        if det == T::zero() {
            return None;
        }

        let inv_det = T::one() / det;
        Some(Self::with_values([
            (a11 * b11 - a12 * b10 + a13 * b09) * inv_det,
            (a12 * b08 - a10 * b11 - a13 * b07) * inv_det,
            (a10 * b10 - a11 * b08 + a13 * b06) * inv_det,
            (a02 * b10 - a01 * b11 - a03 * b09) * inv_det,
            (a00 * b11 - a02 * b08 + a03 * b07) * inv_det,
            (a01 * b08 - a00 * b10 - a03 * b06) * inv_det,
            (a31 * b05 - a32 * b04 + a33 * b03) * inv_det,
            (a32 * b02 - a30 * b05 - a33 * b01) * inv_det,
            (a30 * b04 - a31 * b02 + a33 * b00) * inv_det,
        ]))
    }

    /// Overwrites `self` with the normal matrix of `m`; left unchanged when `m` is singular.
    pub fn normal_from_mat4(&mut self, m: &Matrix4<T>) {
        match Self::try_normal_from_mat4(m) {
            Some(normal) => *self = normal,
            None => trace!("Matrix3::normal_from_mat4 skipped, determinant is zero"),
        }
    }

    /// Maps pixel coordinates of a `width` x `height` viewport to clip space, flipping y.
    #[rustfmt::skip]
    pub fn projection(width: T, height: T) -> Self {
        Self::with_values([
            T::two() / width, T::zero(), T::zero(),
            T::zero(), -T::two() / height, T::zero(),
            -T::one(), T::one(), T::one(),
        ])
    }
}

#[rustfmt::skip]
impl<T> Identity for Matrix3<T>
    where T: One + Zero {
    fn identity() -> Self {
        Self {
            values: [
                T::one(), T::zero(), T::zero(),
                T::zero(), T::one(), T::zero(),
                T::zero(), T::zero(), T::one(),
            ]
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

    use super::*;
    use crate::matrix::Matrix4f;
    use crate::vector::Vector3f;
    use assert_float_eq::*;

    fn assert_matrix_eq(actual: &Matrix3f, expected: &[f32; 9]) {
        for (value, expected) in actual.values().iter().zip(expected) {
            assert_float_absolute_eq!(*value, *expected, 0.0001);
        }
    }

    #[rustfmt::skip]
    fn sample() -> Matrix3f {
        Matrix3::with_values([
            1.0, 0.0, 5.0,
            2.0, 1.0, 6.0,
            3.0, 4.0, 0.0,
        ])
    }

    #[test]
    fn identity() {
        let m = Matrix3::<i32>::identity();

        for col in 0..3 {
            for row in 0..3 {
                assert_eq!(m[col][row], i32::from(col == row));
            }
        }
    }

    #[test]
    fn set_uses_storage_order() {
        let mut m = Matrix3f::identity();

        m.set(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);

        assert_eq!(m[0], [1.0, 2.0, 3.0]);
        assert_eq!(m[2][1], 8.0);
    }

    #[test]
    fn transpose() {
        let mut m = Matrix3f::with_values([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);

        m.transpose();

        assert_eq!(m.values(), &[1.0, 4.0, 7.0, 2.0, 5.0, 8.0, 3.0, 6.0, 9.0]);
    }

    #[test]
    fn determinant() {
        assert_float_absolute_eq!(sample().determinant(), 1.0, 0.0001);
    }

    #[rustfmt::skip]
    #[test]
    fn invert() {
        let mut m = sample();

        m.invert();

        assert_matrix_eq(&m, &[
            -24.0, 20.0, -5.0,
            18.0, -15.0, 4.0,
            5.0, -4.0, 1.0,
        ]);
    }

    #[test]
    fn invert_twice_is_original() {
        let mut m = sample();

        m.invert();
        m.invert();

        assert_matrix_eq(&m, sample().values());
    }

    #[test]
    fn invert_singular_is_noop() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
        let mut m = Matrix3f::with_values(values);

        m.invert();

        assert_eq!(m.values(), &values);
        assert!(m.try_inverse().is_none());
    }

    #[test]
    fn invert_zero_matrix_stays_zero() {
        let mut m = Matrix3f::with_values([0.0; 9]);

        m.invert();

        assert_eq!(m.values(), &[0.0; 9]);
        assert!(m.values().iter().all(|value| value.is_finite()));
    }

    #[test]
    fn adjoint_of_unit_determinant_is_inverse() {
        let mut adjoint = sample();
        adjoint.adjoint();

        let inverse = sample().try_inverse().unwrap();

        assert_matrix_eq(&adjoint, inverse.values());
    }

    #[test]
    fn identity_is_neutral() {
        let m = sample();

        assert_eq!(Matrix3::identity() * m, m);
        assert_eq!(m * Matrix3::identity(), m);
    }

    #[test]
    fn multiply_appends_right_operand() {
        let mut m = Matrix3f::from_translation(&Vector2::new(10.0, 0.0));
        m.multiply(&Matrix3::from_scaling(&Vector2::new(2.0, 2.0)));

        let mut point = Vector2::new(1.0, 1.0);
        point.transform_mat3(&m);

        assert_eq!(point, Vector2::new(12.0, 2.0));
    }

    #[test]
    fn translate_rotate_scale_match_constructors() {
        let mut m = Matrix3f::identity();
        m.translate(&Vector2::new(1.0, 2.0));
        m.rotate(FRAC_PI_4);
        m.scale(&Vector2::new(3.0, 4.0));

        let expected = Matrix3::from_translation(&Vector2::new(1.0, 2.0))
            * Matrix3::from_rotation(FRAC_PI_4)
            * Matrix3::from_scaling(&Vector2::new(3.0, 4.0));

        assert_matrix_eq(&m, expected.values());
    }

    #[test]
    fn from_axis_angle_around_z_matches_from_rotation() {
        let m = Matrix3f::from_axis_angle(&Vector3::new(0.0, 0.0, 5.0), FRAC_PI_2);

        assert_matrix_eq(&m, Matrix3::from_rotation(FRAC_PI_2).values());
    }

    #[test]
    fn from_axis_angle_with_zero_axis() {
        let axis = Vector3f::new(0.0, 0.0, 0.0);

        assert!(Matrix3::try_from_axis_angle(&axis, 1.0).is_none());
        assert_eq!(Matrix3::from_axis_angle(&axis, 1.0), Matrix3::identity());
    }

    #[test]
    fn from_mat2d() {
        let m = Matrix3f::from_mat2d(&Matrix2d::with_values([1.0, 2.0, 3.0, 4.0, 5.0, 6.0]));

        assert_eq!(m.values(), &[1.0, 2.0, 0.0, 3.0, 4.0, 0.0, 5.0, 6.0, 1.0]);
    }

    #[test]
    fn from_mat4_takes_upper_left_block() {
        let m = Matrix3f::from_mat4(&Matrix4::with_values([
            1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0,
        ]));

        assert_eq!(m.values(), &[1.0, 2.0, 3.0, 5.0, 6.0, 7.0, 9.0, 10.0, 11.0]);
    }

    #[test]
    fn from_quat_matches_axis_angle() {
        let axis = Vector3f::new(0.0, 1.0, 0.0);
        let q = Quaternion::from_axis_angle(&axis, FRAC_PI_2);

        let m = Matrix3::from_quat(&q);

        assert_matrix_eq(&m, Matrix3::from_axis_angle(&axis, FRAC_PI_2).values());
    }

    #[test]
    fn normal_from_mat4_of_scale() {
        let mut model = Matrix4f::from_scaling(&Vector3::new(2.0, 4.0, 8.0));
        model.translate(&Vector3::new(5.0, 5.0, 5.0));
        let mut normal = Matrix3f::identity();

        normal.normal_from_mat4(&model);

        assert_matrix_eq(&normal, &[0.5, 0.0, 0.0, 0.0, 0.25, 0.0, 0.0, 0.0, 0.125]);
    }

    #[test]
    fn normal_from_singular_mat4_is_noop() {
        let mut normal = sample();

        normal.normal_from_mat4(&Matrix4::with_values([0.0; 16]));

        assert_eq!(normal, sample());
    }

    #[test]
    fn projection() {
        let m = Matrix3f::projection(800.0, 600.0);

        let mut top_left = Vector2::new(0.0, 0.0);
        top_left.transform_mat3(&m);
        assert_eq!(top_left, Vector2::new(-1.0, 1.0));

        let mut bottom_right = Vector2::new(800.0, 600.0);
        bottom_right.transform_mat3(&m);
        assert_float_absolute_eq!(bottom_right.x, 1.0, 0.0001);
        assert_float_absolute_eq!(bottom_right.y, -1.0, 0.0001);
    }

    #[test]
    fn exact_equals_detects_single_ulp() {
        let a = sample();
        let mut b = a;
        b[1][1] = f32::from_bits(1.0_f32.to_bits() + 1);

        assert!(a.exact_equals(&a));
        assert!(!a.exact_equals(&b));
    }
}
