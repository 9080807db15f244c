use std::fmt::{Debug, Display, Formatter};
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};

use log::trace;

use super::{struct_mat, Identity};
use crate::number_traits::{Float, One, Zero};
use crate::vector::Vector2;

pub type Matrix2df = Matrix2d<f32>;

// 2D affine transform `[a, b, c, d, tx, ty]`, the compact form of the 3x3 matrix
// [a c tx]
// [b d ty]
// [0 0  1]
struct_mat!(Matrix2d, 6, 3 x 2);

impl<T> Matrix2d<T>
where
    T: Float,
{
    pub fn set(&mut self, a: T, b: T, c: T, d: T, tx: T, ty: T) {
        self.values = [a, b, c, d, tx, ty];
    }

    pub fn determinant(&self) -> T {
        let [a, b, c, d, _, _] = self.values;
        a * d - b * c
    }

    #[must_use]
    pub fn try_inverse(&self) -> Option<Matrix2d<T>> {
        let [a, b, c, d, tx, ty] = self.values;
        let det = self.determinant();
        if det == T::zero() {
            return None;
        }

        let inv_det = T::one() / det;
        Some(Matrix2d::with_values([
            d * inv_det,
            -b * inv_det,
            -c * inv_det,
            a * inv_det,
            (c * ty - d * tx) * inv_det,
            (b * tx - a * ty) * inv_det,
        ]))
    }

    /// Inverts the matrix in place. A singular matrix is left unchanged.
    pub fn invert(&mut self) {
        match self.try_inverse() {
            Some(inverse) => *self = inverse,
            None => trace!("Matrix2d::invert skipped, determinant is zero"),
        }
    }

    pub fn multiply(&mut self, other: &Matrix2d<T>) {
        let [a0, a1, a2, a3, a4, a5] = self.values;
        let [b0, b1, b2, b3, b4, b5] = other.values;
        self.values = [
            a0 * b0 + a2 * b1,
            a1 * b0 + a3 * b1,
            a0 * b2 + a2 * b3,
            a1 * b2 + a3 * b3,
            a0 * b4 + a2 * b5 + a4,
            a1 * b4 + a3 * b5 + a5,
        ];
    }

    pub fn translate(&mut self, v: &Vector2<T>) {
        let [a0, a1, a2, a3, a4, a5] = self.values;
        self.values[4] = a0 * v.x + a2 * v.y + a4;
        self.values[5] = a1 * v.x + a3 * v.y + a5;
    }

    pub fn rotate(&mut self, rad: T) {
        let [a0, a1, a2, a3, _, _] = self.values;
        let (s, c) = (rad.sin(), rad.cos());
        self.values[0] = a0 * c + a2 * s;
        self.values[1] = a1 * c + a3 * s;
        self.values[2] = a0 * -s + a2 * c;
        self.values[3] = a1 * -s + a3 * c;
    }

    pub fn scale(&mut self, v: &Vector2<T>) {
        self.values[0] *= v.x;
        self.values[1] *= v.x;
        self.values[2] *= v.y;
        self.values[3] *= v.y;
    }

    pub fn from_translation(v: &Vector2<T>) -> Self {
        Self::with_values([T::one(), T::zero(), T::zero(), T::one(), v.x, v.y])
    }

    pub fn from_rotation(rad: T) -> Self {
        let (s, c) = (rad.sin(), rad.cos());
        Self::with_values([c, s, -s, c, T::zero(), T::zero()])
    }

    pub fn from_scaling(v: &Vector2<T>) -> Self {
        Self::with_values([v.x, T::zero(), T::zero(), v.y, T::zero(), T::zero()])
    }
}

impl<T> Identity for Matrix2d<T>
where
    T: One + Zero,
{
    fn identity() -> Self {
        Self {
            values: [
                T::one(),
                T::zero(),
                T::zero(),
                T::one(),
                T::zero(),
                T::zero(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;
    use assert_float_eq::*;

    #[test]
    fn translate_then_point() {
        let mut m = Matrix2df::identity();
        m.translate(&Vector2::new(2.0, 3.0));
        m.scale(&Vector2::new(2.0, 2.0));

        let mut point = Vector2::new(1.0, 1.0);
        point.transform_mat2d(&m);

        assert_eq!(point, Vector2::new(4.0, 5.0));
    }

    #[test]
    fn invert() {
        let mut m = Matrix2df::from_translation(&Vector2::new(2.0, -1.0));
        m.rotate(FRAC_PI_2);
        let original = m;

        m.invert();
        let product = original * m;

        for (value, expected) in product.values().iter().zip(Matrix2df::identity().values()) {
            assert_float_absolute_eq!(*value, *expected, 0.0001);
        }
    }

    #[test]
    fn invert_singular_is_noop() {
        let mut m = Matrix2df::with_values([0.0, 0.0, 0.0, 0.0, 1.0, 2.0]);

        m.invert();

        assert_eq!(m.values(), &[0.0, 0.0, 0.0, 0.0, 1.0, 2.0]);
    }

    #[test]
    fn constructors() {
        assert_eq!(
            Matrix2df::from_scaling(&Vector2::new(2.0, 3.0)).values(),
            &[2.0, 0.0, 0.0, 3.0, 0.0, 0.0]
        );

        let rotation = Matrix2df::from_rotation(FRAC_PI_2);
        assert_float_absolute_eq!(rotation[0][1], 1.0, 0.0001);
        assert_float_absolute_eq!(rotation[1][0], -1.0, 0.0001);
        assert_eq!(rotation[2], [0.0, 0.0]);
    }

    #[test]
    fn determinant() {
        let m = Matrix2df::with_values([1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);

        assert_eq!(m.determinant(), -2.0);
    }
}
