use std::fmt::{Debug, Display, Formatter};
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};

use log::trace;

use super::{struct_mat, Identity};
use crate::number_traits::{Float, One, Zero};
use crate::vector::Vector2;

pub type Matrix2f = Matrix2<f32>;

struct_mat!(Matrix2, 4, 2 x 2);

impl<T> Matrix2<T>
where
    T: Float,
{
    pub fn set(&mut self, m00: T, m01: T, m10: T, m11: T) {
        self.values = [m00, m01, m10, m11];
    }

    pub fn transpose(&mut self) {
        self.values.swap(1, 2);
    }

    pub fn determinant(&self) -> T {
        let [a0, a1, a2, a3] = self.values;
        a0 * a3 - a2 * a1
    }

    #[must_use]
    pub fn try_inverse(&self) -> Option<Matrix2<T>> {
        let [a0, a1, a2, a3] = self.values;
        let det = self.determinant();
        if det == T::zero() {
            return None;
        }

        let inv_det = T::one() / det;
        Some(Matrix2::with_values([
            a3 * inv_det,
            -a1 * inv_det,
            -a2 * inv_det,
            a0 * inv_det,
        ]))
    }

    /// Inverts the matrix in place. A singular matrix is left unchanged.
    pub fn invert(&mut self) {
        match self.try_inverse() {
            Some(inverse) => *self = inverse,
            None => trace!("Matrix2::invert skipped, determinant is zero"),
        }
    }

    pub fn adjoint(&mut self) {
        let [a0, a1, a2, a3] = self.values;
        self.values = [a3, -a1, -a2, a0];
    }

    pub fn multiply(&mut self, other: &Matrix2<T>) {
        let [a0, a1, a2, a3] = self.values;
        let [b0, b1, b2, b3] = other.values;
        self.values = [
            a0 * b0 + a2 * b1,
            a1 * b0 + a3 * b1,
            a0 * b2 + a2 * b3,
            a1 * b2 + a3 * b3,
        ];
    }

    pub fn rotate(&mut self, rad: T) {
        let [a0, a1, a2, a3] = self.values;
        let (s, c) = (rad.sin(), rad.cos());
        self.values = [
            a0 * c + a2 * s,
            a1 * c + a3 * s,
            a0 * -s + a2 * c,
            a1 * -s + a3 * c,
        ];
    }

    pub fn scale(&mut self, v: &Vector2<T>) {
        self.values[0] *= v.x;
        self.values[1] *= v.x;
        self.values[2] *= v.y;
        self.values[3] *= v.y;
    }

    pub fn from_rotation(rad: T) -> Self {
        let (s, c) = (rad.sin(), rad.cos());
        Self::with_values([c, s, -s, c])
    }

    pub fn from_scaling(v: &Vector2<T>) -> Self {
        Self::with_values([v.x, T::zero(), T::zero(), v.y])
    }
}

impl<T> Identity for Matrix2<T>
where
    T: One + Zero,
{
    fn identity() -> Self {
        Self {
            values: [T::one(), T::zero(), T::zero(), T::one()],
        }
    }
}
