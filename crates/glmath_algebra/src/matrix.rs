//! Column-major matrices.
//!
//! `m[c]` is column `c`, so `m[c][r]` addresses row `r` of column `c`, stored at linear index
//! `c * ROWS + r`. Products follow the column-vector convention: `a.multiply(&b)` leaves
//! `a * b` in `a`, which applies `b` to a vector first and `a` second. The appending
//! operations (`translate`, `rotate*`, `scale`) use the same ordering.

mod matrix2;
mod matrix2d;
mod matrix3;
mod matrix4;

pub use matrix2::{Matrix2, Matrix2f};
pub use matrix2d::{Matrix2d, Matrix2df};
pub use matrix3::{Matrix3, Matrix3f};
pub use matrix4::{Matrix4, Matrix4f};

pub trait Identity {
    fn identity() -> Self;
}

macro_rules! struct_mat {
    ($name:ident, $len:literal, $cols:literal x $rows:literal) => {
        #[must_use]
        #[repr(C)]
        #[derive(Clone, Copy, PartialEq)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name<T = f32> {
            values: [T; $len],
        }

        impl<T> $name<T> {
            const COLS: usize = $cols;
            const ROWS: usize = $rows;

            /// Creates a matrix from its elements in column-major order.
            pub const fn with_values(values: [T; $len]) -> Self {
                Self { values }
            }

            #[must_use]
            pub fn values(&self) -> &[T; $len] {
                &self.values
            }

            pub fn values_mut(&mut self) -> &mut [T; $len] {
                &mut self.values
            }
        }

        impl<T> $name<T>
        where
            T: Float,
        {
            /// Resets every element to the identity matrix.
            pub fn set_identity(&mut self) {
                *self = Self::identity();
            }

            /// Frobenius norm, the square root of the sum of all squared elements.
            pub fn frob(&self) -> T {
                let mut sum = T::zero();
                for value in &self.values {
                    sum += value.squared();
                }
                sum.sqrt()
            }

            pub fn multiply_scalar(&mut self, scalar: T) {
                for value in &mut self.values {
                    *value *= scalar;
                }
            }

            /// `self += other * scalar`, element-wise.
            pub fn multiply_scalar_and_add(&mut self, other: &Self, scalar: T) {
                for (value, other) in self.values.iter_mut().zip(other.values.iter()) {
                    *value += *other * scalar;
                }
            }

            #[must_use]
            pub fn exact_equals(&self, other: &Self) -> bool {
                self.values
                    .iter()
                    .zip(other.values.iter())
                    .all(|(a, b)| a == b)
            }
        }

        impl<T> Add for $name<T>
        where
            T: Float,
        {
            type Output = Self;

            fn add(mut self, rhs: Self) -> Self::Output {
                self += rhs;
                self
            }
        }

        impl<T> AddAssign for $name<T>
        where
            T: Float,
        {
            fn add_assign(&mut self, rhs: Self) {
                for (value, rhs) in self.values.iter_mut().zip(rhs.values) {
                    *value += rhs;
                }
            }
        }

        impl<T> Sub for $name<T>
        where
            T: Float,
        {
            type Output = Self;

            fn sub(mut self, rhs: Self) -> Self::Output {
                self -= rhs;
                self
            }
        }

        impl<T> SubAssign for $name<T>
        where
            T: Float,
        {
            fn sub_assign(&mut self, rhs: Self) {
                for (value, rhs) in self.values.iter_mut().zip(rhs.values) {
                    *value -= rhs;
                }
            }
        }

        impl<T> Mul for $name<T>
        where
            T: Float,
        {
            type Output = Self;

            fn mul(mut self, rhs: Self) -> Self::Output {
                self.multiply(&rhs);
                self
            }
        }

        impl<T> MulAssign for $name<T>
        where
            T: Float,
        {
            fn mul_assign(&mut self, rhs: Self) {
                self.multiply(&rhs);
            }
        }

        impl<T> Index<usize> for $name<T> {
            type Output = [T];

            fn index(&self, index: usize) -> &Self::Output {
                &self.values[index * Self::ROWS..(index + 1) * Self::ROWS]
            }
        }

        impl<T> IndexMut<usize> for $name<T> {
            fn index_mut(&mut self, index: usize) -> &mut Self::Output {
                &mut self.values[index * Self::ROWS..(index + 1) * Self::ROWS]
            }
        }

        impl<T> Debug for $name<T>
        where
            T: Display,
        {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                writeln!(f, "[")?;
                for row in 0..Self::ROWS {
                    write!(f, "\t")?;
                    for col in 0..Self::COLS {
                        write!(f, "{}, ", self.values[col * Self::ROWS + row])?;
                    }
                    writeln!(f)?;
                }
                writeln!(f, "]")
            }
        }

        impl<T> From<$name<T>> for [T; $len] {
            fn from(matrix: $name<T>) -> Self {
                matrix.values
            }
        }

        #[cfg(feature = "bytemuck")]
        unsafe impl bytemuck::Zeroable for $name<f32> {}
        #[cfg(feature = "bytemuck")]
        unsafe impl bytemuck::Pod for $name<f32> {}
        #[cfg(feature = "bytemuck")]
        unsafe impl bytemuck::Zeroable for $name<f64> {}
        #[cfg(feature = "bytemuck")]
        unsafe impl bytemuck::Pod for $name<f64> {}
    };
}

pub(crate) use struct_mat;
