use std::fmt::{Display, Formatter};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::matrix::{Matrix2, Matrix2d, Matrix3, Matrix4};
use crate::number_traits::{Float, Zero};
use crate::quaternion::Quaternion;

pub type Vector2f = Vector2<f32>;
pub type Vector3f = Vector3<f32>;
pub type Vector4f = Vector4<f32>;

macro_rules! struct_vec {
    ($name:ident : $display_fmt:literal, $len:literal, ($($dim:ident : $TY:ty => $idx:tt,)*)) => {
        #[must_use]
        #[repr(C)]
        #[derive(Clone, Copy, PartialEq, Eq, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name<T = f32> {
            $(pub $dim: T,)*
        }

        impl<T> $name<T> {
            pub const fn new($($dim: T),*) -> Self {
                Self {
                    $($dim),*
                }
            }

            pub fn set(&mut self, $($dim: T),*) {
                $(self.$dim = $dim;)*
            }
        }

        impl<T> $name<T>
        where T: Float {
            pub fn dot(&self, other: &Self) -> T {
                let mut dot = T::zero();
                $(dot += self.$dim * other.$dim;)*
                dot
            }

            pub fn squared_length(&self) -> T {
                self.dot(self)
            }

            pub fn length(&self) -> T {
                self.squared_length().sqrt()
            }

            pub fn squared_distance(&self, other: &Self) -> T {
                let mut distance = T::zero();
                $(distance += (other.$dim - self.$dim).squared();)*
                distance
            }

            pub fn distance(&self, other: &Self) -> T {
                self.squared_distance(other).sqrt()
            }

            /// Scales the vector to unit length. A zero vector is left untouched.
            pub fn normalize(&mut self) {
                let squared_length = self.squared_length();
                if squared_length > T::zero() {
                    let inverse_length = T::one() / squared_length.sqrt();
                    $(self.$dim *= inverse_length;)*
                }
            }

            pub fn normalized(&self) -> Self {
                let mut normalized = *self;
                normalized.normalize();
                normalized
            }

            pub fn scale(&mut self, scalar: T) {
                $(self.$dim *= scalar;)*
            }

            /// `self += other * scalar`
            pub fn scale_and_add(&mut self, other: &Self, scalar: T) {
                $(self.$dim += other.$dim * scalar;)*
            }

            /// Component-wise product.
            pub fn multiply(&mut self, other: &Self) {
                $(self.$dim *= other.$dim;)*
            }

            /// Component-wise quotient, IEEE-754 semantics for zero divisors.
            pub fn divide(&mut self, other: &Self) {
                $(self.$dim /= other.$dim;)*
            }

            pub fn min(&mut self, other: &Self) {
                $(self.$dim = Float::min(self.$dim, other.$dim);)*
            }

            pub fn max(&mut self, other: &Self) {
                $(self.$dim = Float::max(self.$dim, other.$dim);)*
            }

            pub fn ceil(&mut self) {
                $(self.$dim = self.$dim.ceil();)*
            }

            pub fn floor(&mut self) {
                $(self.$dim = self.$dim.floor();)*
            }

            pub fn round(&mut self) {
                $(self.$dim = self.$dim.round();)*
            }

            pub fn negate(&mut self) {
                $(self.$dim = -self.$dim;)*
            }

            /// Replaces every component by its reciprocal.
            pub fn inverse(&mut self) {
                $(self.$dim = T::one() / self.$dim;)*
            }

            /// Linear interpolation towards `other`; `t` is not clamped.
            pub fn lerp(&mut self, other: &Self, t: T) {
                $(self.$dim = self.$dim + t * (other.$dim - self.$dim);)*
            }

            #[must_use]
            pub fn exact_equals(&self, other: &Self) -> bool {
                true $(&& self.$dim == other.$dim)*
            }
        }

        impl<T> Default for $name<T>
        where T: Zero {
            fn default() -> Self {
                Self {
                    $($dim: T::zero(),)*
                }
            }
        }

        impl<T> Add for $name<T>
        where
            T: Copy + Add<Output = T>, {
            type Output = Self;

            fn add(self, rhs: Self) -> Self::Output {
                Self {
                    $($dim: self.$dim + rhs.$dim),*
                }
            }
        }

        impl<T> AddAssign for $name<T>
        where
            T: Copy + Add<Output = T>, {
            fn add_assign(&mut self, rhs: Self) {
                *self = Self {
                    $($dim: self.$dim + rhs.$dim),*
                }
            }
        }

        impl<T> Sub for $name<T>
        where
            T: Copy + Sub<Output = T>, {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self::Output {
                Self {
                    $($dim: self.$dim - rhs.$dim),*
                }
            }
        }

        impl<T> SubAssign for $name<T>
        where
            T: Copy + Sub<Output = T>, {
            fn sub_assign(&mut self, rhs: Self) {
                *self = Self {
                    $($dim: self.$dim - rhs.$dim),*
                }
            }
        }

        impl<T> Mul<T> for $name<T>
        where
            T: Copy + Mul<Output = T>, {
            type Output = Self;

            fn mul(self, rhs: T) -> Self::Output {
                Self {
                    $($dim: self.$dim * rhs),*
                }
            }
        }

        impl<T> MulAssign<T> for $name<T>
        where
            T: Copy + Mul<Output = T>, {
            fn mul_assign(&mut self, rhs: T) {
                *self = Self {
                    $($dim: self.$dim * rhs),*
                }
            }
        }

        impl<T> Div<T> for $name<T>
        where
            T: Copy + Div<Output = T>, {
            type Output = Self;

            fn div(self, rhs: T) -> Self::Output {
                Self {
                    $($dim: self.$dim / rhs),*
                }
            }
        }

        impl<T> DivAssign<T> for $name<T>
        where
            T: Copy + Div<Output = T>, {
            fn div_assign(&mut self, rhs: T) {
                *self = Self {
                    $($dim: self.$dim / rhs),*
                }
            }
        }

        impl<T> Neg for $name<T>
        where
            T: Copy + Neg<Output = T>,
        {
            type Output = Self;

            fn neg(self) -> Self::Output {
                Self {
                    $($dim: -self.$dim),*
                }
            }
        }

        impl<T> Display for $name<T>
        where
            T: Display,
        {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, $display_fmt, $(self.$dim),*)
            }
        }

        impl<T> From<($($TY),*)> for $name<T>
        where
            T: Copy {
            fn from(tuple: ($($TY),*)) -> Self {
                Self {
                    $($dim: tuple.$idx),*
                }
            }
        }

        impl<T> From<$name<T>> for ($($TY),*)
        where
            T: Copy,
        {
            fn from(vector: $name<T>) -> Self {
                ($(vector.$dim),*)
            }
        }

        impl<T> From<[T; $len]> for $name<T> {
            fn from(value: [T; $len]) -> Self {
                let [$($dim),*] = value;
                Self {
                    $($dim),*
                }
            }
        }

        impl<T> From<$name<T>> for [T; $len] {
            fn from(value: $name<T>) -> Self {
                [$(value.$dim),*]
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

struct_vec!(Vector2: "({}, {})", 2, (x: T => 0, y: T => 1,));
struct_vec!(Vector3: "({}, {}, {})", 3, (x: T => 0, y: T => 1, z: T => 2,));
struct_vec!(Vector4: "({}, {}, {}, {})", 4, (x: T => 0, y: T => 1, z: T => 2, w: T => 3,));

/// `acos` of a cosine that rounding may have pushed slightly outside of `[-1, 1]`.
fn clamped_angle<T>(cosine: T) -> T
where
    T: Float,
{
    if cosine > T::one() {
        T::zero()
    } else if cosine < -T::one() {
        T::pi()
    } else {
        cosine.acos()
    }
}

impl<T> Vector2<T>
where
    T: Float,
{
    /// 2D cross product. The result lies on the z axis.
    pub fn cross(&self, other: &Vector2<T>) -> Vector3<T> {
        Vector3::new(T::zero(), T::zero(), self.x * other.y - self.y * other.x)
    }

    /// Rotates the point around `origin` by `rad` radians.
    pub fn rotate(&mut self, origin: &Vector2<T>, rad: T) {
        let px = self.x - origin.x;
        let py = self.y - origin.y;
        let (sin, cos) = (rad.sin(), rad.cos());

        self.x = px * cos - py * sin + origin.x;
        self.y = px * sin + py * cos + origin.y;
    }

    pub fn angle(&self, other: &Vector2<T>) -> T {
        let mut inverse_length_a = self.squared_length();
        if inverse_length_a > T::zero() {
            inverse_length_a = T::one() / inverse_length_a.sqrt();
        }

        let mut inverse_length_b = other.squared_length();
        if inverse_length_b > T::zero() {
            inverse_length_b = T::one() / inverse_length_b.sqrt();
        }

        clamped_angle(self.dot(other) * inverse_length_a * inverse_length_b)
    }

    pub fn transform_mat2(&mut self, m: &Matrix2<T>) {
        let m = m.values();
        let (x, y) = (self.x, self.y);
        self.x = m[0] * x + m[2] * y;
        self.y = m[1] * x + m[3] * y;
    }

    pub fn transform_mat2d(&mut self, m: &Matrix2d<T>) {
        let m = m.values();
        let (x, y) = (self.x, self.y);
        self.x = m[0] * x + m[2] * y + m[4];
        self.y = m[1] * x + m[3] * y + m[5];
    }

    /// Transforms as the homogeneous point `(x, y, 1)`.
    pub fn transform_mat3(&mut self, m: &Matrix3<T>) {
        let m = m.values();
        let (x, y) = (self.x, self.y);
        self.x = m[0] * x + m[3] * y + m[6];
        self.y = m[1] * x + m[4] * y + m[7];
    }

    /// Transforms as the homogeneous point `(x, y, 0, 1)`.
    pub fn transform_mat4(&mut self, m: &Matrix4<T>) {
        let m = m.values();
        let (x, y) = (self.x, self.y);
        self.x = m[0] * x + m[4] * y + m[12];
        self.y = m[1] * x + m[5] * y + m[13];
    }
}

impl<T> Vector3<T>
where
    T: Float,
{
    pub fn cross(&self, other: &Vector3<T>) -> Vector3<T> {
        Vector3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Hermite interpolation between `self` and `d` with tangents `b` and `c`.
    pub fn hermite(&mut self, b: &Vector3<T>, c: &Vector3<T>, d: &Vector3<T>, t: T) {
        let t_squared = t * t;
        let factor1 = t_squared * (T::two() * t - T::three()) + T::one();
        let factor2 = t_squared * (t - T::two()) + t;
        let factor3 = t_squared * (t - T::one());
        let factor4 = t_squared * (T::three() - T::two() * t);

        *self = Vector3::new(
            self.x * factor1 + b.x * factor2 + c.x * factor3 + d.x * factor4,
            self.y * factor1 + b.y * factor2 + c.y * factor3 + d.y * factor4,
            self.z * factor1 + b.z * factor2 + c.z * factor3 + d.z * factor4,
        );
    }

    /// Cubic Bezier interpolation with control points `b` and `c`.
    pub fn bezier(&mut self, b: &Vector3<T>, c: &Vector3<T>, d: &Vector3<T>, t: T) {
        let inverse_t = T::one() - t;
        let inverse_t_squared = inverse_t * inverse_t;
        let t_squared = t * t;
        let factor1 = inverse_t_squared * inverse_t;
        let factor2 = T::three() * t * inverse_t_squared;
        let factor3 = T::three() * t_squared * inverse_t;
        let factor4 = t_squared * t;

        *self = Vector3::new(
            self.x * factor1 + b.x * factor2 + c.x * factor3 + d.x * factor4,
            self.y * factor1 + b.y * factor2 + c.y * factor3 + d.y * factor4,
            self.z * factor1 + b.z * factor2 + c.z * factor3 + d.z * factor4,
        );
    }

    /// Rotates the point around the x axis passing through `origin`.
    pub fn rotate_x(&mut self, origin: &Vector3<T>, rad: T) {
        let p = *self - *origin;
        let (sin, cos) = (rad.sin(), rad.cos());
        let rotated = Vector3::new(p.x, p.y * cos - p.z * sin, p.y * sin + p.z * cos);
        *self = rotated + *origin;
    }

    /// Rotates the point around the y axis passing through `origin`.
    pub fn rotate_y(&mut self, origin: &Vector3<T>, rad: T) {
        let p = *self - *origin;
        let (sin, cos) = (rad.sin(), rad.cos());
        let rotated = Vector3::new(p.z * sin + p.x * cos, p.y, p.z * cos - p.x * sin);
        *self = rotated + *origin;
    }

    /// Rotates the point around the z axis passing through `origin`.
    pub fn rotate_z(&mut self, origin: &Vector3<T>, rad: T) {
        let p = *self - *origin;
        let (sin, cos) = (rad.sin(), rad.cos());
        let rotated = Vector3::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos, p.z);
        *self = rotated + *origin;
    }

    /// Angle in radians between two vectors, `0` or `π` when rounding pushes the cosine
    /// outside of `[-1, 1]`.
    pub fn angle(&self, other: &Vector3<T>) -> T {
        clamped_angle(self.normalized().dot(&other.normalized()))
    }

    pub fn transform_mat3(&mut self, m: &Matrix3<T>) {
        let m = m.values();
        let (x, y, z) = (self.x, self.y, self.z);
        self.x = x * m[0] + y * m[3] + z * m[6];
        self.y = x * m[1] + y * m[4] + z * m[7];
        self.z = x * m[2] + y * m[5] + z * m[8];
    }

    /// Transforms as the homogeneous point `(x, y, z, 1)` and divides by the resulting `w`.
    /// The divide always happens, so projective matrices yield their perspective-divided
    /// point. A resulting `w` of exactly zero is treated as one.
    pub fn transform_mat4(&mut self, m: &Matrix4<T>) {
        let m = m.values();
        let (x, y, z) = (self.x, self.y, self.z);
        let mut w = m[3] * x + m[7] * y + m[11] * z + m[15];
        if w == T::zero() {
            w = T::one();
        }

        self.x = (m[0] * x + m[4] * y + m[8] * z + m[12]) / w;
        self.y = (m[1] * x + m[5] * y + m[9] * z + m[13]) / w;
        self.z = (m[2] * x + m[6] * y + m[10] * z + m[14]) / w;
    }

    /// Rotates the vector by `q`, assumed to be of unit length.
    pub fn transform_quat(&mut self, q: &Quaternion<T>) {
        *self = rotate_by_quaternion(self, q);
    }
}

/// `v + 2w(q × v) + 2(q × (q × v))`
fn rotate_by_quaternion<T>(v: &Vector3<T>, q: &Quaternion<T>) -> Vector3<T>
where
    T: Float,
{
    let u = q.vector_part();
    let uv = u.cross(v);
    let uuv = u.cross(&uv);
    *v + uv * (q.w * T::two()) + uuv * T::two()
}

impl<T> Vector4<T>
where
    T: Float,
{
    pub fn transform_mat4(&mut self, m: &Matrix4<T>) {
        let m = m.values();
        let (x, y, z, w) = (self.x, self.y, self.z, self.w);
        self.x = m[0] * x + m[4] * y + m[8] * z + m[12] * w;
        self.y = m[1] * x + m[5] * y + m[9] * z + m[13] * w;
        self.z = m[2] * x + m[6] * y + m[10] * z + m[14] * w;
        self.w = m[3] * x + m[7] * y + m[11] * z + m[15] * w;
    }

    /// Rotates the `xyz` part by `q`; `w` is kept as is.
    pub fn transform_quat(&mut self, q: &Quaternion<T>) {
        let rotated = rotate_by_quaternion(&Vector3::new(self.x, self.y, self.z), q);
        self.x = rotated.x;
        self.y = rotated.y;
        self.z = rotated.z;
    }
}
