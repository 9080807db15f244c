use std::fmt::{Display, Formatter};
use std::ops::{Mul, MulAssign, Neg};

use crate::matrix::{Identity, Matrix3, Matrix4};
use crate::number_traits::{Float, One, Zero};
use crate::vector::Vector3;

pub type Quaternionf = Quaternion<f32>;

/// Rotation stored as `x i + y j + z k + w`. Rotation operations expect unit length, which
/// only [`Quaternion::normalize`] enforces.
#[must_use]
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quaternion<T = f32> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

impl<T> Quaternion<T> {
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    pub fn set(&mut self, x: T, y: T, z: T, w: T) {
        *self = Self::new(x, y, z, w);
    }
}

impl<T> Quaternion<T>
where
    T: Float,
{
    pub fn vector_part(&self) -> Vector3<T> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Rotation of `rad` radians around `axis`, which must already be of unit length.
    pub fn from_axis_angle(axis: &Vector3<T>, rad: T) -> Self {
        let mut q = Self::identity();
        q.set_axis_angle(axis, rad);
        q
    }

    pub fn set_axis_angle(&mut self, axis: &Vector3<T>, rad: T) {
        let half_angle = rad.half();
        let s = half_angle.sin();
        self.x = s * axis.x;
        self.y = s * axis.y;
        self.z = s * axis.z;
        self.w = half_angle.cos();
    }

    /// Rotation axis and angle in radians. Near the identity the axis is arbitrary and
    /// `(1, 0, 0)` is returned.
    pub fn axis_angle(&self) -> (Vector3<T>, T) {
        let rad = self.w.acos() * T::two();
        let s = rad.half().sin();
        let axis = if s > T::epsilon() {
            self.vector_part() / s
        } else {
            Vector3::new(T::one(), T::zero(), T::zero())
        };
        (axis, rad)
    }

    /// Hamilton product `self * other`, the rotation applying `other` first.
    pub fn multiply(&mut self, other: &Quaternion<T>) {
        let Quaternion {
            x: ax,
            y: ay,
            z: az,
            w: aw,
        } = *self;
        let Quaternion {
            x: bx,
            y: by,
            z: bz,
            w: bw,
        } = *other;

        self.x = ax * bw + aw * bx + ay * bz - az * by;
        self.y = ay * bw + aw * by + az * bx - ax * bz;
        self.z = az * bw + aw * bz + ax * by - ay * bx;
        self.w = aw * bw - ax * bx - ay * by - az * bz;
    }

    pub fn rotate_x(&mut self, rad: T) {
        let half_angle = rad.half();
        let (bx, bw) = (half_angle.sin(), half_angle.cos());
        let Quaternion { x, y, z, w } = *self;

        self.x = x * bw + w * bx;
        self.y = y * bw + z * bx;
        self.z = z * bw - y * bx;
        self.w = w * bw - x * bx;
    }

    pub fn rotate_y(&mut self, rad: T) {
        let half_angle = rad.half();
        let (by, bw) = (half_angle.sin(), half_angle.cos());
        let Quaternion { x, y, z, w } = *self;

        self.x = x * bw - z * by;
        self.y = y * bw + w * by;
        self.z = z * bw + x * by;
        self.w = w * bw - y * by;
    }

    pub fn rotate_z(&mut self, rad: T) {
        let half_angle = rad.half();
        let (bz, bw) = (half_angle.sin(), half_angle.cos());
        let Quaternion { x, y, z, w } = *self;

        self.x = x * bw + y * bz;
        self.y = y * bw - x * bz;
        self.z = z * bw + w * bz;
        self.w = w * bw - z * bz;
    }

    /// Recomputes `w` from the vector part, assuming unit length.
    pub fn calculate_w(&mut self) {
        self.w = (T::one() - self.x.squared() - self.y.squared() - self.z.squared())
            .abs()
            .sqrt();
    }

    /// Spherical linear interpolation towards `other` along the shortest arc.
    pub fn slerp(&mut self, other: &Quaternion<T>, t: T) {
        let mut other = *other;
        let mut cosine = self.dot(&other);
        if cosine < T::zero() {
            cosine = -cosine;
            other = -other;
        }

        let (scale_self, scale_other) = if T::one() - cosine > T::epsilon() {
            let omega = cosine.acos();
            let sine = omega.sin();
            (
                ((T::one() - t) * omega).sin() / sine,
                (t * omega).sin() / sine,
            )
        } else {
            (T::one() - t, t)
        };

        self.x = scale_self * self.x + scale_other * other.x;
        self.y = scale_self * self.y + scale_other * other.y;
        self.z = scale_self * self.z + scale_other * other.z;
        self.w = scale_self * self.w + scale_other * other.w;
    }

    /// Multiplicative inverse. A zero quaternion becomes all zeros.
    pub fn invert(&mut self) {
        let dot = self.squared_length();
        let inverse_dot = if dot == T::zero() {
            T::zero()
        } else {
            T::one() / dot
        };

        self.x = -self.x * inverse_dot;
        self.y = -self.y * inverse_dot;
        self.z = -self.z * inverse_dot;
        self.w = self.w * inverse_dot;
    }

    pub fn conjugate(&mut self) {
        self.x = -self.x;
        self.y = -self.y;
        self.z = -self.z;
    }

    /// Rotation of a 3x3 rotation matrix, not renormalized.
    pub fn from_mat3(m: &Matrix3<T>) -> Self {
        let m = m.values();
        let trace = m[0] + m[4] + m[8];

        if trace > T::zero() {
            // |w| > 1/2
            let root = (trace + T::one()).sqrt();
            let w = root.half();
            let root = T::one().half() / root;
            return Self::new(
                (m[5] - m[7]) * root,
                (m[6] - m[2]) * root,
                (m[1] - m[3]) * root,
                w,
            );
        }

        let mut i = 0;
        if m[4] > m[0] {
            i = 1;
        }
        if m[8] > m[i * 3 + i] {
            i = 2;
        }
        let j = (i + 1) % 3;
        let k = (i + 2) % 3;

        let root = (m[i * 3 + i] - m[j * 3 + j] - m[k * 3 + k] + T::one()).sqrt();
        let mut vector = [T::zero(); 3];
        vector[i] = root.half();
        let root = T::one().half() / root;
        vector[j] = (m[j * 3 + i] + m[i * 3 + j]) * root;
        vector[k] = (m[k * 3 + i] + m[i * 3 + k]) * root;

        let [x, y, z] = vector;
        Self::new(x, y, z, (m[j * 3 + k] - m[k * 3 + j]) * root)
    }

    /// Rotation from Euler angles around the x, y and z axes, in degrees.
    pub fn from_euler(x: T, y: T, z: T) -> Self {
        let x = x.to_radians().half();
        let y = y.to_radians().half();
        let z = z.to_radians().half();
        let (sx, cx) = (x.sin(), x.cos());
        let (sy, cy) = (y.sin(), y.cos());
        let (sz, cz) = (z.sin(), z.cos());

        Self::new(
            sx * cy * cz - cx * sy * sz,
            cx * sy * cz + sx * cy * sz,
            cx * cy * sz - sx * sy * cz,
            cx * cy * cz + sx * sy * sz,
        )
    }

    pub fn dot(&self, other: &Quaternion<T>) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    pub fn squared_length(&self) -> T {
        self.dot(self)
    }

    pub fn length(&self) -> T {
        self.squared_length().sqrt()
    }

    /// Scales to unit length. A zero quaternion is left untouched.
    pub fn normalize(&mut self) {
        let squared_length = self.squared_length();
        if squared_length > T::zero() {
            let inverse_length = T::one() / squared_length.sqrt();
            self.x *= inverse_length;
            self.y *= inverse_length;
            self.z *= inverse_length;
            self.w *= inverse_length;
        }
    }

    pub fn normalized(&self) -> Self {
        let mut normalized = *self;
        normalized.normalize();
        normalized
    }

    /// Component-wise linear interpolation, not renormalized.
    pub fn lerp(&mut self, other: &Quaternion<T>, t: T) {
        self.x = self.x + t * (other.x - self.x);
        self.y = self.y + t * (other.y - self.y);
        self.z = self.z + t * (other.z - self.z);
        self.w = self.w + t * (other.w - self.w);
    }

    #[must_use]
    pub fn exact_equals(&self, other: &Quaternion<T>) -> bool {
        self.x == other.x && self.y == other.y && self.z == other.z && self.w == other.w
    }

    pub fn rotation_matrix(&self) -> Matrix4<T> {
        Matrix4::from_quat(self)
    }
}

impl<T> Identity for Quaternion<T>
where
    T: One + Zero,
{
    fn identity() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::one())
    }
}

impl<T> Default for Quaternion<T>
where
    T: One + Zero,
{
    fn default() -> Self {
        Self::identity()
    }
}

impl<T> Display for Quaternion<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({} + {} i + {} j + {} k)",
            self.w, self.x, self.y, self.z
        )
    }
}

impl<T> Neg for Quaternion<T>
where
    T: Float,
{
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl<T> Mul for Quaternion<T>
where
    T: Float,
{
    type Output = Self;

    fn mul(mut self, rhs: Self) -> Self::Output {
        self.multiply(&rhs);
        self
    }
}

impl<T> MulAssign for Quaternion<T>
where
    T: Float,
{
    fn mul_assign(&mut self, rhs: Self) {
        self.multiply(&rhs);
    }
}

impl<T> From<Matrix3<T>> for Quaternion<T>
where
    T: Float,
{
    fn from(m: Matrix3<T>) -> Self {
        Self::from_mat3(&m)
    }
}

impl<T> From<Matrix4<T>> for Quaternion<T>
where
    T: Float,
{
    fn from(m: Matrix4<T>) -> Self {
        m.rotation()
    }
}

impl<T> From<[T; 4]> for Quaternion<T> {
    fn from([x, y, z, w]: [T; 4]) -> Self {
        Self::new(x, y, z, w)
    }
}

impl<T> From<Quaternion<T>> for [T; 4] {
    fn from(q: Quaternion<T>) -> Self {
        [q.x, q.y, q.z, q.w]
    }
}

#[cfg(feature = "bytemuck")]
unsafe impl bytemuck::Zeroable for Quaternion<f32> {}
#[cfg(feature = "bytemuck")]
unsafe impl bytemuck::Pod for Quaternion<f32> {}
#[cfg(feature = "bytemuck")]
unsafe impl bytemuck::Zeroable for Quaternion<f64> {}
#[cfg(feature = "bytemuck")]
unsafe impl bytemuck::Pod for Quaternion<f64> {}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    use assert_float_eq::*;

    use crate::vector::Vector3f;

    use super::*;

    fn assert_same_rotation(actual: &Quaternionf, expected: &Quaternionf) {
        assert_float_absolute_eq!(actual.dot(expected).abs(), 1.0, 0.0001);
    }

    fn assert_quaternion_eq(actual: &Quaternionf, expected: &Quaternionf) {
        assert_float_absolute_eq!(actual.x, expected.x, 0.0001);
        assert_float_absolute_eq!(actual.y, expected.y, 0.0001);
        assert_float_absolute_eq!(actual.z, expected.z, 0.0001);
        assert_float_absolute_eq!(actual.w, expected.w, 0.0001);
    }

    #[test]
    fn identity() {
        let q = Quaternionf::identity();

        assert_eq!(q, Quaternion::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(Quaternionf::default(), q);
    }

    #[test]
    fn set() {
        let mut q = Quaternionf::identity();

        q.set(1.0, 2.0, 3.0, 4.0);

        assert_eq!(<[f32; 4]>::from(q), [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn mul() {
        let q1 = Quaternion::new(1.1, 2.0, 4.4, 12.4);
        let q2 = Quaternion::new(0.3, 45.0, 5.0, 4.0);

        let result = q1 * q2;

        assert_float_absolute_eq!(result.w, -62.73, 0.01);
        assert_float_absolute_eq!(result.x, -179.88, 0.01);
        assert_float_absolute_eq!(result.y, 561.82, 0.01);
        assert_float_absolute_eq!(result.z, 128.5, 0.01);
    }

    #[test]
    fn mul_assign_matches_multiply() {
        let mut a = Quaternion::new(1.1, 2.0, 4.4, 12.4);
        let mut b = a;
        let rhs = Quaternion::new(0.3, 45.0, 5.0, 4.0);

        a *= rhs;
        b.multiply(&rhs);

        assert_eq!(a, b);
    }

    #[test]
    fn from_axis_angle() {
        let axis = Vector3::new(1.0, 2.0, 3.0).normalized();
        let angle = 0.74;

        let quaternion = Quaternion::from_axis_angle(&axis, angle);

        assert_float_absolute_eq!(quaternion.w, 0.93, 0.01);
        assert_float_absolute_eq!(quaternion.x, 0.09, 0.01);
        assert_float_absolute_eq!(quaternion.y, 0.19, 0.01);
        assert_float_absolute_eq!(quaternion.z, 0.28, 0.01);
    }

    #[test]
    fn axis_angle() {
        let q = Quaternion::from_axis_angle(&Vector3f::new(0.0, 1.0, 0.0), 0.7);

        let (axis, angle) = q.axis_angle();

        assert_float_absolute_eq!(angle, 0.7, 0.0001);
        assert_float_absolute_eq!(axis.x, 0.0, 0.0001);
        assert_float_absolute_eq!(axis.y, 1.0, 0.0001);
        assert_float_absolute_eq!(axis.z, 0.0, 0.0001);
    }

    #[test]
    fn axis_angle_of_identity() {
        let (axis, angle) = Quaternionf::identity().axis_angle();

        assert_eq!(angle, 0.0);
        assert_eq!(axis, Vector3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn rotate_axes_match_multiply() {
        let base = Quaternion::from_axis_angle(&Vector3f::new(1.0, 2.0, 3.0).normalized(), 0.5);
        let rotation_around =
            |x, y, z| Quaternion::from_axis_angle(&Vector3::new(x, y, z), FRAC_PI_4);

        let mut around_x = base;
        around_x.rotate_x(FRAC_PI_4);
        assert_quaternion_eq(&around_x, &(base * rotation_around(1.0, 0.0, 0.0)));

        let mut around_y = base;
        around_y.rotate_y(FRAC_PI_4);
        assert_quaternion_eq(&around_y, &(base * rotation_around(0.0, 1.0, 0.0)));

        let mut around_z = base;
        around_z.rotate_z(FRAC_PI_4);
        assert_quaternion_eq(&around_z, &(base * rotation_around(0.0, 0.0, 1.0)));
    }

    #[test]
    fn calculate_w() {
        let mut q = Quaternionf::new(0.6, 0.0, 0.0, 123.0);

        q.calculate_w();

        assert_float_absolute_eq!(q.w, 0.8, 0.0001);
    }

    #[test]
    fn slerp_with_itself_is_unchanged() {
        let q = Quaternion::from_axis_angle(&Vector3f::new(0.0, 0.0, 1.0), 1.2);
        let mut interpolated = q;

        interpolated.slerp(&q, 0.5);

        assert_eq!(interpolated, q);
    }

    #[test]
    fn slerp_halfway() {
        let z = Vector3f::new(0.0, 0.0, 1.0);
        let mut q = Quaternionf::identity();

        q.slerp(&Quaternion::from_axis_angle(&z, FRAC_PI_2), 0.5);

        assert_quaternion_eq(&q, &Quaternion::from_axis_angle(&z, FRAC_PI_4));
    }

    #[test]
    fn slerp_takes_shortest_path() {
        let z = Vector3f::new(0.0, 0.0, 1.0);
        let mut q = Quaternionf::identity();

        q.slerp(&-Quaternion::from_axis_angle(&z, FRAC_PI_2), 0.5);

        assert_quaternion_eq(&q, &Quaternion::from_axis_angle(&z, FRAC_PI_4));
    }

    #[test]
    fn invert() {
        let q = Quaternionf::new(1.0, 2.0, 3.0, 4.0);
        let mut inverse = q;

        inverse.invert();

        assert_quaternion_eq(&(q * inverse), &Quaternion::identity());
    }

    #[test]
    fn invert_zero_is_zero() {
        let mut q = Quaternionf::new(0.0, 0.0, 0.0, 0.0);

        q.invert();

        assert!(q.exact_equals(&Quaternion::new(0.0, 0.0, 0.0, 0.0)));
        assert!(!q.x.is_nan());
    }

    #[test]
    fn conjugate() {
        let mut q = Quaternionf::new(1.0, 2.0, 3.0, 4.0);

        q.conjugate();

        assert_eq!(q, Quaternion::new(-1.0, -2.0, -3.0, 4.0));
    }

    #[test]
    fn from_mat3_round_trips() {
        let rotations = [
            Quaternionf::identity(),
            Quaternion::from_axis_angle(&Vector3::new(1.0, 0.0, 0.0), FRAC_PI_2),
            Quaternion::from_axis_angle(&Vector3::new(0.0, 1.0, 0.0), FRAC_PI_2),
            Quaternion::from_axis_angle(&Vector3::new(0.0, 0.0, 1.0), FRAC_PI_2),
            Quaternion::from_axis_angle(&Vector3::new(0.0, 0.0, 1.0), PI),
            Quaternion::from_axis_angle(&Vector3::new(1.0, 2.0, 3.0).normalized(), 2.5),
        ];

        for q in &rotations {
            let recovered = Quaternion::from_mat3(&Matrix3::from_quat(q));

            assert_same_rotation(&recovered, q);
        }
    }

    #[test]
    fn from_matrix_conversions() {
        let q = Quaternion::from_axis_angle(&Vector3f::new(0.0, 1.0, 0.0), 2.0);

        assert_same_rotation(&Quaternion::from(Matrix3::from_quat(&q)), &q);
        assert_same_rotation(&Quaternion::from(q.rotation_matrix()), &q);
    }

    #[test]
    fn from_euler_in_degrees() {
        assert_quaternion_eq(
            &Quaternion::from_euler(90.0, 0.0, 0.0),
            &Quaternion::from_axis_angle(&Vector3::new(1.0, 0.0, 0.0), FRAC_PI_2),
        );
        assert_quaternion_eq(
            &Quaternion::from_euler(0.0, 0.0, -45.0),
            &Quaternion::from_axis_angle(&Vector3::new(0.0, 0.0, 1.0), -FRAC_PI_4),
        );
    }

    #[test]
    fn rotation_matrix() {
        let q = Quaternion::new(0.77, -0.31, 0.0, 0.56);

        let matrix = q.rotation_matrix();

        let expected = [
            [0.80, -0.47, 0.34, 0.0],
            [-0.47, -0.18, 0.86, 0.0],
            [-0.34, -0.86, -0.37, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ];
        for (col, expected) in expected.iter().enumerate() {
            for (row, expected) in expected.iter().enumerate() {
                assert_float_absolute_eq!(matrix[col][row], *expected, 0.02);
            }
        }
    }

    #[test]
    fn length() {
        let quaternion = Quaternion::new(12.0, 34.0, 56.0, 23.0);

        assert_float_absolute_eq!(quaternion.length(), 70.46, 0.01);
    }

    #[test]
    fn normalize() {
        let mut quaternion = Quaternion::new(12.0, 34.0, 56.0, 23.0);

        quaternion.normalize();

        assert_float_absolute_eq!(quaternion.w, 0.32, 0.01);
        assert_float_absolute_eq!(quaternion.x, 0.17, 0.01);
        assert_float_absolute_eq!(quaternion.y, 0.48, 0.01);
        assert_float_absolute_eq!(quaternion.z, 0.79, 0.01);
    }

    #[test]
    fn normalize_zero_is_noop() {
        let zero = Quaternionf::new(0.0, 0.0, 0.0, 0.0);

        assert_eq!(zero.normalized(), zero);
    }

    #[test]
    fn lerp() {
        let mut q = Quaternionf::new(0.0, 0.0, 0.0, 1.0);

        q.lerp(&Quaternion::new(1.0, 2.0, 3.0, 3.0), 0.5);

        assert_eq!(q, Quaternion::new(0.5, 1.0, 1.5, 2.0));
    }

    #[test]
    fn exact_equals_detects_single_ulp() {
        let a = Quaternionf::new(0.0, 0.0, 0.0, 1.0);
        let b = Quaternionf::new(0.0, 0.0, 0.0, f32::from_bits(1.0_f32.to_bits() - 1));

        assert!(a.exact_equals(&a));
        assert!(!a.exact_equals(&b));
    }

    #[test]
    fn display() {
        let q = Quaternion::new(1, 2, 3, 4);

        assert_eq!(format!("{q}"), "(4 + 1 i + 2 j + 3 k)");
    }

    #[test]
    fn rotates_vector() {
        let rotation = Quaternion::from_axis_angle(&Vector3f::new(0.0, 1.0, 0.0), PI);
        let mut v = Vector3f::new(1.0, 0.0, 0.0);

        v.transform_quat(&rotation);

        assert_float_absolute_eq!(v.x, -1.0, 0.0001);
        assert_float_absolute_eq!(v.z, 0.0, 0.0001);
    }
}
