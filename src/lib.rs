pub use glmath_algebra as algebra;
pub use glmath_debug as debug;

pub use glmath_algebra::matrix::{
    Identity, Matrix2, Matrix2d, Matrix2df, Matrix2f, Matrix3, Matrix3f, Matrix4, Matrix4f,
};
pub use glmath_algebra::quaternion::{Quaternion, Quaternionf};
pub use glmath_algebra::vector::{Vector2, Vector2f, Vector3, Vector3f, Vector4, Vector4f};
