mod error;
mod mat;
mod normal;
mod orthonormal;
mod point;
mod random;
mod ray;
mod traits;
mod transform;
mod vec;

pub use error::MathError;
pub use mat::{Mat2, Mat2d, Mat2f, Mat3, Mat3d, Mat3f, Mat4, Mat4d, Mat4f, Mat4i};
pub use normal::{Normal3, Normal3d, Normal3f};
pub use orthonormal::{OrthonormalBasis, OrthonormalBasisd, OrthonormalBasisf};
pub use point::{Point3, Point3d, Point3f, Point3i};
pub use random::{random_vector, random_vector_on_unit_sphere};
pub use ray::{Ray, Rayd, Rayf};
pub(crate) use traits::real;
pub use traits::{dot, unit_vector_of, Real, Scalar, Vector};
pub use transform::{
    axis_angle, rotation_x, rotation_y, rotation_z, scale, translation, view_transform,
    Transform3, Transform3d, Transform3f,
};
pub use vec::{
    cross, reflect, Vec2, Vec2d, Vec2f, Vec2i, Vec3, Vec3d, Vec3f, Vec3i, Vec4, Vec4d, Vec4f,
    Vec4i,
};
