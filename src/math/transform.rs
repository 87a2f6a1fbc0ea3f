use crate::math::{MathError, Mat4, Normal3, Point3, Ray, Real, Scalar, Vec3, Vec4, Vector};

use serde::{Deserialize, Serialize};

use std::ops::{Div, Mul};

pub fn translation<T: Scalar>(x: T, y: T, z: T) -> Mat4<T> {
    let (zero, one) = (T::zero(), T::one());
    Mat4::new(
        Vec4::new(one, zero, zero, x),
        Vec4::new(zero, one, zero, y),
        Vec4::new(zero, zero, one, z),
        Vec4::new(zero, zero, zero, one),
    )
}

pub fn scale<T: Scalar>(x: T, y: T, z: T) -> Mat4<T> {
    let (zero, one) = (T::zero(), T::one());
    Mat4::new(
        Vec4::new(x, zero, zero, zero),
        Vec4::new(zero, y, zero, zero),
        Vec4::new(zero, zero, z, zero),
        Vec4::new(zero, zero, zero, one),
    )
}

pub fn rotation_x<T: Real>(radians: T) -> Mat4<T> {
    let (s, c) = radians.sin_cos();
    let (zero, one) = (T::zero(), T::one());
    Mat4::new(
        Vec4::new(one, zero, zero, zero),
        Vec4::new(zero, c, -s, zero),
        Vec4::new(zero, s, c, zero),
        Vec4::new(zero, zero, zero, one),
    )
}

pub fn rotation_y<T: Real>(radians: T) -> Mat4<T> {
    let (s, c) = radians.sin_cos();
    let (zero, one) = (T::zero(), T::one());
    Mat4::new(
        Vec4::new(c, zero, s, zero),
        Vec4::new(zero, one, zero, zero),
        Vec4::new(-s, zero, c, zero),
        Vec4::new(zero, zero, zero, one),
    )
}

pub fn rotation_z<T: Real>(radians: T) -> Mat4<T> {
    let (s, c) = radians.sin_cos();
    let (zero, one) = (T::zero(), T::one());
    Mat4::new(
        Vec4::new(c, -s, zero, zero),
        Vec4::new(s, c, zero, zero),
        Vec4::new(zero, zero, one, zero),
        Vec4::new(zero, zero, zero, one),
    )
}

/// Counterclockwise rotation by `radians` about `axis` (Rodrigues). The axis is normalized first.
pub fn axis_angle<T: Real>(axis: Vec3<T>, radians: T) -> Result<Mat4<T>, MathError> {
    let Vec3 { x, y, z } = axis.normalized()?;
    let (s, c) = radians.sin_cos();
    let t = T::one() - c;
    let (zero, one) = (T::zero(), T::one());
    Ok(Mat4::new(
        Vec4::new(t * x * x + c, t * x * y - s * z, t * x * z + s * y, zero),
        Vec4::new(t * x * y + s * z, t * y * y + c, t * y * z - s * x, zero),
        Vec4::new(t * x * z - s * y, t * y * z + s * x, t * z * z + c, zero),
        Vec4::new(zero, zero, zero, one),
    ))
}

/// World-to-eye matrix for an eye at `from` looking at `to`, with the eye looking down -z.
///
/// Fails when `from == to` or when `up` is parallel to the view direction.
pub fn view_transform<T: Real>(
    from: Point3<T>,
    to: Point3<T>,
    up: Vec3<T>,
) -> Result<Mat4<T>, MathError> {
    let forward = (to - from).normalized()?;
    let left = forward.cross(up.normalized()?).normalized()?;
    let true_up = left.cross(forward);
    let zero = T::zero();
    let orientation = Mat4::new(
        left.to_vec4(zero),
        true_up.to_vec4(zero),
        (-forward).to_vec4(zero),
        Vec4::new(zero, zero, zero, T::one()),
    );
    Ok(orientation * translation(-from.x, -from.y, -from.z))
}

/// A matrix together with its inverse, so that moving into and out of a local space never
/// inverts twice. `*` applies `forward`, `/` applies `reverse`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transform3<T> {
    pub forward: Mat4<T>,
    pub reverse: Mat4<T>,
}

pub type Transform3f = Transform3<f32>;
pub type Transform3d = Transform3<f64>;

impl<T: Scalar> Transform3<T> {
    pub fn identity() -> Self {
        Transform3 {
            forward: Mat4::identity(),
            reverse: Mat4::identity(),
        }
    }

    pub fn from_translation(shift: Vec3<T>) -> Self {
        Transform3 {
            forward: translation(shift.x, shift.y, shift.z),
            reverse: translation(-shift.x, -shift.y, -shift.z),
        }
    }

    /// Swaps forward and reverse.
    pub fn inverse(self) -> Self {
        Transform3 {
            forward: self.reverse,
            reverse: self.forward,
        }
    }
}

impl<T: Real> Transform3<T> {
    pub fn new_from_matrix(forward: Mat4<T>) -> Result<Self, MathError> {
        let reverse = forward.inverse()?;
        Ok(Transform3 { forward, reverse })
    }

    pub fn from_scale(factors: Vec3<T>) -> Result<Self, MathError> {
        let inverse = Vec3::splat(T::one()).try_div_elementwise(factors)?;
        Ok(Transform3 {
            forward: scale(factors.x, factors.y, factors.z),
            reverse: scale(inverse.x, inverse.y, inverse.z),
        })
    }

    pub fn from_axis_angle(axis: Vec3<T>, radians: T) -> Result<Self, MathError> {
        let forward = axis_angle(axis, radians)?;
        // rotations are orthogonal
        Ok(Transform3 {
            forward,
            reverse: forward.transpose(),
        })
    }

    /// Composes `translate * rotate * scale`: scale applies first, translation last.
    pub fn stack(translate: Option<Self>, rotate: Option<Self>, scale: Option<Self>) -> Self {
        [translate, rotate, scale]
            .into_iter()
            .flatten()
            .fold(Transform3::identity(), |acc, t| acc * t)
    }
}

impl<T: Scalar> Default for Transform3<T> {
    fn default() -> Self {
        Transform3::identity()
    }
}

impl<T: Scalar> Mul for Transform3<T> {
    type Output = Self;
    /// `self` applies after `rhs`.
    fn mul(self, rhs: Self) -> Self {
        Transform3 {
            forward: self.forward * rhs.forward,
            reverse: rhs.reverse * self.reverse,
        }
    }
}

impl<T: Scalar> Mul<Point3<T>> for Transform3<T> {
    type Output = Point3<T>;
    fn mul(self, rhs: Point3<T>) -> Point3<T> {
        self.forward * rhs
    }
}

impl<T: Scalar> Div<Point3<T>> for Transform3<T> {
    type Output = Point3<T>;
    fn div(self, rhs: Point3<T>) -> Point3<T> {
        self.reverse * rhs
    }
}

impl<T: Scalar> Mul<Vec3<T>> for Transform3<T> {
    type Output = Vec3<T>;
    fn mul(self, rhs: Vec3<T>) -> Vec3<T> {
        self.forward * rhs
    }
}

impl<T: Scalar> Div<Vec3<T>> for Transform3<T> {
    type Output = Vec3<T>;
    fn div(self, rhs: Vec3<T>) -> Vec3<T> {
        self.reverse * rhs
    }
}

// normals go through the inverse transpose
impl<T: Scalar> Mul<Normal3<T>> for Transform3<T> {
    type Output = Normal3<T>;
    fn mul(self, rhs: Normal3<T>) -> Normal3<T> {
        Normal3::from(self.reverse.transpose() * rhs.to_vec3())
    }
}

impl<T: Scalar> Div<Normal3<T>> for Transform3<T> {
    type Output = Normal3<T>;
    fn div(self, rhs: Normal3<T>) -> Normal3<T> {
        Normal3::from(self.forward.transpose() * rhs.to_vec3())
    }
}

impl<T: Scalar> Mul<Ray<T>> for Transform3<T> {
    type Output = Ray<T>;
    fn mul(self, rhs: Ray<T>) -> Ray<T> {
        rhs.transform(&self.forward)
    }
}

impl<T: Scalar> Div<Ray<T>> for Transform3<T> {
    type Output = Ray<T>;
    fn div(self, rhs: Ray<T>) -> Ray<T> {
        rhs.transform(&self.reverse)
    }
}
