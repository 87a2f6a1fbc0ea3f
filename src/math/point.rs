use crate::math::{Scalar, Vec3, Vec4};

use serde::{Deserialize, Serialize};

use std::fmt;
use std::ops::{Add, AddAssign, Index, IndexMut, Sub, SubAssign};

/// A position in affine space. Has no length, and only combines with [`Vec3`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

pub type Point3f = Point3<f32>;
pub type Point3d = Point3<f64>;
pub type Point3i = Point3<i32>;

impl<T: Scalar> Point3<T> {
    pub const fn new(x: T, y: T, z: T) -> Point3<T> {
        Point3 { x, y, z }
    }
    pub fn origin() -> Self {
        Point3::new(T::zero(), T::zero(), T::zero())
    }
    pub fn set_all(&mut self, value: T) {
        *self = Point3::new(value, value, value);
    }
    pub fn is_finite(&self) -> bool {
        let zero = T::zero();
        self.x * zero == zero && self.y * zero == zero && self.z * zero == zero
    }

    pub fn to_homogeneous(self) -> Vec4<T> {
        Vec4::new(self.x, self.y, self.z, T::one())
    }

    /// Projects a homogeneous coordinate back to 3D, dividing by w unless w is 0 or 1.
    pub fn from_homogeneous(v: Vec4<T>) -> Self {
        if v.w == T::zero() || v.w == T::one() {
            Point3::new(v.x, v.y, v.z)
        } else {
            Point3::new(v.x / v.w, v.y / v.w, v.z / v.w)
        }
    }
}

impl<T: Scalar> Index<usize> for Point3<T> {
    type Output = T;
    fn index(&self, i: usize) -> &T {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("index {} out of range for Point3", i),
        }
    }
}

impl<T: Scalar> IndexMut<usize> for Point3<T> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("index {} out of range for Point3", i),
        }
    }
}

impl<T: Scalar> Add<Vec3<T>> for Point3<T> {
    type Output = Point3<T>;
    fn add(self, other: Vec3<T>) -> Point3<T> {
        Point3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl<T: Scalar> AddAssign<Vec3<T>> for Point3<T> {
    fn add_assign(&mut self, other: Vec3<T>) {
        *self = *self + other;
    }
}

impl<T: Scalar> Sub<Vec3<T>> for Point3<T> {
    type Output = Point3<T>;
    fn sub(self, other: Vec3<T>) -> Point3<T> {
        Point3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl<T: Scalar> SubAssign<Vec3<T>> for Point3<T> {
    fn sub_assign(&mut self, other: Vec3<T>) {
        *self = *self - other;
    }
}

// no scalar arithmetic on points

impl<T: Scalar> Sub for Point3<T> {
    type Output = Vec3<T>;
    fn sub(self, other: Point3<T>) -> Vec3<T> {
        Vec3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl<T: Scalar> From<[T; 3]> for Point3<T> {
    fn from(other: [T; 3]) -> Point3<T> {
        Point3::new(other[0], other[1], other[2])
    }
}

impl<T: Scalar> From<Vec3<T>> for Point3<T> {
    fn from(v: Vec3<T>) -> Point3<T> {
        Point3::origin() + v
    }
}

impl<T: fmt::Display> fmt::Display for Point3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::Vector;

    #[test]
    fn test_point_minus_point() {
        let v = Point3::new(0.0, 2.0, 4.0) - Point3::new(1.0, 0.0, 4.0);
        assert_eq!(v, Vec3::new(-1.0, 2.0, 0.0));
        assert!((v.length() - 5.0f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_point_and_vector() {
        let mut p = Point3::new(3, 4, 5);
        assert_eq!(p - Vec3::new(3, 4, 5), Point3::origin());

        p = Point3::new(0, -1, -8);
        assert_eq!(p + Vec3::new(-4, 5, 9), Point3::new(-4, 4, 1));

        p += Vec3::new(1, 1, 1);
        p -= Vec3::new(0, 0, 2);
        assert_eq!(p, Point3::new(1, 0, -9));
    }

    #[test]
    fn test_indexing() {
        let mut p = Point3::new(1, -8, 0);
        assert_eq!(p[1], -8);
        p[2] = 9;
        assert_eq!(p, Point3::new(1, -8, 9));
        assert_eq!(Point3::<i32>::default(), Point3::origin());
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_range() {
        let p = Point3::new(0.0, 0.0, 0.0);
        let _ = p[3];
    }

    #[test]
    fn test_homogeneous() {
        let p = Point3::new(1.0, 2.0, 3.0);
        assert_eq!(p.to_homogeneous(), Vec4::new(1.0, 2.0, 3.0, 1.0));
        assert_eq!(Point3::from_homogeneous(Vec4::new(2.0, 4.0, 6.0, 2.0)), p);
        assert_eq!(Point3::from_homogeneous(p.to_homogeneous()), p);
    }

    #[test]
    fn test_conversions() {
        let p = Point3::from([1, 2, 3]);
        assert_eq!(Vec3::from(p), Vec3::new(1, 2, 3));
        assert_eq!(Point3::from(Vec3::new(1, 2, 3)), p);
        assert_eq!(p.to_string(), "(1,2,3)");
    }
}
