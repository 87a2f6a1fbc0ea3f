use crate::math::vec::generate_vector;
use crate::math::{Point3, Scalar, Vec3, Vec4};

generate_vector!(Normal3, 3, 0 => x, 1 => y, 2 => z);

pub type Normal3f = Normal3<f32>;
pub type Normal3d = Normal3<f64>;

// never converts implicitly to or from Vec3
impl<T: Scalar> Normal3<T> {
    /// Dot product against a free vector, e.g. `dot_vec(incoming)` for a cosine term.
    pub fn dot_vec(self, v: Vec3<T>) -> T {
        self.x * v.x + self.y * v.y + self.z * v.z
    }

    pub fn from_vec4(v: Vec4<T>) -> Self {
        Normal3::new(v.x, v.y, v.z)
    }

    pub fn to_vec3(self) -> Vec3<T> {
        Vec3::new(self.x, self.y, self.z)
    }

    pub fn to_vec4(self, w: T) -> Vec4<T> {
        Vec4::new(self.x, self.y, self.z, w)
    }
}

impl<T: Scalar> From<Vec3<T>> for Normal3<T> {
    fn from(v: Vec3<T>) -> Self {
        Normal3::new(v.x, v.y, v.z)
    }
}

impl<T: Scalar> From<Point3<T>> for Normal3<T> {
    fn from(p: Point3<T>) -> Self {
        Normal3::new(p.x, p.y, p.z)
    }
}

impl<T: Scalar> From<Normal3<T>> for Point3<T> {
    fn from(n: Normal3<T>) -> Self {
        Point3::new(n.x, n.y, n.z)
    }
}

impl<T: Scalar> From<Normal3<T>> for Vec3<T> {
    fn from(n: Normal3<T>) -> Self {
        n.to_vec3()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::{dot, unit_vector_of, MathError, Vector};

    #[test]
    fn test_arithmetic() {
        let a = Normal3::new(1.0, 2.0, 3.0);
        let b = Normal3::new(0.5, 0.5, 0.5);
        assert_eq!(a + b, Normal3::new(1.5, 2.5, 3.5));
        assert_eq!(a - b, Normal3::new(0.5, 1.5, 2.5));
        assert_eq!(a * 2.0, Normal3::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(a / 2.0, Normal3::new(0.5, 1.0, 1.5));
        assert_eq!(-(-a), a);
        assert_eq!(dot(a, b), 3.0);
        assert_eq!(a.dot_vec(Vec3::new(1.0, 0.0, -1.0)), -2.0);
    }

    #[test]
    fn test_normalize() {
        let n = unit_vector_of(Normal3::new(0.0, 0.0, 2.0f32)).unwrap();
        assert_eq!(n, Normal3::new(0.0, 0.0, 1.0));
        assert_eq!(
            Normal3::<f32>::zero().normalized(),
            Err(MathError::DivisionByZero)
        );
        assert!((Normal3::new(1.0, 1.0, 1.0).normalized().unwrap().length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_explicit_conversions() {
        let v = Vec3::new(1, 2, 3);
        let n = Normal3::from(v);
        assert_eq!(Vec3::from(n), v);
        assert_eq!(Normal3::from(Point3::new(1, 2, 3)), n);
        assert_eq!(Point3::from(n), Point3::new(1, 2, 3));
        assert_eq!(Normal3::from_vec4(Vec4::new(1, 2, 3, 0)), n);
        assert_eq!(n.to_vec4(0), Vec4::new(1, 2, 3, 0));
        assert_eq!(n.to_string(), "(1,2,3)");
    }
}
