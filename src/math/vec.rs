use crate::math::{Point3, Scalar};

/// Generates a free vector type with componentwise arithmetic.
///
/// Also used for [`Normal3`](crate::math::Normal3), which shares the arithmetic surface
/// but must stay a distinct type.
macro_rules! generate_vector {
    ($name:ident, $dim:literal, $( $idx:literal => $field:ident ),+) => {
        #[derive(Copy, Clone, Debug, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        pub struct $name<T> {
            $( pub $field: T, )+
        }

        impl<T: $crate::math::Scalar> $name<T> {
            pub const fn new($( $field: T ),+) -> Self {
                $name { $( $field ),+ }
            }

            pub fn splat(value: T) -> Self {
                $name { $( $field: value ),+ }
            }

            pub fn zero() -> Self {
                Self::splat(T::zero())
            }

            pub fn set_all(&mut self, value: T) {
                *self = Self::splat(value);
            }

            ::paste::paste! {
                $(
                    pub fn [<with_ $field>](mut self, value: T) -> Self {
                        self.$field = value;
                        self
                    }
                )+
            }

            pub fn to_array(self) -> [T; $dim] {
                [$( self.$field ),+]
            }

            /// Adds one to every component.
            pub fn increment(&mut self) -> &mut Self {
                *self += T::one();
                self
            }

            /// Subtracts one from every component.
            pub fn decrement(&mut self) -> &mut Self {
                *self -= T::one();
                self
            }

            /// False if any component is NaN or infinite.
            pub fn is_finite(&self) -> bool {
                $( self.$field * T::zero() == T::zero() )&&+
            }

            pub fn zip_with<F: Fn(T, T) -> T>(self, other: Self, f: F) -> Self {
                $name { $( $field: f(self.$field, other.$field) ),+ }
            }

            pub fn try_div(self, rhs: T) -> Result<Self, $crate::math::MathError> {
                if rhs == T::zero() {
                    return Err($crate::math::MathError::DivisionByZero);
                }
                Ok($name { $( $field: self.$field / rhs ),+ })
            }

            pub fn try_div_elementwise(self, rhs: Self) -> Result<Self, $crate::math::MathError> {
                if $( rhs.$field == T::zero() )||+ {
                    return Err($crate::math::MathError::DivisionByZero);
                }
                Ok(self.zip_with(rhs, |a, b| a / b))
            }

            /// `self - 2 * dot(self, normal) * normal`
            pub fn reflect(self, normal: Self) -> Self {
                let two = T::one() + T::one();
                self - normal * (two * $crate::math::Vector::dot(self, normal))
            }
        }

        impl<T: $crate::math::Scalar> $crate::math::Vector for $name<T> {
            type Scalar = T;
            const DIM: usize = $dim;

            fn dot(self, other: Self) -> T {
                T::zero() $( + self.$field * other.$field )+
            }

            fn map<F: Fn(T) -> T>(self, f: F) -> Self {
                $name { $( $field: f(self.$field) ),+ }
            }

            fn fold<A, F: Fn(A, T) -> A>(self, init: A, f: F) -> A {
                let acc = init;
                $( let acc = f(acc, self.$field); )+
                acc
            }
        }

        impl<T: $crate::math::Scalar> From<[T; $dim]> for $name<T> {
            fn from(other: [T; $dim]) -> Self {
                $name { $( $field: other[$idx] ),+ }
            }
        }

        impl<T: $crate::math::Scalar> From<$name<T>> for [T; $dim] {
            fn from(v: $name<T>) -> Self {
                v.to_array()
            }
        }

        impl<T: $crate::math::Scalar> ::std::ops::Index<usize> for $name<T> {
            type Output = T;
            fn index(&self, i: usize) -> &T {
                match i {
                    $( $idx => &self.$field, )+
                    _ => panic!("index {} out of range for {}", i, stringify!($name)),
                }
            }
        }

        impl<T: $crate::math::Scalar> ::std::ops::IndexMut<usize> for $name<T> {
            fn index_mut(&mut self, i: usize) -> &mut T {
                match i {
                    $( $idx => &mut self.$field, )+
                    _ => panic!("index {} out of range for {}", i, stringify!($name)),
                }
            }
        }

        impl<T: $crate::math::Scalar> ::std::ops::Neg for $name<T> {
            type Output = Self;
            fn neg(self) -> Self {
                $name { $( $field: -self.$field ),+ }
            }
        }

        impl<T: $crate::math::Scalar> ::std::ops::Add for $name<T> {
            type Output = Self;
            fn add(self, other: Self) -> Self {
                self.zip_with(other, |a, b| a + b)
            }
        }

        impl<T: $crate::math::Scalar> ::std::ops::Add<T> for $name<T> {
            type Output = Self;
            fn add(self, other: T) -> Self {
                $name { $( $field: self.$field + other ),+ }
            }
        }

        impl<T: $crate::math::Scalar> ::std::ops::Sub for $name<T> {
            type Output = Self;
            fn sub(self, other: Self) -> Self {
                self.zip_with(other, |a, b| a - b)
            }
        }

        impl<T: $crate::math::Scalar> ::std::ops::Sub<T> for $name<T> {
            type Output = Self;
            fn sub(self, other: T) -> Self {
                $name { $( $field: self.$field - other ),+ }
            }
        }

        // componentwise, use `dot` for the inner product
        impl<T: $crate::math::Scalar> ::std::ops::Mul for $name<T> {
            type Output = Self;
            fn mul(self, other: Self) -> Self {
                self.zip_with(other, |a, b| a * b)
            }
        }

        impl<T: $crate::math::Scalar> ::std::ops::Mul<T> for $name<T> {
            type Output = Self;
            fn mul(self, other: T) -> Self {
                $name { $( $field: self.$field * other ),+ }
            }
        }

        impl<T: $crate::math::Scalar> ::std::ops::Div for $name<T> {
            type Output = Self;
            fn div(self, other: Self) -> Self {
                self.try_div_elementwise(other)
                    .unwrap_or_else(|e| panic!("{}: {} / {:?}", e, stringify!($name), other))
            }
        }

        impl<T: $crate::math::Scalar> ::std::ops::Div<T> for $name<T> {
            type Output = Self;
            fn div(self, other: T) -> Self {
                self.try_div(other)
                    .unwrap_or_else(|e| panic!("{}: {} / {}", e, stringify!($name), other))
            }
        }

        impl<T: $crate::math::Scalar> ::std::ops::AddAssign for $name<T> {
            fn add_assign(&mut self, other: Self) {
                *self = *self + other;
            }
        }

        impl<T: $crate::math::Scalar> ::std::ops::AddAssign<T> for $name<T> {
            fn add_assign(&mut self, other: T) {
                *self = *self + other;
            }
        }

        impl<T: $crate::math::Scalar> ::std::ops::SubAssign for $name<T> {
            fn sub_assign(&mut self, other: Self) {
                *self = *self - other;
            }
        }

        impl<T: $crate::math::Scalar> ::std::ops::SubAssign<T> for $name<T> {
            fn sub_assign(&mut self, other: T) {
                *self = *self - other;
            }
        }

        impl<T: $crate::math::Scalar> ::std::ops::MulAssign for $name<T> {
            fn mul_assign(&mut self, other: Self) {
                *self = *self * other;
            }
        }

        impl<T: $crate::math::Scalar> ::std::ops::MulAssign<T> for $name<T> {
            fn mul_assign(&mut self, other: T) {
                *self = *self * other;
            }
        }

        impl<T: $crate::math::Scalar> ::std::ops::DivAssign for $name<T> {
            fn div_assign(&mut self, other: Self) {
                *self = *self / other;
            }
        }

        impl<T: $crate::math::Scalar> ::std::ops::DivAssign<T> for $name<T> {
            fn div_assign(&mut self, other: T) {
                *self = *self / other;
            }
        }

        impl<T: ::std::fmt::Display> ::std::fmt::Display for $name<T> {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                let parts = [$( self.$field.to_string() ),+];
                write!(f, "({})", parts.join(","))
            }
        }

        generate_vector!(@scalar_lhs $name, i32, i64, f32, f64);
    };

    // scalar on the left hand side, only for the concrete element types
    (@scalar_lhs $name:ident, $( $t:ty ),+) => {
        $(
            impl ::std::ops::Add<$name<$t>> for $t {
                type Output = $name<$t>;
                fn add(self, other: $name<$t>) -> $name<$t> {
                    other + self
                }
            }

            impl ::std::ops::Mul<$name<$t>> for $t {
                type Output = $name<$t>;
                fn mul(self, other: $name<$t>) -> $name<$t> {
                    other * self
                }
            }
        )+
    };
}

pub(crate) use generate_vector;

generate_vector!(Vec2, 2, 0 => x, 1 => y);
generate_vector!(Vec3, 3, 0 => x, 1 => y, 2 => z);
generate_vector!(Vec4, 4, 0 => x, 1 => y, 2 => z, 3 => w);

pub type Vec2f = Vec2<f32>;
pub type Vec2d = Vec2<f64>;
pub type Vec2i = Vec2<i32>;
pub type Vec3f = Vec3<f32>;
pub type Vec3d = Vec3<f64>;
pub type Vec3i = Vec3<i32>;
pub type Vec4f = Vec4<f32>;
pub type Vec4d = Vec4<f64>;
pub type Vec4i = Vec4<i32>;

impl<T: Scalar> Vec3<T> {
    pub fn unit_x() -> Self {
        Vec3::new(T::one(), T::zero(), T::zero())
    }
    pub fn unit_y() -> Self {
        Vec3::new(T::zero(), T::one(), T::zero())
    }
    pub fn unit_z() -> Self {
        Vec3::new(T::zero(), T::zero(), T::one())
    }

    pub fn cross(&self, other: Vec3<T>) -> Self {
        Vec3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Drops the w component.
    pub fn from_vec4(v: Vec4<T>) -> Self {
        Vec3::new(v.x, v.y, v.z)
    }

    /// Homogeneous form, `w = 0` for directions.
    pub fn to_vec4(self, w: T) -> Vec4<T> {
        Vec4::new(self.x, self.y, self.z, w)
    }
}

impl<T: Scalar> Vec4<T> {
    pub fn xyz(self) -> Vec3<T> {
        Vec3::from_vec4(self)
    }
}

impl<T: Scalar> From<Point3<T>> for Vec3<T> {
    fn from(p: Point3<T>) -> Self {
        Vec3::new(p.x, p.y, p.z)
    }
}

pub fn cross<T: Scalar>(a: Vec3<T>, b: Vec3<T>) -> Vec3<T> {
    a.cross(b)
}

/// Mirrors `incident` about `normal`. `normal` is expected to be unit length.
pub fn reflect<T: Scalar>(incident: Vec3<T>, normal: Vec3<T>) -> Vec3<T> {
    incident.reflect(normal)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::{dot, unit_vector_of, MathError, Vector};

    fn assert_close(a: Vec3<f64>, b: Vec3<f64>, eps: f64) {
        assert!((a - b).length() < eps, "{} != {}", a, b);
    }

    #[test]
    fn test_construction_and_indexing() {
        let mut v = Vec3::new(1.0, -2.0, 3.5);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[1], -2.0);
        assert_eq!(v[2], 3.5);
        v[1] = 4.0;
        assert_eq!(v.y, 4.0);

        let s = Vec4::splat(2);
        assert_eq!(s, Vec4::new(2, 2, 2, 2));
        assert_eq!(Vec2::<f32>::zero(), Vec2::new(0.0, 0.0));
        assert_eq!(Vec2::new(1, 2).with_y(5), Vec2::new(1, 5));
        assert_eq!(Vec3::from([1, 2, 3]).to_array(), [1, 2, 3]);
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_range() {
        let v = Vec2::new(1.0, 2.0);
        let _ = v[2];
    }

    #[test]
    #[should_panic]
    fn test_index_mut_out_of_range() {
        let mut v = Vec4::new(1, 2, 3, 4);
        v[4] = 0;
    }

    #[test]
    fn test_increment_decrement() {
        let mut v = Vec3::new(1, 2, 3);
        v.increment();
        assert_eq!(v, Vec3::new(2, 3, 4));
        v.decrement().decrement();
        assert_eq!(v, Vec3::new(0, 1, 2));
    }

    #[test]
    fn test_arithmetic() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, -5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, -3.0, 9.0));
        assert_eq!(a - b, Vec3::new(-3.0, 7.0, -3.0));
        assert_eq!(a * b, Vec3::new(4.0, -10.0, 18.0));
        assert_eq!(a + 1.0, Vec3::new(2.0, 3.0, 4.0));
        assert_eq!(a - 1.0, Vec3::new(0.0, 1.0, 2.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(1.0 + a, a + 1.0);
        assert_eq!(b / Vec3::new(2.0, -5.0, 3.0), Vec3::new(2.0, 1.0, 2.0));
        assert_eq!(-a, Vec3::new(-1.0, -2.0, -3.0));

        let mut c = a;
        c += b;
        c -= 1.0;
        c *= 2.0;
        c /= 4.0;
        assert_eq!(c, Vec3::new(2.0, -2.0, 4.0));
    }

    #[test]
    fn test_dot_and_cross() {
        let a = Vec3::new(1.5, 2.0, -3.0);
        let b = Vec3::new(0.5, -1.0, 4.0);
        assert_eq!(dot(a, b), 0.75 - 2.0 - 12.0);
        assert_eq!(cross(Vec3::unit_x(), Vec3::unit_y()), Vec3::<f64>::unit_z());
        assert_eq!(cross(a, b), -cross(b, a));
        assert_eq!(dot(Vec2::new(3, 4), Vec2::new(3, 4)), 25);
        assert_eq!(Vec2::new(3, 4).length(), 5.0);
    }

    #[test]
    fn test_normalize() {
        let v = Vec3::new(3.0, 0.0, 4.0);
        let unit = unit_vector_of(v).unwrap();
        assert!((unit.length() - 1.0).abs() < 1e-12);
        assert_close(unit, Vec3::new(0.6, 0.0, 0.8), 1e-12);
        // the input is untouched
        assert_eq!(v, Vec3::new(3.0, 0.0, 4.0));

        let mut w = Vec4::new(1.0f32, 1.0, 1.0, 1.0);
        w.normalize().unwrap();
        assert_eq!(w, Vec4::splat(0.5));
    }

    #[test]
    fn test_normalize_extreme_magnitudes() {
        // squaring 1e20 overflows f32, squaring 1e-23 flushes it to zero
        assert_eq!(Vec3::new(1e20f32, 0.0, 0.0).normalized(), Ok(Vec3::unit_x()));
        assert_eq!(Vec3::new(1e-23f32, 0.0, 0.0).normalized(), Ok(Vec3::unit_x()));
        assert_eq!(Vec3::new(0.0f32, -1e-30, 0.0).normalized(), Ok(-Vec3::unit_y()));

        let unit = Vec3::new(3e20f32, 4e20, 0.0).normalized().unwrap();
        assert!((unit.x - 0.6).abs() < 1e-6);
        assert!((unit.y - 0.8).abs() < 1e-6);
        assert_eq!(unit.z, 0.0);

        assert_eq!(
            Vec3::new(0.0f32, 0.0, 0.0).normalized(),
            Err(MathError::DivisionByZero)
        );
    }

    #[test]
    fn test_length_extreme_magnitudes() {
        assert_eq!(Vec3::new(50_000i32, 0, 0).length(), 50000.0);
        assert_eq!(Vec3::new(30_000i32, 40_000, 0).length(), 50000.0);
        assert_eq!(Vec3::new(1e20f32, 0.0, 0.0).length(), 1e20f32 as f64);

        let big = Vec3::new(3e200, 4e200, 0.0f64).length();
        assert!((big / 5e200 - 1.0).abs() < 1e-12);
        let tiny = Vec3::new(3e-200, 4e-200, 0.0f64).length();
        assert!((tiny / 5e-200 - 1.0).abs() < 1e-12);

        assert_eq!(Vec3::new(0i32, 0, 0).length(), 0.0);
        assert!(Vec3::new(f64::NAN, 1.0, 0.0).length().is_nan());
        assert_eq!(Vec3::new(f64::INFINITY, 1.0, 0.0).length(), f64::INFINITY);
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(
            Vec3::<f64>::zero().normalized(),
            Err(MathError::DivisionByZero)
        );
        assert_eq!(
            Vec2::new(1.0, 2.0).try_div(0.0),
            Err(MathError::DivisionByZero)
        );
        assert_eq!(
            Vec2::new(1.0, 2.0).try_div_elementwise(Vec2::new(1.0, 0.0)),
            Err(MathError::DivisionByZero)
        );
        assert_eq!(Vec2::new(1.0, 2.0).try_div(2.0), Ok(Vec2::new(0.5, 1.0)));
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn test_division_operator_panics() {
        let _ = Vec3::new(1, 2, 3) / 0;
    }

    #[test]
    fn test_reflect() {
        let r = reflect(Vec3::new(1.0, -1.0, 0.0), Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(r, Vec3::new(1.0, 1.0, 0.0));

        let h = 2.0f64.sqrt() / 2.0;
        let r = reflect(Vec3::new(0.0, -1.0, 0.0), Vec3::new(h, h, 0.0));
        assert_close(r, Vec3::new(1.0, 0.0, 0.0), 1e-12);
    }

    #[test]
    fn test_is_finite() {
        assert!(Vec3::new(1.0, 2.0, 3.0).is_finite());
        assert!(!Vec3::new(1.0, f64::NAN, 3.0).is_finite());
        assert!(!Vec2::new(f32::INFINITY, 0.0).is_finite());
        assert!(Vec4::new(1, 2, 3, 4).is_finite());
    }

    #[test]
    fn test_homogeneous_conversions() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.to_vec4(0.0), Vec4::new(1.0, 2.0, 3.0, 0.0));
        assert_eq!(Vec3::from_vec4(Vec4::new(1.0, 2.0, 3.0, 9.0)), v);
        assert_eq!(Vec4::new(1.0, 2.0, 3.0, 9.0).xyz(), v);
    }

    #[test]
    fn test_display() {
        assert_eq!(Vec2::new(1, 2).to_string(), "(1,2)");
        assert_eq!(Vec3::new(1.5, -2.0, 0.0).to_string(), "(1.5,-2,0)");
        assert_eq!(Vec4::new(1, 2, 3, 4).to_string(), "(1,2,3,4)");
    }

    mod props {
        use super::*;
        use crate::props::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn unit_vector_has_unit_length(v in nonzero_vec3()) {
                let unit = unit_vector_of(v).unwrap();
                prop_assert!((unit.length() - 1.0).abs() < 1e-12);
            }

            #[test]
            fn negation_cancels(v in vec3()) {
                prop_assert_eq!(v + (-v), Vec3::zero());
                prop_assert_eq!(-(-v), v);
            }

            #[test]
            fn dot_commutes(a in vec3(), b in vec3()) {
                prop_assert_eq!(dot(a, b), dot(b, a));
            }

            #[test]
            fn cross_anticommutes(a in vec3(), b in vec3()) {
                prop_assert_eq!(cross(a, b), -cross(b, a));
            }

            #[test]
            fn cross_is_orthogonal(a in int_vec3(), b in int_vec3()) {
                let c = cross(a, b);
                prop_assert_eq!(dot(c, a), 0);
                prop_assert_eq!(dot(c, b), 0);
            }
        }
    }
}
