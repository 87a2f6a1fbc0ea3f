use crate::math::MathError;

use num_traits::{Float, Num, NumCast, ToPrimitive, Zero};

use std::fmt::{Debug, Display};
use std::ops::{AddAssign, DivAssign, MulAssign, Neg, SubAssign};

/// Element type of every vector, point and matrix in this crate.
///
/// Covers the signed integers and the floats. Anything that needs a square root
/// or a real division (normalization, inverses, rotations) additionally asks for [`Real`].
pub trait Scalar:
    Copy
    + Debug
    + Display
    + Default
    + PartialEq
    + PartialOrd
    + Num
    + NumCast
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
{
    fn to_f64_lossy(self) -> f64 {
        ToPrimitive::to_f64(&self).unwrap_or(f64::NAN)
    }
}

impl<T> Scalar for T where
    T: Copy
        + Debug
        + Display
        + Default
        + PartialEq
        + PartialOrd
        + Num
        + NumCast
        + Neg<Output = T>
        + AddAssign
        + SubAssign
        + MulAssign
        + DivAssign
{
}

pub trait Real: Scalar + Float {}

impl<T> Real for T where T: Scalar + Float {}

/// Converts an `f64` constant into `T`. Only used with values every float can represent.
pub(crate) fn real<T: Real>(value: f64) -> T {
    <T as NumCast>::from(value).unwrap_or_else(T::nan)
}

/// Shared surface of the free vector types (Vec2, Vec3, Vec4, Normal3).
pub trait Vector: Copy {
    type Scalar: Scalar;
    const DIM: usize;

    fn dot(self, other: Self) -> Self::Scalar;
    fn map<F: Fn(Self::Scalar) -> Self::Scalar>(self, f: F) -> Self;
    fn fold<A, F: Fn(A, Self::Scalar) -> A>(self, init: A, f: F) -> A;

    fn length_squared(self) -> Self::Scalar {
        self.dot(self)
    }

    /// Euclidean length, accumulated in `f64` and scaled by the largest
    /// component so integer and extreme float inputs neither overflow nor flush to zero.
    fn length(self) -> f64 {
        let scale = self.fold(0.0f64, |m, c| m.max(c.to_f64_lossy().abs()));
        if !(scale > 0.0) || scale.is_infinite() {
            return self
                .fold(0.0f64, |acc, c| {
                    let c = c.to_f64_lossy();
                    acc + c * c
                })
                .sqrt();
        }
        let sum = self.fold(0.0f64, |acc, c| {
            let c = c.to_f64_lossy() / scale;
            acc + c * c
        });
        scale * sum.sqrt()
    }

    fn normalized(self) -> Result<Self, MathError>
    where
        Self::Scalar: Real,
    {
        let zero = <Self::Scalar as Zero>::zero();
        let scale = self.fold(zero, |m, c| if c.abs() > m { c.abs() } else { m });
        if scale == zero {
            return Err(MathError::DivisionByZero);
        }
        // largest component becomes +-1, so squaring cannot leave the float range
        let scaled = self.map(|c| c / scale);
        let length = scaled.length_squared().sqrt();
        Ok(scaled.map(|c| c / length))
    }

    fn normalize(&mut self) -> Result<(), MathError>
    where
        Self::Scalar: Real,
    {
        *self = self.normalized()?;
        Ok(())
    }
}

pub fn dot<V: Vector>(a: V, b: V) -> V::Scalar {
    a.dot(b)
}

/// Returns a unit-length copy of `v`, leaving `v` untouched.
pub fn unit_vector_of<V: Vector>(v: V) -> Result<V, MathError>
where
    V::Scalar: Real,
{
    v.normalized()
}
