use crate::math::{Mat4, Point3, Real, Scalar, Vec3};

use serde::{Deserialize, Serialize};

use std::ops::Mul;

/// A half-line `origin + t * direction` for `t` in `[0, tmax]`. The direction is not normalized.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ray<T> {
    pub origin: Point3<T>,
    pub direction: Vec3<T>,
    pub tmax: T,
}

pub type Rayf = Ray<f32>;
pub type Rayd = Ray<f64>;

impl<T: Real> Ray<T> {
    pub fn new(origin: Point3<T>, direction: Vec3<T>) -> Self {
        Ray {
            origin,
            direction,
            tmax: T::infinity(),
        }
    }
}

impl<T: Scalar> Ray<T> {
    pub fn with_tmax(mut self, tmax: T) -> Self {
        self.tmax = tmax;
        self
    }

    pub fn position(&self, t: T) -> Point3<T> {
        self.origin + self.direction * t
    }

    /// Point at `tmax`. Not finite for an unbounded ray.
    pub fn max_range(&self) -> Point3<T> {
        self.position(self.tmax)
    }

    /// Origin is moved as a point (w = 1), direction as a vector (w = 0). `tmax` is kept.
    pub fn transform(&self, m: &Mat4<T>) -> Self {
        Ray {
            origin: *m * self.origin,
            direction: *m * self.direction,
            tmax: self.tmax,
        }
    }
}

impl<T: Scalar> Mul<Ray<T>> for Mat4<T> {
    type Output = Ray<T>;
    fn mul(self, rhs: Ray<T>) -> Ray<T> {
        rhs.transform(&self)
    }
}
