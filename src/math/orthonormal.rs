use crate::math::{real, MathError, Real, Vec3, Vector};

use serde::{Deserialize, Serialize};

/// Orthonormal frame `(u, v, w)` around a given `w` axis, with `u = w × v`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrthonormalBasis<T> {
    u: Vec3<T>,
    v: Vec3<T>,
    w: Vec3<T>,
}

pub type OrthonormalBasisf = OrthonormalBasis<f32>;
pub type OrthonormalBasisd = OrthonormalBasis<f64>;

impl<T: Real> OrthonormalBasis<T> {
    /// Fails with `DivisionByZero` when `w` is the zero vector.
    pub fn build_from_w(w: Vec3<T>) -> Result<Self, MathError> {
        let w = w.normalized()?;
        // world up unless w is nearly vertical
        let helper = if w.y.abs() > real(0.9) {
            Vec3::unit_x()
        } else {
            Vec3::unit_y()
        };
        let v = w.cross(helper).normalized()?;
        let u = w.cross(v);
        trace!("built basis u = {}, v = {}, w = {}", u, v, w);
        Ok(OrthonormalBasis { u, v, w })
    }

    pub fn u(&self) -> Vec3<T> {
        self.u
    }

    pub fn v(&self) -> Vec3<T> {
        self.v
    }

    pub fn w(&self) -> Vec3<T> {
        self.w
    }

    /// `a * u + b * v + c * w`.
    pub fn local(&self, a: T, b: T, c: T) -> Vec3<T> {
        self.u * a + self.v * b + self.w * c
    }

    pub fn local_vec(&self, coords: Vec3<T>) -> Vec3<T> {
        self.local(coords.x, coords.y, coords.z)
    }

    /// Coordinates of a world-space vector in this basis. Inverse of [`Self::local_vec`].
    pub fn to_local(&self, world: Vec3<T>) -> Vec3<T> {
        Vec3::new(world.dot(self.u), world.dot(self.v), world.dot(self.w))
    }
}
