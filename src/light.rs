use crate::math::{MathError, Point3, Real, Scalar, Vec3, Vector};

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PointLight<T> {
    pub position: Point3<T>,
    /// Per-channel intensity, e.g. rgb.
    pub intensity: Vec3<T>,
}

impl<T: Scalar> PointLight<T> {
    pub fn new(position: Point3<T>, intensity: Vec3<T>) -> Self {
        PointLight {
            position,
            intensity,
        }
    }

    pub fn set_position(&mut self, position: Point3<T>) {
        self.position = position;
    }

    pub fn set_intensity(&mut self, intensity: Vec3<T>) {
        self.intensity = intensity;
    }
}

impl<T: Real> PointLight<T> {
    /// Unit vector pointing from `point` towards the light. Fails if `point` is the light position.
    pub fn direction_from(&self, point: Point3<T>) -> Result<Vec3<T>, MathError> {
        (self.position - point).normalized()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_accessors() {
        let mut light = PointLight::new(Point3::new(0.0, 0.0, 0.0), Vec3::splat(1.0));
        assert_eq!(light.intensity, Vec3::new(1.0, 1.0, 1.0));
        light.set_position(Point3::new(-10.0, 10.0, -10.0));
        light.set_intensity(Vec3::new(0.5, 0.25, 1.0));
        assert_eq!(light.position, Point3::new(-10.0, 10.0, -10.0));
        assert_eq!(light.intensity, Vec3::new(0.5, 0.25, 1.0));
        assert_eq!(PointLight::<i32>::default().position, Point3::origin());
    }

    #[test]
    fn test_direction_from() {
        let light = PointLight::new(Point3::new(0.0, 4.0, 0.0), Vec3::splat(1.0));
        assert_eq!(light.direction_from(Point3::origin()), Ok(Vec3::unit_y()));
        assert_eq!(
            light.direction_from(Point3::new(0.0, 4.0, 0.0)),
            Err(MathError::DivisionByZero)
        );
    }
}
