use crate::light::PointLight;
use crate::math::{Mat4, Point3, Ray, Transform3, Vec3};

#[derive(Clone, Debug, PartialEq)]
pub struct RayQuery {
    pub ray: Ray<f64>,
    pub parameters: Vec<f64>,
}

/// A ray evaluated at `t`, in world space and in the object space of the scene transform.
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    pub t: f64,
    pub world: Point3<f64>,
    pub object: Point3<f64>,
    /// Unit direction towards each light, `None` if the point sits on the light.
    pub light_directions: Vec<Option<Vec3<f64>>>,
}

#[derive(Clone, Debug)]
pub struct Scene {
    pub view: Option<Mat4<f64>>,
    pub transform: Transform3<f64>,
    pub rays: Vec<RayQuery>,
    pub lights: Vec<PointLight<f64>>,
    pub random_directions: Vec<Vec3<f64>>,
}

impl Scene {
    /// Evaluates `query` at each of its parameters, skipping parameters outside `[0, tmax]`.
    pub fn evaluate(&self, query: &RayQuery) -> Vec<Evaluation> {
        let object_ray = self.transform / query.ray;
        query
            .parameters
            .iter()
            .filter(|&&t| {
                let in_range = t >= 0.0 && t <= query.ray.tmax;
                if !in_range {
                    warn!("skipping t = {}, outside [0, {}]", t, query.ray.tmax);
                }
                in_range
            })
            .map(|&t| {
                let world = query.ray.position(t);
                let light_directions = self
                    .lights
                    .iter()
                    .map(|light| light.direction_from(world).ok())
                    .collect();
                Evaluation {
                    t,
                    world,
                    object: object_ray.position(t),
                    light_directions,
                }
            })
            .collect()
    }

    pub fn evaluate_all(&self) -> Vec<Vec<Evaluation>> {
        self.rays.iter().map(|query| self.evaluate(query)).collect()
    }
}
