pub mod config;

use crate::light::PointLight;
use crate::math::{random_vector_on_unit_sphere, view_transform, Point3, Ray, Transform3, Vec3};
use crate::scene::{RayQuery, Scene};

use anyhow::Context;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub use config::{get_settings, parse_settings, TOMLConfig};

pub type Vec3Data = [f64; 3];
pub type Point3Data = [f64; 3];

pub const DEFAULT_SEED: u64 = 13759327;

/// Composes the transform stack so that the first entry applies first.
pub fn parse_transform_stack(config: &TOMLConfig) -> anyhow::Result<Transform3<f64>> {
    let mut transform = Transform3::identity();
    for (index, data) in config.transforms.iter().enumerate() {
        let next = data
            .to_transform()
            .with_context(|| format!("transform #{} ({:?}) is not invertible", index, data))?;
        trace!("applying {:?}", data);
        transform = next * transform;
    }
    Ok(transform)
}

pub fn construct_scene(config: &TOMLConfig) -> anyhow::Result<Scene> {
    let view = match config.camera {
        Some(camera) => {
            let from = Point3::from(camera.look_from);
            let to = Point3::from(camera.look_at);
            let up = camera.v_up.map(Vec3::from).unwrap_or_else(Vec3::unit_y);
            info!(
                "constructing camera with look_from, look_at, v_up = {} {} {}",
                from, to, up
            );
            let view = view_transform(from, to, up)
                .context("camera look_from, look_at and v_up do not define a view")?;
            Some(view)
        }
        None => {
            info!("no camera found, continuing");
            None
        }
    };

    let transform = parse_transform_stack(config)?;
    info!("parsed {} transforms", config.transforms.len());

    let mut rays = Vec::new();
    for settings in &config.rays {
        let mut ray = Ray::new(Point3::from(settings.origin), Vec3::from(settings.direction));
        if let Some(tmax) = settings.tmax {
            ray = ray.with_tmax(tmax);
        }
        if settings.direction == [0.0; 3] {
            warn!("ray from {} has a zero direction", ray.origin);
        }
        rays.push(RayQuery {
            ray,
            parameters: settings.parameters.clone(),
        });
    }

    let lights: Vec<_> = config
        .lights
        .iter()
        .map(|light| PointLight::new(Point3::from(light.position), Vec3::from(light.intensity)))
        .collect();

    let seed = config.seed.unwrap_or(DEFAULT_SEED);
    let mut rng = StdRng::seed_from_u64(seed);
    let random_directions = (0..config.random_samples)
        .map(|_| random_vector_on_unit_sphere(&mut rng))
        .collect();
    debug!(
        "drew {} random directions with seed {}",
        config.random_samples, seed
    );

    Ok(Scene {
        view,
        transform,
        rays,
        lights,
        random_directions,
    })
}
