use crate::math::{
    rotation_x, rotation_y, rotation_z, MathError, Mat4, Real, Transform3,
};

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use super::{Point3Data, Vec3Data};

#[derive(Deserialize, Copy, Clone, Debug)]
pub struct CameraSettings {
    pub look_from: Point3Data,
    pub look_at: Point3Data,
    pub v_up: Option<Vec3Data>, // defaults to +y
}

/// One entry of the transform stack. Angles are in degrees.
#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
#[serde(tag = "type")]
pub enum TransformData {
    Translate { offset: Vec3Data },
    Scale { factors: Vec3Data },
    RotateX { degrees: f64 },
    RotateY { degrees: f64 },
    RotateZ { degrees: f64 },
    AxisAngle { axis: Vec3Data, degrees: f64 },
    Matrix { rows: [[f64; 4]; 4] },
}

fn rotation<T: Real>(forward: Mat4<T>, reverse: Mat4<T>) -> Transform3<T> {
    Transform3 { forward, reverse }
}

impl TransformData {
    pub fn to_transform(self) -> Result<Transform3<f64>, MathError> {
        match self {
            TransformData::Translate { offset } => Ok(Transform3::from_translation(offset.into())),
            TransformData::Scale { factors } => Transform3::from_scale(factors.into()),
            TransformData::RotateX { degrees } => {
                let r = degrees.to_radians();
                Ok(rotation(rotation_x(r), rotation_x(-r)))
            }
            TransformData::RotateY { degrees } => {
                let r = degrees.to_radians();
                Ok(rotation(rotation_y(r), rotation_y(-r)))
            }
            TransformData::RotateZ { degrees } => {
                let r = degrees.to_radians();
                Ok(rotation(rotation_z(r), rotation_z(-r)))
            }
            TransformData::AxisAngle { axis, degrees } => {
                Transform3::from_axis_angle(axis.into(), degrees.to_radians())
            }
            TransformData::Matrix { rows } => Transform3::new_from_matrix(Mat4::from(rows)),
        }
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct RaySettings {
    pub origin: Point3Data,
    pub direction: Vec3Data,
    pub tmax: Option<f64>,
    /// Values of t at which to evaluate the ray.
    #[serde(default)]
    pub parameters: Vec<f64>,
}

#[derive(Deserialize, Copy, Clone, Debug)]
pub struct LightSettings {
    pub position: Point3Data,
    pub intensity: Vec3Data,
}

#[derive(Deserialize, Clone, Debug)]
pub struct TOMLConfig {
    pub camera: Option<CameraSettings>,
    /// Applied in order, so the first entry acts on the object first.
    #[serde(default)]
    pub transforms: Vec<TransformData>,
    #[serde(default)]
    pub rays: Vec<RaySettings>,
    #[serde(default)]
    pub lights: Vec<LightSettings>,
    pub seed: Option<u64>,
    #[serde(default)]
    pub random_samples: usize,
}

pub fn parse_settings(input: &str) -> anyhow::Result<TOMLConfig> {
    let settings: TOMLConfig = toml::from_str(input).context("failed to parse config")?;
    Ok(settings)
}

pub fn get_settings(filepath: impl AsRef<Path>) -> anyhow::Result<TOMLConfig> {
    let filepath = filepath.as_ref();
    info!("loading config at {}", filepath.display());
    let input = fs::read_to_string(filepath)
        .with_context(|| format!("couldn't read {}", filepath.display()))?;
    debug!("done: {} bytes", input.len());
    parse_settings(&input).with_context(|| format!("in {}", filepath.display()))
}
