pub use crate::light::PointLight;
pub use crate::math::*;
pub use crate::scene::{Evaluation, RayQuery, Scene};

pub use std::f64::consts::{PI, TAU};
