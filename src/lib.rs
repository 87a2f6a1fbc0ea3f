#[macro_use]
extern crate tracing;

pub mod light;
pub mod math;
pub mod parsing;
pub mod prelude;
pub mod scene;

#[cfg(test)]
pub mod props;
