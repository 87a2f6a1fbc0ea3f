extern crate rt_math as root;

use root::parsing::{construct_scene, get_settings};
use root::prelude::*;

#[macro_use]
extern crate tracing;

use anyhow::Context;
use structopt::StructOpt;
use tracing::Level;

#[derive(Debug, StructOpt)]
#[structopt(rename_all = "kebab-case")]
struct Opt {
    #[structopt(long, default_value = "data/config.toml")]
    pub config_file: String,
    #[structopt(short = "n", long)]
    pub dry_run: bool,
    #[structopt(long, default_value = "info")]
    pub log_level: String,
}

fn parse_log_level(level: &str, default: Level) -> Level {
    match level.to_lowercase().as_str() {
        "warn" => Level::WARN,
        "info" => Level::INFO,
        "trace" => Level::TRACE,
        "error" => Level::ERROR,
        "debug" => Level::DEBUG,
        _ => default,
    }
}

fn report(scene: &Scene) {
    if let Some(view) = scene.view {
        println!("view = {}", view);
        match view.inverse() {
            Ok(camera_to_world) => println!("camera to world = {}", camera_to_world),
            Err(e) => warn!("view matrix has no inverse: {}", e),
        }
    }
    println!("transform = {}", scene.transform.forward);
    println!("inverse transform = {}", scene.transform.reverse);

    for (query, evaluations) in scene.rays.iter().zip(scene.evaluate_all()) {
        println!(
            "ray origin = {}, direction = {}, tmax = {}",
            query.ray.origin, query.ray.direction, query.ray.tmax
        );
        for evaluation in evaluations {
            println!(
                "  t = {}: world {}, object {}",
                evaluation.t, evaluation.world, evaluation.object
            );
            for (light, direction) in scene.lights.iter().zip(evaluation.light_directions) {
                match direction {
                    Some(direction) => println!("    to light at {} = {}", light.position, direction),
                    None => println!("    on light at {}", light.position),
                }
            }
        }
    }

    for direction in &scene.random_directions {
        println!("random direction = {}", direction);
    }
}

fn main() -> anyhow::Result<()> {
    let opts = Opt::from_args();
    let level = parse_log_level(&opts.log_level, Level::INFO);
    tracing_subscriber::fmt().with_max_level(level).init();

    let config = get_settings(&opts.config_file)?;
    let scene = construct_scene(&config).context("fatal error constructing scene")?;
    info!(
        "constructed scene with {} rays and {} lights",
        scene.rays.len(),
        scene.lights.len()
    );

    if opts.dry_run {
        info!("dry run, skipping report");
        return Ok(());
    }
    report(&scene);
    Ok(())
}
