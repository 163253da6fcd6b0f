use anyhow::Context;
use clap::Parser;
use log::{error, info};

mod cli;
mod logger;

use cli::Args;
use logger::init_logger;
use spheretrace::config::load_scene;
use spheretrace::output::save_image;
use spheretrace::random::{random_scene, scene_rng};
use spheretrace::render::render;
use spheretrace::scene::Scene;

/// Load the scene file if one was given, otherwise generate the random scene.
fn build_scene(args: &Args) -> anyhow::Result<Scene> {
    match &args.config {
        Some(path) => {
            info!("Loading scene from {}", path.display());
            load_scene(path)
                .with_context(|| format!("failed to load scene from {}", path.display()))
        }
        None => {
            let (mut rng, seed) = scene_rng(args.seed);
            info!("Generating {} random spheres with seed {}", args.sphere_count, seed);
            Ok(random_scene(&mut rng, args.sphere_count))
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let scene = build_scene(args)?;

    info!("Image resolution: {}x{}", args.width, args.height);
    let raster = render(&scene, args.width, args.height);

    save_image(&raster, &args.output)
        .with_context(|| format!("failed to save image to {}", args.output.display()))
}

fn main() {
    let args = Args::parse();

    init_logger(args.debug_level.clone().into());

    // Log application startup with version information
    info!("spheretrace - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));

    if let Err(e) = run(&args) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}
