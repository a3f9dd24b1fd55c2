//! Headless demo: one lamp spinning at random while its light flickers.
use anyhow::Context;
use bevy::prelude::*;
use bevy_transform::components::Transform;
use clap::Parser;
use flicker::{init_logging, spawn_demo_scene, Active, ScriptPlugin, ScriptSettings, REFERENCE_AXIS};
use log::info;

/// Runs the RandomReorient script on a demo lamp
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Seed for reproducible runs
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of frames to simulate
    #[arg(short, long, default_value_t = 10)]
    frames: u32,

    /// Instance name given to the script
    #[arg(short, long, default_value = "Lamp")]
    name: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut app = App::new();
    app.insert_resource(ScriptSettings { seed: args.seed })
        .add_plugins(ScriptPlugin);
    let scene = spawn_demo_scene(app.world_mut(), &args.name);

    for frame in 1..=args.frames {
        app.update();

        let world = app.world();
        let rotation = world
            .get::<Transform>(scene.owner)
            .map(|transform| transform.rotation)
            .context("demo lamp lost its Transform")?;
        let Active(lit) = world
            .get::<Active>(scene.light)
            .copied()
            .context("demo light lost its Active flag")?;

        let facing = rotation * REFERENCE_AXIS;
        info!(
            "frame {frame}: facing ({:.3}, {:.3}, {:.3}), light {}",
            facing.x,
            facing.y,
            facing.z,
            if lit { "on" } else { "off" }
        );
    }

    Ok(())
}
