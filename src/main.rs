//! Headless demo driver
//!
//! Stands in for a real frame loop: runs a scripted session at a fixed
//! timestep and logs droplet counts, so the simulation can be exercised
//! without a window. Usage: `splashbox [seed] [config.json]`.

use anyhow::Result;
use glam::Vec2;
use std::path::Path;

use splashbox::scene::build_scene;
use splashbox::sim::{SimState, TickInput, tick};
use splashbox::SimConfig;

const DT: f32 = 1.0 / 60.0;
const FRAMES: u32 = 600;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = match args.next() {
        Some(arg) => arg.parse()?,
        None => 0xCAFE,
    };
    let config = match args.next() {
        Some(path) => SimConfig::load_from(Path::new(&path))?,
        None => SimConfig::default(),
    };

    log::info!("seed {seed}, playfield {}x{}", config.width, config.height);
    let mut state = SimState::new(seed, config);

    for frame in 0..FRAMES {
        // Scripted session: lay out platforms, hose the playfield for five
        // seconds, drop a crate into the stream partway through
        let input = TickInput {
            pointer: Vec2::new(400.0, 150.0 + (frame as f32 * 0.02).sin() * 100.0),
            regenerate_platforms: frame == 0,
            spawn_crate: frame == 120,
            emit_water: frame < 300,
        };
        tick(&mut state, &input, DT);

        if frame % 60 == 0 {
            log::info!(
                "frame {frame}: {} droplets, {} crate(s)",
                state.droplets.len(),
                state.crates.len()
            );
        }
    }

    let scene = build_scene(&state);
    println!(
        "after {FRAMES} frames: {} droplets live, {} rects in the final scene",
        scene.droplet_count,
        scene.rects.len()
    );
    Ok(())
}
