//! Retrowave Rider headless runner
//!
//! Plays one seeded round without a window, either idling or under the
//! autopilot, and reports the result. Useful for tuning runs and replays.
//!
//! Example:
//!   cargo run --release -- --seed 7 --autopilot --ticks 3600 --json

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use retrowave_rider::consts::{SIM_DT, TICKS_PER_SECOND};
use retrowave_rider::renderer::build_scene;
use retrowave_rider::sim::GameEvent;
use retrowave_rider::{HudSnapshot, QualityPreset, Settings, Simulation, Tuning};

#[derive(Parser, Debug)]
#[command(author, version, about = "Run a headless Retrowave Rider round", long_about = None)]
struct Args {
    /// RNG seed for the round
    #[arg(long, default_value_t = 1)]
    seed: u64,
    /// Stop after this many ticks even if the round is still going
    #[arg(long, default_value_t = 60 * 60)]
    ticks: u64,
    /// JSON file overriding gameplay tuning
    #[arg(long)]
    tuning: Option<PathBuf>,
    /// JSON file with presentation settings
    #[arg(long)]
    settings: Option<PathBuf>,
    /// Quality preset (low, medium, high); overrides the settings file
    #[arg(long)]
    quality: Option<String>,
    /// Let the built-in driver steer
    #[arg(long)]
    autopilot: bool,
    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct RunSummary {
    seed: u64,
    ticks: u64,
    seconds: f32,
    game_over: bool,
    hud: HudSnapshot,
}

fn main() -> Result<()> {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    let args = Args::parse();

    let tuning = match &args.tuning {
        Some(path) => Tuning::load(path)
            .with_context(|| format!("load tuning {}", path.display()))?,
        None => Tuning::default(),
    };
    let mut settings = match &args.settings {
        Some(path) => Settings::load(path)
            .with_context(|| format!("load settings {}", path.display()))?,
        None => Settings::default(),
    };
    if let Some(name) = &args.quality {
        let Some(preset) = QualityPreset::parse(name) else {
            anyhow::bail!("unknown --quality {name} (expected low, medium or high)");
        };
        settings.apply_preset(preset);
    }

    log::info!(
        "Retrowave Rider headless run: seed {}, quality {}, autopilot {}",
        args.seed,
        settings.quality.as_str(),
        args.autopilot
    );

    let mut sim = Simulation::new(args.seed, tuning, &settings);
    sim.set_autopilot(args.autopilot);
    sim.start();

    let mut peak_vertices = 0;
    while sim.state().time_ticks < args.ticks && sim.state().is_playing() {
        sim.tick(SIM_DT);

        for event in sim.drain_events() {
            match event {
                GameEvent::LifeLost { remaining } => {
                    log::info!("Life lost at tick {}, {remaining} left", sim.state().time_ticks)
                }
                GameEvent::GameOver { final_score } => {
                    log::info!("Game over, final score {final_score}")
                }
                other => log::debug!("{other:?}"),
            }
        }

        peak_vertices = peak_vertices.max(build_scene(sim.state(), &settings).len());
    }
    log::debug!("Peak draw list: {peak_vertices} vertices");

    let state = sim.state();
    let summary = RunSummary {
        seed: args.seed,
        ticks: state.time_ticks,
        seconds: state.time_ticks as f32 / TICKS_PER_SECOND as f32,
        game_over: !state.is_active(),
        hud: sim.hud(),
    };

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&summary).context("serialize run summary")?
        );
    } else {
        println!("{}", summary.hud.status_line());
        println!(
            "{} after {:.1}s",
            if summary.game_over { "GAME OVER" } else { "Stopped" },
            summary.seconds
        );
    }

    Ok(())
}
