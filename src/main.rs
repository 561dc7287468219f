mod collision;
mod config;
mod disc;
mod error;
mod game;
mod logging;
mod player;
mod render;
mod types;
mod world;

use crate::config::{WINDOW_HEIGHT, WINDOW_WIDTH, WorldConfig};
use crate::types::Bounds;
use clap::Parser;
use log::{LevelFilter, info};
use macroquad::prelude::*;

// --- Command Line Arguments ---
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of free-moving discs to spawn each round.
    #[arg(long, default_value_t = config::DISC_COUNT)]
    discs: u32,

    /// Minimum disc radius in pixels.
    #[arg(long, default_value_t = config::DISC_RAD_MIN)]
    min_radius: f64,

    /// Maximum disc radius in pixels.
    #[arg(long, default_value_t = config::DISC_RAD_MAX)]
    max_radius: f64,

    /// Initial per-axis disc velocity range in pixels per frame.
    #[arg(long, default_value_t = config::DISC_VEL_RANGE)]
    vel_range: f64,

    /// Player radius gained per elimination (0 disables growth).
    #[arg(long, default_value_t = config::PLAYER_GROWTH)]
    growth: f64,

    /// RNG seed for reproducible disc placement.
    #[arg(long)]
    seed: Option<u64>,

    /// Debug filter to specify log topics (e.g., "physics,round")
    #[arg(long)]
    debug_filter: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Disc Pop".to_owned(),
        window_width: WINDOW_WIDTH,
        window_height: WINDOW_HEIGHT,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize the logger
    let log_level = match args.log_level.to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    };

    if let Err(e) = logging::init_logger(log_level, args.debug_filter) {
        eprintln!("Warning: Failed to initialize logger: {}", e);
    }

    info!("Initializing Disc Pop...");

    let config = WorldConfig {
        disc_count: args.discs,
        rad_min: args.min_radius,
        rad_max: args.max_radius,
        vel_range: args.vel_range,
        growth: args.growth,
    };
    let bounds = Bounds {
        width: screen_width() as f64,
        height: screen_height() as f64,
    };

    let mut game = game::Game::new(config, bounds, args.seed).expect("Failed to create game");

    let mut renderer = render::Renderer::new();
    info!("Renderer initialized.");

    game.run(&mut renderer).await.expect("Game loop failed");
}
