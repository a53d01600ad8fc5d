//! Dohyo entry point
//!
//! Runs one headless bout: the bot on the west side against a motionless east
//! wrestler. Usage: `dohyo [settings.json]`

use glam::Vec2;

use dohyo::MatchSettings;
use dohyo::sim::run_match;

fn main() {
    env_logger::init();
    log::info!("Dohyo (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => MatchSettings::load(&path).unwrap_or_else(|e| {
            log::warn!("Could not load settings from {}: {} - using defaults", path, e);
            MatchSettings::default()
        }),
        None => {
            log::info!("Using default settings");
            MatchSettings::default()
        }
    };

    let seed = settings.seed.unwrap_or_else(rand::random);
    log::info!(
        "Match seed: {}, bot strategy: {}",
        seed,
        settings.strategy.as_str()
    );

    let summary = run_match(&settings, seed, |_| Vec2::ZERO);
    match summary.winner {
        Some(side) => log::info!("{} wins after {} ticks", side.as_str(), summary.ticks),
        None => log::info!("No result after {} ticks", summary.ticks),
    }

    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Could not serialize match summary: {}", e),
    }
}
