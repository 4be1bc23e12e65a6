//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use omnitrix::catalog::Catalog;
use omnitrix::config::ScrollConfig;
use omnitrix::ui::app::App;
use omnitrix::ui::sequencer::{SequencerTimings, ViewSequencer};
use omnitrix::ui::timer::ManualClock;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

pub fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

/// Sequencer over a catalog of `item_count` with the default delays.
pub fn sequencer(item_count: usize) -> (ViewSequencer, ManualClock) {
    let clock = ManualClock::new();
    let sequencer = ViewSequencer::new(
        item_count,
        SequencerTimings::default(),
        Arc::new(clock.clone()),
    );
    (sequencer, clock)
}

/// App over the built-in catalog with a manual clock.
pub fn app() -> (App, ManualClock) {
    let clock = ManualClock::new();
    (app_on(&clock), clock)
}

/// App over the built-in catalog driven by an existing clock.
pub fn app_on(clock: &ManualClock) -> App {
    App::with_catalog(
        Catalog::default(),
        SequencerTimings::default(),
        ScrollConfig::default(),
        Arc::new(clock.clone()),
    )
}

/// Advance the clock and run one tick.
pub fn tick(app: &mut App, clock: &ManualClock, by: Duration) {
    clock.advance(by);
    app.on_tick();
}

/// Write a config file into a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
