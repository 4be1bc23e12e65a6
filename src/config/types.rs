use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::catalog::{Alien, Catalog, CatalogError};
use crate::ui::sequencer::SequencerTimings;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub timings: Timings,
    #[serde(default)]
    pub scroll: ScrollConfig,
    #[serde(default)]
    pub ui: UiConfig,
    /// Catalog override. Empty means the built-in aliens.
    #[serde(default)]
    pub aliens: Vec<Alien>,
}

/// Durations of the timed screen transitions, in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Timings {
    /// Gallery → detail page (default: 800).
    #[serde(default = "default_transform_ms")]
    pub transform_ms: u64,
    /// Detail page → gallery with the transform-back effect (default: 1500).
    #[serde(default = "default_transform_back_ms")]
    pub transform_back_ms: u64,
    /// Flash before the Alien X page (default: 600).
    #[serde(default = "default_flash_ms")]
    pub flash_ms: u64,
    /// Materialization ripple on the detail page (default: 1500).
    #[serde(default = "default_materialize_ms")]
    pub materialize_ms: u64,
}

/// Gallery scrolling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Progress per arrow key or wheel notch (default: 0.05).
    #[serde(default = "default_scroll_step")]
    pub step: f64,
    /// Progress per PageUp/PageDown (default: 0.2).
    #[serde(default = "default_page_step")]
    pub page_step: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event loop tick in milliseconds (default: 50).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_transform_ms() -> u64 {
    800
}

fn default_transform_back_ms() -> u64 {
    1500
}

fn default_flash_ms() -> u64 {
    600
}

fn default_materialize_ms() -> u64 {
    1500
}

fn default_scroll_step() -> f64 {
    0.05
}

fn default_page_step() -> f64 {
    0.2
}

fn default_tick_rate_ms() -> u64 {
    50
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            transform_ms: default_transform_ms(),
            transform_back_ms: default_transform_back_ms(),
            flash_ms: default_flash_ms(),
            materialize_ms: default_materialize_ms(),
        }
    }
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            step: default_scroll_step(),
            page_step: default_page_step(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Timings {
    pub fn sequencer_timings(&self) -> SequencerTimings {
        SequencerTimings {
            transform: Duration::from_millis(self.transform_ms),
            transform_back: Duration::from_millis(self.transform_back_ms),
            flash: Duration::from_millis(self.flash_ms),
            materialize: Duration::from_millis(self.materialize_ms),
        }
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

impl Config {
    /// The configured catalog, or the built-in one when none is configured.
    pub fn catalog(&self) -> Result<Catalog, CatalogError> {
        if self.aliens.is_empty() {
            return Ok(Catalog::default());
        }
        Catalog::from_aliens(self.aliens.clone())
    }
}
