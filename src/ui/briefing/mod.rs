//! Intro sequence of the Alien X page.
//!
//! White flash, then "ACCESSING CELESTIALSAPIEN FILES..." typed out one
//! character at a time, a short hold, the page content, and finally a
//! transformation burst.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Phase of the intro
//! - `intent.rs` - Start/stop plus one intent per timer
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `driver.rs` - [`BriefingSequence`], which owns the timers

mod driver;
mod intent;
mod reducer;
mod state;

pub use driver::{BriefingSequence, BriefingTimer};
pub use intent::BriefingIntent;
pub use reducer::BriefingReducer;
pub use state::{BriefingState, EffectPhase, ACCESS_TEXT};
