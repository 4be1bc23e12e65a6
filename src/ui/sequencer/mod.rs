//! Screen sequencing for the site.
//!
//! Decides which top-level screen is visible (gallery, alien detail,
//! Alien X page) and which transient overlays are active, and stages the
//! timed transitions between them.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Screen, overlay flags, the transition in flight
//! - `intent.rs` - Navigation requests and timer expirations
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `driver.rs` - [`ViewSequencer`], which owns the state and the timers
//!
//! ```text
//!             select_item (800ms, transforming)
//!   Selection ───────────────────────────────→ Detail
//!       ↑  ↑ ←──────── back (immediate) ──────────┤
//!       │  └───── transform_back (1500ms) ────────┘
//!       │
//!       │  request_special (600ms, flash)
//!       ├─────────────────────────────────────→ Special
//!       └───────────── back (immediate) ───────────┘
//! ```
//!
//! Only one transition may be in flight; requests arriving while one is
//! pending are ignored.

mod driver;
mod error;
mod intent;
mod reducer;
mod state;

pub use driver::{SequencerTimer, SequencerTimings, ViewSequencer};
pub use error::SequencerError;
pub use intent::SequencerIntent;
pub use reducer::SequencerReducer;
pub use state::{Overlay, OverlayState, Screen, SequencerState, Transition};
