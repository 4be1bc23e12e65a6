//! Model-View-Intent (MVI) primitives shared by every screen state machine.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Immutable snapshot the renderer draws from
//! - **Intent**: Key presses, scroll input, or timer expirations
//! - **Reducer**: Pure function that transforms state based on intents
//!
//! Timers and logging live outside the reducers, in the drivers that
//! dispatch to them.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
