//! Gallery scroll selection.
//!
//! Maps continuous scroll progress through the gallery section to the
//! index of the highlighted alien, with dead zones at both ends so the
//! first and last cards do not flicker at the boundaries.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `index.rs` - The pure progress → index mapping
//! - `state.rs` - Progress, published index, item count
//! - `intent.rs` - Scroll input (absolute or relative)
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `selector.rs` - Owner of the state that reports index changes

mod index;
mod intent;
mod reducer;
mod selector;
mod state;

pub use index::{compute_index, LEADING_DEAD_ZONE, TRAILING_DEAD_ZONE};
pub use intent::ScrollIntent;
pub use reducer::ScrollReducer;
pub use selector::ScrollSelector;
pub use state::ScrollState;
