//! Owner of the scroll state that publishes index changes.

use crate::ui::mvi::Reducer;

use super::intent::ScrollIntent;
use super::reducer::ScrollReducer;
use super::state::ScrollState;

/// Publishes the highlighted index only when it changes.
///
/// Every progress update goes through the reducer, but callers only see
/// `Some(index)` when the result differs from the previously published
/// index, so dependent media is not reloaded redundantly.
#[derive(Debug, Clone, Default)]
pub struct ScrollSelector {
    state: ScrollState,
}

impl ScrollSelector {
    pub fn new(item_count: usize) -> Self {
        Self {
            state: ScrollState::new(item_count),
        }
    }

    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    pub fn index(&self) -> usize {
        self.state.index
    }

    pub fn progress(&self) -> f64 {
        self.state.progress
    }

    /// Apply an intent; returns the new index if it changed.
    pub fn dispatch(&mut self, intent: ScrollIntent) -> Option<usize> {
        let previous = self.state.index;
        self.state = ScrollReducer::reduce(std::mem::take(&mut self.state), intent);
        if self.state.index == previous {
            return None;
        }
        tracing::debug!(
            from = previous,
            to = self.state.index,
            progress = self.state.progress,
            "Selection index changed"
        );
        Some(self.state.index)
    }

    pub fn set_progress(&mut self, progress: f64) -> Option<usize> {
        self.dispatch(ScrollIntent::SetProgress(progress))
    }

    pub fn scroll_by(&mut self, delta: f64) -> Option<usize> {
        self.dispatch(ScrollIntent::ScrollBy(delta))
    }
}
