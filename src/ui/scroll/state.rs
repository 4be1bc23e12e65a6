//! State for gallery scroll selection.

use crate::ui::mvi::UiState;

/// Scroll position through the gallery and the index derived from it.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollState {
    /// Normalized progress through the gallery section, in `[0.0, 1.0]`.
    pub progress: f64,
    /// Published index of the highlighted item.
    pub index: usize,
    /// Number of items in the catalog.
    pub item_count: usize,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new(1)
    }
}

impl UiState for ScrollState {}

impl ScrollState {
    pub fn new(item_count: usize) -> Self {
        Self {
            progress: 0.0,
            index: 0,
            item_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_starts_at_top() {
        let state = ScrollState::default();
        assert_eq!(state.progress, 0.0);
        assert_eq!(state.index, 0);
        assert_eq!(state.item_count, 1);
    }
}
