//! Reducer for gallery scroll selection.

use crate::ui::mvi::Reducer;

use super::index::compute_index;
use super::intent::ScrollIntent;
use super::state::ScrollState;

pub struct ScrollReducer;

impl Reducer for ScrollReducer {
    type State = ScrollState;
    type Intent = ScrollIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let progress = match intent {
            ScrollIntent::SetProgress(progress) => progress,
            ScrollIntent::ScrollBy(delta) => state.progress + delta,
        };
        let progress = if progress.is_nan() {
            state.progress
        } else {
            progress.clamp(0.0, 1.0)
        };

        ScrollState {
            progress,
            index: compute_index(progress, state.item_count),
            item_count: state.item_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_progress_updates_index() {
        let state = ScrollReducer::reduce(ScrollState::new(5), ScrollIntent::SetProgress(0.5));
        assert_eq!(state.progress, 0.5);
        assert_eq!(state.index, 2);
    }

    #[test]
    fn scroll_by_accumulates() {
        let state = ScrollState::new(5);
        let state = ScrollReducer::reduce(state, ScrollIntent::ScrollBy(0.3));
        let state = ScrollReducer::reduce(state, ScrollIntent::ScrollBy(0.3));
        assert!((state.progress - 0.6).abs() < 1e-9);
        assert_eq!(state.index, 3);
    }

    #[test]
    fn scroll_by_clamps_at_bounds() {
        let state = ScrollReducer::reduce(ScrollState::new(5), ScrollIntent::ScrollBy(-1.0));
        assert_eq!(state.progress, 0.0);
        assert_eq!(state.index, 0);

        let state = ScrollReducer::reduce(state, ScrollIntent::ScrollBy(5.0));
        assert_eq!(state.progress, 1.0);
        assert_eq!(state.index, 4);
    }

    #[test]
    fn nan_progress_keeps_previous() {
        let state = ScrollReducer::reduce(ScrollState::new(5), ScrollIntent::SetProgress(0.5));
        let state = ScrollReducer::reduce(state, ScrollIntent::SetProgress(f64::NAN));
        assert_eq!(state.progress, 0.5);
        assert_eq!(state.index, 2);
    }
}
