//! Reducer for screen sequencing.

use crate::ui::mvi::Reducer;

use super::intent::SequencerIntent;
use super::state::{Overlay, Screen, SequencerState, Transition};

/// Pure state transitions. Scheduling the timers that later produce
/// `TransitionElapsed` and `OverlayElapsed` is done by the driver.
pub struct SequencerReducer;

impl Reducer for SequencerReducer {
    type State = SequencerState;
    type Intent = SequencerIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        if state.is_busy() && intent.is_navigation() {
            return state;
        }

        match intent {
            SequencerIntent::SelectItem { index } => match state.screen {
                Screen::Selection => {
                    let index = state.clamp_index(index);
                    begin(
                        SequencerState {
                            selection: Some(index),
                            ..state
                        },
                        Transition::ToDetail { index },
                    )
                }
                _ => state,
            },

            SequencerIntent::Back => match state.screen {
                Screen::Detail | Screen::Special => {
                    let mut next = state;
                    next.screen = Screen::Selection;
                    next.overlays.materializing = false;
                    next
                }
                Screen::Selection => state,
            },

            SequencerIntent::TransformBack => match state.screen {
                Screen::Detail => {
                    let mut next = state;
                    next.overlays.materializing = false;
                    begin(next, Transition::ToSelection)
                }
                _ => state,
            },

            SequencerIntent::RequestSpecial => match state.screen {
                Screen::Selection => begin(state, Transition::ToSpecial),
                _ => state,
            },

            SequencerIntent::TransitionElapsed => {
                let mut next = state;
                let Some(transition) = next.in_flight.take() else {
                    return next;
                };
                // Overlay clears first; the screen change is the observable step.
                next.overlays.set(transition.overlay(), false);
                match transition {
                    Transition::ToDetail { index } => {
                        next.screen = Screen::Detail;
                        next.selection = Some(next.clamp_index(index));
                        next.overlays.materializing = true;
                    }
                    Transition::ToSelection => next.screen = Screen::Selection,
                    Transition::ToSpecial => next.screen = Screen::Special,
                }
                next
            }

            SequencerIntent::OverlayElapsed(overlay) => {
                // Transition overlays clear with their transition.
                if overlay != Overlay::Materializing {
                    return state;
                }
                let mut next = state;
                next.overlays.materializing = false;
                next
            }
        }
    }
}

fn begin(mut state: SequencerState, transition: Transition) -> SequencerState {
    state.overlays.set(transition.overlay(), true);
    state.in_flight = Some(transition);
    state
}
