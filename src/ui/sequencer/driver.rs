//! Timer-owning driver around the sequencing reducer.

use std::time::Duration;

use crate::ui::mvi::Reducer;
use crate::ui::timer::{SharedClock, TimerQueue};

use super::error::SequencerError;
use super::intent::SequencerIntent;
use super::reducer::SequencerReducer;
use super::state::{Overlay, OverlayState, Screen, SequencerState, Transition};

/// Timer keys owned by the sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencerTimer {
    /// Completes the transition in flight (one per transition).
    Transition,
    /// Clears a self-clearing overlay.
    Overlay(Overlay),
}

/// Fixed delays of the timed transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequencerTimings {
    /// Selection → Detail, with the transforming overlay.
    pub transform: Duration,
    /// Detail → Selection, with the transform-back overlay.
    pub transform_back: Duration,
    /// Selection → Special, with the flash overlay.
    pub flash: Duration,
    /// Materializing overlay after entering Detail.
    pub materialize: Duration,
}

impl Default for SequencerTimings {
    fn default() -> Self {
        Self {
            transform: Duration::from_millis(800),
            transform_back: Duration::from_millis(1500),
            flash: Duration::from_millis(600),
            materialize: Duration::from_millis(1500),
        }
    }
}

impl SequencerTimings {
    fn delay_for(&self, transition: Transition) -> Duration {
        match transition {
            Transition::ToDetail { .. } => self.transform,
            Transition::ToSelection => self.transform_back,
            Transition::ToSpecial => self.flash,
        }
    }
}

/// Owns the sequencing state, its clock, and its pending timers.
///
/// Navigation methods return whether the request was accepted. Timers
/// only fire from [`ViewSequencer::poll`], which the event loop calls on
/// every tick. After [`ViewSequencer::teardown`] (or drop) every pending
/// timer is gone and nothing mutates the state again.
pub struct ViewSequencer {
    state: SequencerState,
    timers: TimerQueue<SequencerTimer>,
    clock: SharedClock,
    timings: SequencerTimings,
    torn_down: bool,
}

impl std::fmt::Debug for ViewSequencer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewSequencer")
            .field("state", &self.state)
            .field("timers", &self.timers)
            .field("timings", &self.timings)
            .field("torn_down", &self.torn_down)
            .finish()
    }
}

impl ViewSequencer {
    pub fn new(item_count: usize, timings: SequencerTimings, clock: SharedClock) -> Self {
        Self {
            state: SequencerState::new(item_count),
            timers: TimerQueue::new(),
            clock,
            timings,
            torn_down: false,
        }
    }

    pub fn state(&self) -> &SequencerState {
        &self.state
    }

    pub fn screen(&self) -> Screen {
        self.state.screen
    }

    pub fn selection(&self) -> Option<usize> {
        self.state.selection
    }

    pub fn overlays(&self) -> OverlayState {
        self.state.overlays
    }

    pub fn is_busy(&self) -> bool {
        self.state.is_busy()
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Transform into the alien at `index`; Detail follows after the
    /// transform delay.
    ///
    /// An index outside the catalog is rejected rather than clamped.
    pub fn select_item(&mut self, index: usize) -> Result<bool, SequencerError> {
        if index >= self.state.item_count {
            return Err(SequencerError::IndexOutOfBounds {
                index,
                len: self.state.item_count,
            });
        }
        Ok(self.request(SequencerIntent::SelectItem { index }))
    }

    pub fn back(&mut self) -> bool {
        self.request(SequencerIntent::Back)
    }

    pub fn transform_back(&mut self) -> bool {
        self.request(SequencerIntent::TransformBack)
    }

    pub fn request_special(&mut self) -> bool {
        self.request(SequencerIntent::RequestSpecial)
    }

    /// Fire every due timer. Returns whether the state changed.
    pub fn poll(&mut self) -> bool {
        if self.torn_down {
            return false;
        }
        let mut changed = false;
        for timer in self.timers.drain_due(self.clock.now()) {
            let intent = match timer {
                SequencerTimer::Transition => SequencerIntent::TransitionElapsed,
                SequencerTimer::Overlay(overlay) => SequencerIntent::OverlayElapsed(overlay),
            };
            changed |= self.dispatch(intent);
        }
        changed
    }

    /// Cancel all pending timers and stop reacting to input.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        let cancelled = self.timers.cancel_all();
        tracing::info!(cancelled, "View sequencer torn down");
    }

    fn request(&mut self, intent: SequencerIntent) -> bool {
        if self.torn_down {
            return false;
        }
        if self.state.is_busy() {
            tracing::debug!(?intent, in_flight = ?self.state.in_flight, "Ignoring request while a transition is pending");
            return false;
        }
        let accepted = self.dispatch(intent);
        if accepted {
            tracing::info!(?intent, screen = ?self.state.screen, "Navigation accepted");
        } else {
            tracing::debug!(?intent, screen = ?self.state.screen, "Navigation not applicable");
        }
        accepted
    }

    fn dispatch(&mut self, intent: SequencerIntent) -> bool {
        let before = self.state.clone();
        self.state = SequencerReducer::reduce(std::mem::take(&mut self.state), intent);
        self.schedule_effects(&before);
        self.state != before
    }

    fn schedule_effects(&mut self, before: &SequencerState) {
        let now = self.clock.now();

        if before.in_flight.is_none() {
            if let Some(transition) = self.state.in_flight {
                self.timers.schedule(
                    SequencerTimer::Transition,
                    now,
                    self.timings.delay_for(transition),
                );
            }
        }

        let materialize = SequencerTimer::Overlay(Overlay::Materializing);
        match (before.overlays.materializing, self.state.overlays.materializing) {
            (false, true) => self.timers.schedule(materialize, now, self.timings.materialize),
            (true, false) => {
                self.timers.cancel(materialize);
            }
            _ => {}
        }
    }
}

impl Drop for ViewSequencer {
    fn drop(&mut self) {
        self.teardown();
    }
}
