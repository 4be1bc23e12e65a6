//! Timer-owning driver for the Alien X intro.

use std::time::Duration;

use crate::ui::mvi::Reducer;
use crate::ui::timer::{SharedClock, TimerQueue};

use super::intent::BriefingIntent;
use super::reducer::BriefingReducer;
use super::state::{BriefingState, EffectPhase};

const FLASH: Duration = Duration::from_millis(300);
const TYPING_DELAY: Duration = Duration::from_millis(500);
const TYPE_INTERVAL: Duration = Duration::from_millis(80);
const HOLD: Duration = Duration::from_millis(1000);
const EFFECT_DELAY: Duration = Duration::from_millis(500);
const EFFECT: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BriefingTimer {
    FlashEnd,
    TypingStart,
    TypeTick,
    HoldEnd,
    EffectStart,
    EffectEnd,
}

impl BriefingTimer {
    fn intent(self) -> BriefingIntent {
        match self {
            Self::FlashEnd => BriefingIntent::FlashElapsed,
            Self::TypingStart => BriefingIntent::TypingStarted,
            Self::TypeTick => BriefingIntent::TypeTick,
            Self::HoldEnd => BriefingIntent::HoldElapsed,
            Self::EffectStart => BriefingIntent::EffectStarted,
            Self::EffectEnd => BriefingIntent::EffectElapsed,
        }
    }
}

pub struct BriefingSequence {
    state: BriefingState,
    timers: TimerQueue<BriefingTimer>,
    clock: SharedClock,
}

impl std::fmt::Debug for BriefingSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BriefingSequence")
            .field("state", &self.state)
            .field("timers", &self.timers)
            .finish()
    }
}

impl BriefingSequence {
    pub fn new(clock: SharedClock) -> Self {
        Self {
            state: BriefingState::default(),
            timers: TimerQueue::new(),
            clock,
        }
    }

    pub fn state(&self) -> &BriefingState {
        &self.state
    }

    pub fn start(&mut self) {
        self.timers.cancel_all();
        self.state = BriefingState::Idle;
        self.dispatch(BriefingIntent::Start);
    }

    pub fn stop(&mut self) {
        if !self.state.is_running() && self.timers.is_empty() {
            return;
        }
        self.timers.cancel_all();
        self.dispatch(BriefingIntent::Stop);
    }

    /// Fire every due timer. Returns whether the state changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        // A type tick reschedules itself, so drain until nothing is due.
        loop {
            let due = self.timers.drain_due(self.clock.now());
            if due.is_empty() {
                break changed;
            }
            for timer in due {
                changed |= self.dispatch(timer.intent());
            }
        }
    }

    fn dispatch(&mut self, intent: BriefingIntent) -> bool {
        let before = self.state.clone();
        self.state = BriefingReducer::reduce(std::mem::take(&mut self.state), intent);
        if self.state == before {
            return false;
        }
        self.schedule_effects(intent);
        true
    }

    fn schedule_effects(&mut self, intent: BriefingIntent) {
        let now = self.clock.now();
        match (&self.state, intent) {
            (BriefingState::Flash, BriefingIntent::Start) => {
                self.timers.schedule(BriefingTimer::FlashEnd, now, FLASH);
                self.timers.schedule(BriefingTimer::TypingStart, now, TYPING_DELAY);
            }
            (BriefingState::Typing { .. }, _) => {
                self.timers.schedule(BriefingTimer::TypeTick, now, TYPE_INTERVAL);
            }
            (BriefingState::Holding, _) => {
                self.timers.schedule(BriefingTimer::HoldEnd, now, HOLD);
            }
            (
                BriefingState::Revealed {
                    effect: EffectPhase::Pending,
                },
                _,
            ) => {
                tracing::debug!("Alien X files revealed");
                self.timers.schedule(BriefingTimer::EffectStart, now, EFFECT_DELAY);
            }
            (
                BriefingState::Revealed {
                    effect: EffectPhase::Active,
                },
                _,
            ) => {
                self.timers.schedule(BriefingTimer::EffectEnd, now, EFFECT);
            }
            _ => {}
        }
    }
}
