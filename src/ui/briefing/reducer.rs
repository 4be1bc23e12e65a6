//! Reducer for the Alien X intro.

use crate::ui::mvi::Reducer;

use super::intent::BriefingIntent;
use super::state::{BriefingState, EffectPhase, ACCESS_TEXT};

pub struct BriefingReducer;

impl Reducer for BriefingReducer {
    type State = BriefingState;
    type Intent = BriefingIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match (intent, state) {
            (BriefingIntent::Start, _) => BriefingState::Flash,
            (BriefingIntent::Stop, _) => BriefingState::Idle,

            (BriefingIntent::FlashElapsed, BriefingState::Flash) => BriefingState::Waiting,

            // Typing is scheduled from Start, independent of the flash.
            (BriefingIntent::TypingStarted, BriefingState::Flash | BriefingState::Waiting) => {
                BriefingState::Typing { ticks: 0 }
            }

            // One tick per prefix, empty through full, then one more to hold.
            (BriefingIntent::TypeTick, BriefingState::Typing { ticks }) => {
                if ticks > ACCESS_TEXT.len() {
                    BriefingState::Holding
                } else {
                    BriefingState::Typing { ticks: ticks + 1 }
                }
            }

            (BriefingIntent::HoldElapsed, BriefingState::Holding) => BriefingState::Revealed {
                effect: EffectPhase::Pending,
            },

            (
                BriefingIntent::EffectStarted,
                BriefingState::Revealed {
                    effect: EffectPhase::Pending,
                },
            ) => BriefingState::Revealed {
                effect: EffectPhase::Active,
            },

            (
                BriefingIntent::EffectElapsed,
                BriefingState::Revealed {
                    effect: EffectPhase::Active,
                },
            ) => BriefingState::Revealed {
                effect: EffectPhase::Done,
            },

            (_, other) => other,
        }
    }
}
