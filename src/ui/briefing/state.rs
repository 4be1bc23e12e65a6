//! State for the Alien X intro.

use crate::ui::mvi::UiState;

/// Text typed out before the page content is revealed.
pub const ACCESS_TEXT: &str = "ACCESSING CELESTIALSAPIEN FILES...";

/// Transformation burst after the content appears.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectPhase {
    Pending,
    Active,
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BriefingState {
    /// Not on the Alien X page.
    #[default]
    Idle,
    /// White flash right after the page opens.
    Flash,
    /// Flash over, typing not started. The empty prompt is already up.
    Waiting,
    /// `ticks` type ticks have fired. Each tick reveals the next prefix,
    /// starting from the empty one.
    Typing { ticks: usize },
    /// Full text visible before the content is revealed.
    Holding,
    /// Page content visible.
    Revealed { effect: EffectPhase },
}

impl UiState for BriefingState {}

impl BriefingState {
    pub fn is_running(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    pub fn is_flashing(&self) -> bool {
        matches!(self, Self::Flash)
    }

    /// Portion of the access text currently on screen, if any.
    pub fn access_text(&self) -> Option<&'static str> {
        match self {
            Self::Waiting => Some(""),
            Self::Typing { ticks } => {
                let shown = ticks.saturating_sub(1).min(ACCESS_TEXT.len());
                Some(&ACCESS_TEXT[..shown])
            }
            Self::Holding => Some(ACCESS_TEXT),
            _ => None,
        }
    }

    pub fn content_visible(&self) -> bool {
        matches!(self, Self::Revealed { .. })
    }

    pub fn effect_active(&self) -> bool {
        matches!(
            self,
            Self::Revealed {
                effect: EffectPhase::Active
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_is_default() {
        assert_eq!(BriefingState::default(), BriefingState::Idle);
        assert!(!BriefingState::Idle.is_running());
    }

    #[test]
    fn access_text_is_typed_prefix() {
        assert_eq!(BriefingState::Waiting.access_text(), Some(""));
        assert_eq!(BriefingState::Typing { ticks: 0 }.access_text(), Some(""));
        assert_eq!(BriefingState::Typing { ticks: 1 }.access_text(), Some(""));
        assert_eq!(
            BriefingState::Typing { ticks: 10 }.access_text(),
            Some("ACCESSING")
        );
        assert_eq!(
            BriefingState::Typing {
                ticks: ACCESS_TEXT.len() + 1
            }
            .access_text(),
            Some(ACCESS_TEXT)
        );
        assert_eq!(BriefingState::Holding.access_text(), Some(ACCESS_TEXT));
        assert_eq!(BriefingState::Flash.access_text(), None);
    }

    #[test]
    fn content_and_effect_visibility() {
        let pending = BriefingState::Revealed {
            effect: EffectPhase::Pending,
        };
        assert!(pending.content_visible());
        assert!(!pending.effect_active());
        assert!(BriefingState::Revealed {
            effect: EffectPhase::Active
        }
        .effect_active());
        assert!(!BriefingState::Holding.content_visible());
    }
}
