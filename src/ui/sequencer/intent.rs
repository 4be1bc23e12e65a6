//! Intents for screen sequencing.

use crate::ui::mvi::Intent;

use super::state::Overlay;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencerIntent {
    /// User picked an alien in the gallery.
    SelectItem { index: usize },
    /// Immediate return to the gallery (Detail or Special).
    Back,
    /// Return from Detail with the transform-back effect.
    TransformBack,
    /// Open the Alien X page.
    RequestSpecial,
    /// The delay of the transition in flight has elapsed.
    TransitionElapsed,
    /// A self-clearing overlay has run its course.
    OverlayElapsed(Overlay),
}

impl Intent for SequencerIntent {}

impl SequencerIntent {
    /// Navigation requests, as opposed to timer expirations.
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::SelectItem { .. } | Self::Back | Self::TransformBack | Self::RequestSpecial
        )
    }
}
