//! Intents for gallery scroll selection.

use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy)]
pub enum ScrollIntent {
    /// Host reported an absolute progress value.
    SetProgress(f64),
    /// Relative scroll (keyboard step, mouse wheel).
    ScrollBy(f64),
}

impl Intent for ScrollIntent {}
