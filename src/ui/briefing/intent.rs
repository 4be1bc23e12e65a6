//! Intents for the Alien X intro.

use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BriefingIntent {
    /// Alien X page opened.
    Start,
    /// Alien X page closed.
    Stop,
    FlashElapsed,
    TypingStarted,
    TypeTick,
    HoldElapsed,
    EffectStarted,
    EffectElapsed,
}

impl Intent for BriefingIntent {}
