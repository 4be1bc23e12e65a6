//! State for screen sequencing.

use crate::ui::mvi::UiState;

/// Top-level screen. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Hero banner and the scrollable alien gallery.
    #[default]
    Selection,
    /// Detail page for the selected alien.
    Detail,
    /// The Alien X page.
    Special,
}

/// A transient visual effect, independent of the active screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    /// Green burst while transforming into the selected alien.
    Transforming,
    /// Burst while reverting from the detail page.
    TransformBack,
    /// White flash before the Alien X page.
    Flash,
    /// Fading ripple right after the detail page appears.
    Materializing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OverlayState {
    pub transforming: bool,
    pub transform_back: bool,
    pub flash: bool,
    pub materializing: bool,
}

impl OverlayState {
    pub fn set(&mut self, overlay: Overlay, active: bool) {
        match overlay {
            Overlay::Transforming => self.transforming = active,
            Overlay::TransformBack => self.transform_back = active,
            Overlay::Flash => self.flash = active,
            Overlay::Materializing => self.materializing = active,
        }
    }

    pub fn any_active(&self) -> bool {
        self.transforming || self.transform_back || self.flash || self.materializing
    }
}

/// A timed screen change waiting for its delay to elapse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    ToDetail { index: usize },
    ToSelection,
    ToSpecial,
}

impl Transition {
    /// Overlay shown while this transition is pending.
    pub fn overlay(&self) -> Overlay {
        match self {
            Transition::ToDetail { .. } => Overlay::Transforming,
            Transition::ToSelection => Overlay::TransformBack,
            Transition::ToSpecial => Overlay::Flash,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SequencerState {
    pub screen: Screen,
    /// Active selection; persists across the move into Detail and back.
    pub selection: Option<usize>,
    pub overlays: OverlayState,
    pub in_flight: Option<Transition>,
    pub item_count: usize,
}

impl Default for SequencerState {
    fn default() -> Self {
        Self::new(1)
    }
}

impl UiState for SequencerState {}

impl SequencerState {
    pub fn new(item_count: usize) -> Self {
        Self {
            screen: Screen::Selection,
            selection: None,
            overlays: OverlayState::default(),
            in_flight: None,
            item_count,
        }
    }

    /// A timed transition is pending; navigation requests are ignored.
    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Clamp an index into catalog bounds.
    pub fn clamp_index(&self, index: usize) -> usize {
        index.min(self.item_count.saturating_sub(1))
    }
}
