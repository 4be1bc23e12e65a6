//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (scrolling, selecting a card, navigating back)
/// - Timer expirations scheduled by a driver
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
