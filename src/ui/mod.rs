pub mod app;
pub mod briefing;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod scroll;
pub mod sequencer;
pub mod terminal_guard;
pub mod theme;
pub mod timer;
