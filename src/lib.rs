//! The Omnitrix fan site, rendered in the terminal.
//!
//! A hero banner and a scroll-driven alien gallery, detail pages reached
//! through a timed transformation, and a classified Alien X page. The
//! gallery index comes from [`ui::scroll`], screen sequencing from
//! [`ui::sequencer`].

pub mod catalog;
pub mod config;
pub mod logging;
pub mod stats;
pub mod ui;
