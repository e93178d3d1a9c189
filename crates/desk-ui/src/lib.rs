//! Terminal presentation layer for the hospital intake desk.
//!
//! Provides the colour [`themes::Theme`] built on [`crossterm`] styles and the
//! [`console::Console`] that renders prompts, the menu and session outcomes.

pub mod console;
pub mod themes;

pub use desk_core as core;
