//! Session layer for the hospital intake desk.
//!
//! Turns operator input into menu actions and runs the intake / menu state
//! machine over the core queue and records stack.

pub mod menu;
pub mod session;

pub use desk_core as core;
