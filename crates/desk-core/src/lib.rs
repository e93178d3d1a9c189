//! Core types for the hospital intake desk.
//!
//! Holds the patient model, the waiting-line queue and the treated-records
//! stack, listing formatting, the shared error type and CLI settings.

pub mod error;
pub mod formatting;
pub mod models;
pub mod queue;
pub mod settings;
pub mod stack;
