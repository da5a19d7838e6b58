//! Chord Kit - keyboard chord recognition
//!
//! This library lets independent owners register multi-key combinations
//! ("Cmd+D", "Ctrl+Enter") and get a single callback when the combination
//! becomes held, with per-platform key sets and owner-scoped lifetimes.

pub mod config;
pub mod error;
pub mod logging;
pub mod shortcuts;
pub mod stdin_events;
