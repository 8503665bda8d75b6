//! Student roster manager: an in-memory list of students with add, edit,
//! delete, name search and class filtering, shown in an egui window.
//!
//! [`core`] holds the roster logic and has no UI dependency; [`gui`] renders
//! it and turns clicks and keystrokes into [`core::RosterAction`]s.

pub mod core;
pub mod gui;
pub mod persistence;
