//! UI module for agenda-timer
//!
//! This module contains UI rendering functions for the TUI interface:
//! the agenda text panel, timer cards and the status bar.

mod editor;
mod helpers;
mod layout;
mod timers;

pub use layout::draw;
