//! Enums used throughout the agenda timer
//!
//! This module contains the various enum types used for state management
//! and UI rendering.

/// Mode for modal input system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Timers,   // Default mode - keys drive the selected timer
    Edit,     // Keys go to the agenda text editor
    OpenFile, // Keys go to the file path prompt
}

/// Visual urgency of a countdown, derived from its running flag and the
/// time left
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Urgency {
    Inactive,
    Active,
    Warning,
    Danger,
}

/// Remaining time at or below which a running timer shows `Warning`
pub const WARNING_THRESHOLD_SECS: u64 = 60;

impl Urgency {
    /// First matching row wins: stopped, expired, last minute, otherwise active
    pub fn derive(running: bool, remaining_secs: u64) -> Self {
        if !running {
            Urgency::Inactive
        } else if remaining_secs == 0 {
            Urgency::Danger
        } else if remaining_secs <= WARNING_THRESHOLD_SECS {
            Urgency::Warning
        } else {
            Urgency::Active
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Urgency::Inactive => "Inactive",
            Urgency::Active => "Active",
            Urgency::Warning => "Warning",
            Urgency::Danger => "Danger",
        }
    }
}
