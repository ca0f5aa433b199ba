//! Per-item countdown state machine.
//!
//! A `CountdownTimer` never schedules anything itself. Starting it hands back
//! a `TickHandle` that the host arms on its tick source; each fired callback
//! goes through `tick_armed`, which tells the host whether to re-arm.
//! Stopping or resetting bumps the timer's generation, so callbacks armed
//! before that point fire as no-ops.

use crate::models::{AgendaEntry, Urgency};
use crate::utils::format_mm_ss;

/// Token carried by an armed tick callback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickHandle {
    generation: u64,
}

/// What the host should do after delivering an armed tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Timer is still counting down, arm another tick
    Rearm,
    /// Timer stopped, expired, or the handle is stale
    Finished,
}

#[derive(Debug, Clone)]
pub struct CountdownTimer {
    entry: AgendaEntry,
    total_secs: u64,
    remaining_secs: u64,
    running: bool,
    generation: u64,
}

impl CountdownTimer {
    pub fn new(entry: AgendaEntry) -> Self {
        let total_secs = entry.duration_secs;
        Self {
            entry,
            total_secs,
            remaining_secs: total_secs,
            running: false,
            generation: 0,
        }
    }

    pub fn entry(&self) -> &AgendaEntry {
        &self.entry
    }

    pub fn description(&self) -> &str {
        &self.entry.description
    }

    pub fn total_secs(&self) -> u64 {
        self.total_secs
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn urgency(&self) -> Urgency {
        Urgency::derive(self.running, self.remaining_secs)
    }

    /// Remaining time as `MM:SS`
    pub fn display(&self) -> String {
        format_mm_ss(self.remaining_secs)
    }

    /// 0.0 .. 1.0 share of the allotted time already used
    pub fn elapsed_fraction(&self) -> f64 {
        if self.total_secs == 0 {
            return 1.0;
        }
        1.0 - (self.remaining_secs as f64 / self.total_secs as f64)
    }

    /// Start or stop the countdown.
    ///
    /// Returns a handle to arm when the timer just started and has time left.
    /// Starting at zero flips `running` but arms nothing.
    pub fn toggle(&mut self) -> Option<TickHandle> {
        self.running = !self.running;
        self.generation = self.generation.wrapping_add(1);
        if self.running && self.remaining_secs > 0 {
            Some(TickHandle {
                generation: self.generation,
            })
        } else {
            None
        }
    }

    /// Advance by one second while running. Floors at zero without pausing.
    pub fn tick(&mut self) {
        if self.running && self.remaining_secs > 0 {
            self.remaining_secs -= 1;
        }
    }

    /// Deliver a scheduled tick. Stale handles never decrement.
    pub fn tick_armed(&mut self, handle: TickHandle) -> TickOutcome {
        if handle.generation != self.generation || !self.running {
            return TickOutcome::Finished;
        }
        self.tick();
        if self.remaining_secs > 0 {
            TickOutcome::Rearm
        } else {
            TickOutcome::Finished
        }
    }

    pub fn reset(&mut self) {
        self.running = false;
        self.remaining_secs = self.total_secs;
        self.generation = self.generation.wrapping_add(1);
    }
}
