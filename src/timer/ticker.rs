//! Host-side tick source.
//!
//! Holds at most one armed one-second callback per running timer. The event
//! loop calls `fire_due` with the current time; each due callback delivers
//! exactly one tick and is re-armed only while the timer asks for it. A
//! loop that falls behind catches up one tick per missed interval.

use std::time::{Duration, Instant};

use tracing::trace;

use super::board::{Board, TimerId};
use super::countdown::{TickHandle, TickOutcome};

pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy)]
struct Armed {
    id: TimerId,
    handle: TickHandle,
    due: Instant,
}

#[derive(Debug)]
pub struct Ticker {
    armed: Vec<Armed>,
    interval: Duration,
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new()
    }
}

impl Ticker {
    pub fn new() -> Self {
        Self::with_interval(TICK_INTERVAL)
    }

    pub fn with_interval(interval: Duration) -> Self {
        Self {
            armed: Vec::new(),
            interval,
        }
    }

    /// Arm the tick loop for `id`, first tick one interval from `now`.
    /// Replaces any callback already armed for the same timer.
    pub fn arm(&mut self, id: TimerId, handle: TickHandle, now: Instant) {
        self.armed.retain(|a| a.id != id);
        self.armed.push(Armed {
            id,
            handle,
            due: now + self.interval,
        });
    }

    /// Deliver every callback due at `now`. Returns the number delivered.
    pub fn fire_due(&mut self, now: Instant, board: &mut Board) -> usize {
        let interval = self.interval;
        let mut delivered = 0;

        self.armed.retain_mut(|armed| {
            while armed.due <= now {
                // Timer gone after a re-parse
                let Some(timer) = board.timer_mut(armed.id) else {
                    return false;
                };
                delivered += 1;
                match timer.tick_armed(armed.handle) {
                    TickOutcome::Rearm => armed.due += interval,
                    TickOutcome::Finished => {
                        trace!(timer = ?armed.id, "tick loop finished");
                        return false;
                    }
                }
            }
            true
        });

        delivered
    }

    /// Earliest pending callback, for sizing the event poll timeout
    pub fn next_due(&self) -> Option<Instant> {
        self.armed.iter().map(|a| a.due).min()
    }

    pub fn armed_count(&self) -> usize {
        self.armed.len()
    }

    pub fn clear(&mut self) {
        self.armed.clear();
    }
}
