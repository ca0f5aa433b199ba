//! The set of live timers built from one parse of the agenda.

use std::collections::{HashMap, VecDeque};

use tracing::debug;

use super::countdown::{CountdownTimer, TickHandle};
use crate::models::AgendaEntry;

/// Stable identity of a timer on the board, never reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug, Default)]
pub struct Board {
    timers: Vec<(TimerId, CountdownTimer)>,
    next_id: u64,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<AgendaEntry>) -> Self {
        let mut board = Self::new();
        board.rebuild(entries);
        board
    }

    fn allocate_id(&mut self) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Drop every timer and create fresh, stopped ones for `entries`
    pub fn rebuild(&mut self, entries: Vec<AgendaEntry>) {
        self.timers.clear();
        for entry in entries {
            let id = self.allocate_id();
            self.timers.push((id, CountdownTimer::new(entry)));
        }
        debug!(timers = self.timers.len(), "rebuilt board");
    }

    /// Replace the board with `entries`, keeping the state of timers whose
    /// entry is unchanged. Duplicate entries are matched in order of
    /// appearance. Returns how many timers were kept.
    pub fn reconcile(&mut self, entries: Vec<AgendaEntry>) -> usize {
        let mut previous: HashMap<AgendaEntry, VecDeque<(TimerId, CountdownTimer)>> =
            HashMap::new();
        for (id, timer) in self.timers.drain(..) {
            previous
                .entry(timer.entry().clone())
                .or_default()
                .push_back((id, timer));
        }

        let mut kept = 0;
        let mut timers = Vec::with_capacity(entries.len());
        for entry in entries {
            match previous.get_mut(&entry).and_then(|q| q.pop_front()) {
                Some(existing) => {
                    kept += 1;
                    timers.push(existing);
                }
                None => {
                    let id = self.allocate_id();
                    timers.push((id, CountdownTimer::new(entry)));
                }
            }
        }
        self.timers = timers;
        debug!(timers = self.timers.len(), kept, "reconciled board");
        kept
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    pub fn timers(&self) -> impl Iterator<Item = &CountdownTimer> {
        self.timers.iter().map(|(_, t)| t)
    }

    pub fn get(&self, index: usize) -> Option<&CountdownTimer> {
        self.timers.get(index).map(|(_, t)| t)
    }

    #[cfg(test)]
    pub fn id_at(&self, index: usize) -> Option<TimerId> {
        self.timers.get(index).map(|(id, _)| *id)
    }

    pub fn timer_mut(&mut self, id: TimerId) -> Option<&mut CountdownTimer> {
        self.timers
            .iter_mut()
            .find(|(timer_id, _)| *timer_id == id)
            .map(|(_, t)| t)
    }

    /// Start/stop the timer at `index`; returns what the tick source must arm
    pub fn toggle(&mut self, index: usize) -> Option<(TimerId, TickHandle)> {
        let (id, timer) = self.timers.get_mut(index)?;
        timer.toggle().map(|handle| (*id, handle))
    }

    pub fn reset(&mut self, index: usize) {
        if let Some((_, timer)) = self.timers.get_mut(index) {
            timer.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{parse, EXAMPLE_AGENDA};

    #[test]
    fn test_from_entries_creates_stopped_timers() {
        let board = Board::from_entries(parse(EXAMPLE_AGENDA));
        assert_eq!(board.len(), 3);
        assert!(board.timers().all(|t| !t.is_running()));
        let totals: Vec<u64> = board.timers().map(|t| t.total_secs()).collect();
        assert_eq!(totals, vec![300, 900, 600]);
    }

    #[test]
    fn test_ids_are_unique_across_rebuilds() {
        let mut board = Board::from_entries(parse(EXAMPLE_AGENDA));
        let before = board.id_at(0).unwrap();
        board.rebuild(parse(EXAMPLE_AGENDA));
        let after = board.id_at(0).unwrap();
        assert_ne!(before, after);
        assert!(board.timer_mut(before).is_none());
    }

    #[test]
    fn test_rebuild_discards_running_state() {
        let mut board = Board::from_entries(parse("A - 1"));
        board.toggle(0);
        board.timer_mut(board.id_at(0).unwrap()).unwrap().tick();
        board.rebuild(parse("A - 1"));
        let t = board.get(0).unwrap();
        assert!(!t.is_running());
        assert_eq!(t.remaining_secs(), 60);
    }

    #[test]
    fn test_reconcile_keeps_unchanged_timers() {
        let mut board = Board::from_entries(parse("A - 1\nB - 2"));
        let a_id = board.id_at(0).unwrap();
        board.toggle(0);
        board.timer_mut(a_id).unwrap().tick();

        let kept = board.reconcile(parse("New - 3\nA - 1\nB - 5"));
        assert_eq!(kept, 1);
        assert_eq!(board.len(), 3);

        // A moved to index 1 but kept its identity and state
        assert_eq!(board.id_at(1), Some(a_id));
        let a = board.get(1).unwrap();
        assert!(a.is_running());
        assert_eq!(a.remaining_secs(), 59);

        // B changed duration, so it starts fresh
        let b = board.get(2).unwrap();
        assert_eq!(b.total_secs(), 300);
        assert!(!b.is_running());
    }

    #[test]
    fn test_reconcile_matches_duplicates_in_order() {
        let mut board = Board::from_entries(parse("A - 1\nA - 1"));
        let first = board.id_at(0).unwrap();
        let second = board.id_at(1).unwrap();
        board.toggle(1);

        board.reconcile(parse("A - 1"));
        assert_eq!(board.len(), 1);
        assert_eq!(board.id_at(0), Some(first));
        assert!(board.timer_mut(second).is_none());
        assert!(!board.get(0).unwrap().is_running());
    }

    #[test]
    fn test_toggle_and_reset_out_of_range() {
        let mut board = Board::new();
        assert!(board.toggle(0).is_none());
        board.reset(3);
        assert!(board.is_empty());
    }

    #[test]
    fn test_toggle_returns_id_and_handle() {
        let mut board = Board::from_entries(parse("A - 1\nZero - 0"));
        let (id, _handle) = board.toggle(0).unwrap();
        assert_eq!(Some(id), board.id_at(0));
        // Zero-length timers start but have nothing to arm
        assert!(board.toggle(1).is_none());
        assert!(board.get(1).unwrap().is_running());
    }
}
