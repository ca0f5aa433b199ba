//! Countdown timers and the tick source that drives them.
//!
//! - `countdown`: per-item state machine and urgency derivation
//! - `board`: the timers built from one parse, with in-place reconciliation
//! - `ticker`: one-second callback scheduling owned by the host loop

mod board;
mod countdown;
mod ticker;

pub use board::Board;
pub use countdown::CountdownTimer;
pub use ticker::Ticker;
