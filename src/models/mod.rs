//! Data models for the agenda timer
//!
//! This module contains the core data structures:
//! - Agenda entries and the agenda text parser
//! - Agenda loading with fallback to the example agenda
//! - Enums for state management

pub mod agenda;
pub mod enums;
pub mod source;

// Re-exports for convenient access
pub use agenda::{parse, serialize, AgendaEntry, EXAMPLE_AGENDA};
pub use enums::{Mode, Urgency};
pub use source::{load_agenda_file, load_agenda_or_example, AgendaSource, LoadError, LoadedAgenda};
