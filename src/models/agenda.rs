//! Agenda text parsing
//!
//! Turns free-form agenda text into an ordered list of entries. The grammar
//! is line based: `Description - 10 minutes`, with `#` comments allowed on
//! their own line or trailing an item. Lines that don't fit the grammar are
//! treated as notes and dropped, so parsing never fails.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Agenda used when no input is supplied or the input can't be read
pub const EXAMPLE_AGENDA: &str = "# Example agenda with comments
Opening remarks - 5 minutes  # Introduction and welcome
Project update - 15 minutes  # Include demo
# Break time if needed
Q&A session - 10 minutes     # Open discussion";

/// `<description> - <digits> [minute|minutes|min|m]`, matched from the start
/// of the line. Anything after the unit is ignored.
static ITEM_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.*?)\s*-\s*([0-9]+)\s*(?:minutes|minute|min|m)?")
        .expect("agenda item pattern is valid")
});

/// A single agenda item
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct AgendaEntry {
    pub description: String,
    pub duration_secs: u64,
}

impl AgendaEntry {
    #[cfg(test)]
    pub fn new(description: &str, minutes: u64) -> Self {
        Self {
            description: description.to_string(),
            duration_secs: minutes * 60,
        }
    }

    pub fn minutes(&self) -> u64 {
        self.duration_secs / 60
    }
}

/// Parse agenda text into entries, in input order
pub fn parse(text: &str) -> Vec<AgendaEntry> {
    text.lines().filter_map(parse_line).collect()
}

/// Parse a single line, returning `None` for blanks, comments and notes
pub fn parse_line(line: &str) -> Option<AgendaEntry> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }

    // Drop inline comment
    let content = trimmed
        .split_once('#')
        .map_or(trimmed, |(head, _)| head)
        .trim();
    if content.is_empty() {
        return None;
    }

    let caps = ITEM_PATTERN.captures(content)?;
    let description = caps.get(1)?.as_str().trim();
    if description.is_empty() {
        return None;
    }

    // Digit groups too large for u64 seconds are treated like any other
    // malformed line
    let minutes: u64 = caps.get(2)?.as_str().parse().ok()?;
    let duration_secs = minutes.checked_mul(60)?;

    Some(AgendaEntry {
        description: description.to_string(),
        duration_secs,
    })
}

/// Render entries back into agenda text that `parse` reads identically
pub fn serialize(entries: &[AgendaEntry]) -> String {
    entries
        .iter()
        .map(|e| format!("{} - {} minutes", e.description, e.minutes()))
        .collect::<Vec<_>>()
        .join("\n")
}
