//! Utility functions for common operations.

/// Format a number of seconds as MM:SS. Minutes are not capped at two digits.
pub fn format_mm_ss(total_secs: u64) -> String {
    let mins = total_secs / 60;
    let secs = total_secs % 60;
    format!("{:02}:{:02}", mins, secs)
}
