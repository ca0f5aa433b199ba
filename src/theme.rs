//! Theme module for agenda-timer
//!
//! This module provides a centralized color palette and the mapping from
//! timer urgency to colors. The timer core only reports an `Urgency`; what
//! it looks like is decided here.

use ratatui::style::{Color, Modifier, Style};

use crate::models::Urgency;

// ============================================================================
// Background Colors - Deep Space Palette
// ============================================================================

/// Primary background color - deepest space black (#0a0e14)
pub const BG_PRIMARY: Color = Color::Rgb(10, 14, 20);

/// Secondary background color - slightly lighter (#12161c)
pub const BG_SECONDARY: Color = Color::Rgb(18, 22, 28);

/// Tertiary background color - for highlighted areas (#1a1f26)
pub const BG_TERTIARY: Color = Color::Rgb(26, 31, 38);

/// Subtle border color (#1e2530)
pub const BORDER_SUBTLE: Color = Color::Rgb(30, 37, 48);

// ============================================================================
// Accent Colors - Cyan/Teal Primary
// ============================================================================

/// Primary cyan accent color (#00d4aa)
pub const CYAN_PRIMARY: Color = Color::Rgb(0, 212, 170);

// ============================================================================
// Status Colors
// ============================================================================

/// Green active/running indicator (#22c55e)
pub const GREEN_ACTIVE: Color = Color::Rgb(34, 197, 94);

/// Amber warning color (#fbbf24)
pub const AMBER_WARNING: Color = Color::Rgb(251, 191, 36);

/// Red error color (#f87171)
pub const RED_ERROR: Color = Color::Rgb(248, 113, 113);

/// Deep red for the off beat of the expired pulse (#991b1b)
pub const RED_DEEP: Color = Color::Rgb(153, 27, 27);

// ============================================================================
// Text Colors
// ============================================================================

/// Primary text color - bright white (#e2e8f0)
pub const TEXT_PRIMARY: Color = Color::Rgb(226, 232, 240);

/// Secondary text color - muted gray (#94a3b8)
pub const TEXT_SECONDARY: Color = Color::Rgb(148, 163, 184);

/// Muted text color - for labels and hints (#64748b)
pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139);

/// Alternate between two colors on each animation tick
pub fn pulse_color(tick: u64, on: Color, off: Color) -> Color {
    if tick % 2 == 0 { on } else { off }
}

/// Accent color for a timer in the given urgency state.
/// Expired timers pulse so they stand out from warnings.
pub fn urgency_color(urgency: Urgency, tick: u64) -> Color {
    match urgency {
        Urgency::Inactive => TEXT_MUTED,
        Urgency::Active => GREEN_ACTIVE,
        Urgency::Warning => AMBER_WARNING,
        Urgency::Danger => pulse_color(tick, RED_ERROR, RED_DEEP),
    }
}

/// Style for the big `MM:SS` readout
pub fn clock_style(urgency: Urgency, tick: u64) -> Style {
    let style = Style::default()
        .fg(urgency_color(urgency, tick))
        .add_modifier(Modifier::BOLD);
    match urgency {
        Urgency::Inactive => style.remove_modifier(Modifier::BOLD),
        _ => style,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urgency_colors_are_distinct() {
        let colors = [
            urgency_color(Urgency::Inactive, 0),
            urgency_color(Urgency::Active, 0),
            urgency_color(Urgency::Warning, 0),
            urgency_color(Urgency::Danger, 0),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_danger_pulses() {
        assert_eq!(urgency_color(Urgency::Danger, 0), RED_ERROR);
        assert_eq!(urgency_color(Urgency::Danger, 1), RED_DEEP);
        assert_eq!(urgency_color(Urgency::Warning, 1), AMBER_WARNING);
    }

    #[test]
    fn test_clock_style_inactive_not_bold() {
        let style = clock_style(Urgency::Inactive, 0);
        assert!(!style.add_modifier.contains(Modifier::BOLD));
        let style = clock_style(Urgency::Active, 0);
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }
}
