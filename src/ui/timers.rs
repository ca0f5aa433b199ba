//! Timer card rendering functions

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Gauge, Paragraph},
};

use super::helpers::{scroll_offset, truncate_text};
use crate::app::App;
use crate::models::Urgency;
use crate::theme::{
    clock_style, urgency_color, BG_SECONDARY, BG_TERTIARY, BORDER_SUBTLE, CYAN_PRIMARY,
    TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY,
};
use crate::timer::CountdownTimer;

/// Rows taken by one card: border + title + clock/gauge + border
pub const CARD_HEIGHT: u16 = 4;

/// Render the list of timer cards, scrolled to keep the selection visible
pub fn render_timer_list(area: Rect, app: &App, frame: &mut Frame) {
    let block = Block::default()
        .title(format!(" Agenda ({}) ", app.board.len()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(BORDER_SUBTLE));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.board.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(Span::styled(
                "No agenda items.",
                Style::default().fg(TEXT_SECONDARY),
            )),
            Line::from(Span::styled(
                "Press 'e' to edit, format: Description - 10 minutes",
                Style::default().fg(TEXT_MUTED),
            )),
        ]);
        frame.render_widget(empty, inner);
        return;
    }

    let capacity = (inner.height / CARD_HEIGHT) as usize;
    let offset = scroll_offset(app.selected, app.board.len(), capacity);

    for (slot, (index, timer)) in app
        .board
        .timers()
        .enumerate()
        .skip(offset)
        .take(capacity)
        .enumerate()
    {
        let card_area = Rect {
            x: inner.x,
            y: inner.y + slot as u16 * CARD_HEIGHT,
            width: inner.width,
            height: CARD_HEIGHT,
        };
        render_timer_card(
            card_area,
            timer,
            index == app.selected,
            app.animation_tick,
            frame,
        );
    }
}

/// Render a single timer card
pub fn render_timer_card(
    area: Rect,
    timer: &CountdownTimer,
    selected: bool,
    tick: u64,
    frame: &mut Frame,
) {
    let urgency = timer.urgency();
    let accent = urgency_color(urgency, tick);
    let (indicator, bg_color) = match urgency {
        Urgency::Inactive => ("○", BG_SECONDARY),
        _ => ("●", BG_TERTIARY),
    };

    // Use highlight border for selected card, normal for others
    let border_color = if selected { CYAN_PRIMARY } else { BORDER_SUBTLE };

    let card_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(bg_color));
    let inner_area = card_block.inner(area);
    frame.render_widget(card_block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(inner_area);

    // Title line: indicator, description, urgency label on the right
    let label = urgency.label();
    let available = (inner_area.width as usize).saturating_sub(label.len() + 4);
    let title = truncate_text(timer.description(), available);
    let title_line = Line::from(vec![
        Span::styled(format!("{} ", indicator), Style::default().fg(accent)),
        Span::styled(
            title,
            Style::default()
                .fg(TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(title_line), rows[0]);
    frame.render_widget(
        Paragraph::new(Span::styled(label, Style::default().fg(accent)))
            .alignment(Alignment::Right),
        rows[0],
    );

    // Clock and elapsed gauge
    let clock = timer.display();
    let clock_width = clock.chars().count() as u16 + 2;
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(clock_width), Constraint::Min(0)])
        .split(rows[1]);

    frame.render_widget(
        Paragraph::new(Span::styled(clock, clock_style(urgency, tick))),
        cols[0],
    );

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(accent).bg(BG_SECONDARY))
        .ratio(timer.elapsed_fraction().clamp(0.0, 1.0))
        .label("");
    frame.render_widget(gauge, cols[1]);
}
