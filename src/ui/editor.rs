//! Agenda text panel and open-file prompt rendering

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::app::App;
use crate::models::Mode;
use crate::theme::{BG_PRIMARY, BORDER_SUBTLE, CYAN_PRIMARY, TEXT_MUTED, TEXT_PRIMARY};

/// Render the agenda text editor; places the cursor while editing
pub fn render_editor(area: Rect, app: &App, frame: &mut Frame) {
    let editing = app.mode == Mode::Edit;
    let (title, border_color) = if editing {
        (" Agenda Text (editing, Ctrl+S apply, Esc done) ", CYAN_PRIMARY)
    } else {
        (" Agenda Text ", BORDER_SUBTLE)
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);

    let (row, col) = app.editor.cursor();
    // Keep the cursor row on screen
    let scroll_y = (row as u16).saturating_sub(inner.height.saturating_sub(1));
    let scroll_x = (col as u16).saturating_sub(inner.width.saturating_sub(1));

    let lines: Vec<Line> = app
        .editor
        .lines()
        .iter()
        .map(|l| {
            let color = if l.trim_start().starts_with('#') {
                TEXT_MUTED
            } else {
                TEXT_PRIMARY
            };
            Line::from(Span::styled(l.clone(), Style::default().fg(color)))
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((scroll_y, scroll_x));
    frame.render_widget(paragraph, area);

    if editing {
        frame.set_cursor_position((
            inner.x + (col as u16).saturating_sub(scroll_x),
            inner.y + (row as u16).saturating_sub(scroll_y),
        ));
    }
}

/// Render the single-line path prompt over `area`
pub fn render_open_prompt(area: Rect, app: &App, frame: &mut Frame) {
    let block = Block::default()
        .title(" Open agenda file (Enter load, Esc cancel) ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(CYAN_PRIMARY))
        .style(Style::default().bg(BG_PRIMARY));
    let inner = block.inner(area);

    let prompt = Paragraph::new(Span::styled(
        app.path_input.clone(),
        Style::default().fg(TEXT_PRIMARY),
    ))
    .block(block);

    frame.render_widget(Clear, area);
    frame.render_widget(prompt, area);

    let typed = app.path_input.chars().count() as u16;
    frame.set_cursor_position((
        inner.x + typed.min(inner.width.saturating_sub(1)),
        inner.y,
    ));
}
