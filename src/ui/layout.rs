//! Top-level frame layout: agenda text, timer list and the status bar

use ratatui::{prelude::*, widgets::Paragraph};

use super::editor::{render_editor, render_open_prompt};
use super::timers::render_timer_list;
use crate::app::App;
use crate::models::Mode;
use crate::theme::{BG_PRIMARY, CYAN_PRIMARY};

/// Draw the whole UI for the current app state
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(
        Paragraph::new("").style(Style::default().bg(BG_PRIMARY)),
        area,
    );

    // Create main layout: content area + bottom bar
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Main content area
            Constraint::Length(1), // Bottom bar (single line)
        ])
        .split(area);

    let content_area = main_layout[0];
    let bottom_bar_area = main_layout[1];

    if app.show_editor {
        // Horizontal split: 40% agenda text, 60% timers
        let panels = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(content_area);
        render_editor(panels[0], app, frame);
        render_timer_list(panels[1], app, frame);
    } else {
        render_timer_list(content_area, app, frame);
    }

    if app.mode == Mode::OpenFile {
        let prompt_area = Rect {
            x: content_area.x,
            y: content_area.bottom().saturating_sub(3),
            width: content_area.width,
            height: 3.min(content_area.height),
        };
        render_open_prompt(prompt_area, app, frame);
    }

    let status = Paragraph::new(status_line(app))
        .style(Style::default().fg(Color::Black).bg(CYAN_PRIMARY));
    frame.render_widget(status, bottom_bar_area);
}

/// Key hints for the current mode, followed by the latest notice
pub fn status_line(app: &App) -> String {
    let hints = match app.mode {
        Mode::Timers => {
            " q: Quit | ↑↓: Select | Space: Start/Stop | r: Reset | e: Edit | u: Update | o: Open | t: Text "
        }
        Mode::Edit => " Esc: Done | Ctrl+S: Apply ",
        Mode::OpenFile => " Enter: Load | Esc: Cancel ",
    };
    match &app.notice {
        Some(notice) => format!("{}| {} ", hints, notice),
        None => hints.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::CliConfig;
    use crate::models::load_agenda_or_example;
    use clap::Parser;
    use ratatui::backend::TestBackend;

    fn example_app() -> App {
        let config = CliConfig::try_parse_from(["agenda-timer"]).unwrap();
        App::new(load_agenda_or_example(None), &config)
    }

    fn rendered(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_status_line_with_notice() {
        let mut app = example_app();
        app.notice = Some("3 timers".to_string());
        assert!(status_line(&app).ends_with("| 3 timers "));
        app.mode = Mode::Edit;
        assert!(status_line(&app).starts_with(" Esc: Done"));
    }

    #[test]
    fn test_draw_shows_timers() {
        let app = example_app();
        let screen = rendered(&app, 120, 20);
        assert!(screen.contains("Opening remarks"));
        assert!(screen.contains("05:00"));
        assert!(screen.contains("15:00"));
        assert!(screen.contains("Inactive"));
    }

    #[test]
    fn test_draw_without_editor_panel() {
        let mut app = example_app();
        app.show_editor = false;
        let screen = rendered(&app, 80, 20);
        assert!(!screen.contains("Agenda Text"));
        assert!(screen.contains("Q&A session"));
    }

    #[test]
    fn test_draw_empty_board() {
        let mut app = example_app();
        app.editor.set_text("");
        app.apply_agenda();
        let screen = rendered(&app, 100, 12);
        assert!(screen.contains("No agenda items."));
    }

    #[test]
    fn test_draw_open_prompt() {
        let mut app = example_app();
        app.mode = Mode::OpenFile;
        app.path_input = "standup.txt".to_string();
        let screen = rendered(&app, 100, 20);
        assert!(screen.contains("Open agenda file"));
        assert!(screen.contains("standup.txt"));
    }

    #[test]
    fn test_draw_tiny_terminal_does_not_panic() {
        let app = example_app();
        rendered(&app, 10, 3);
        rendered(&app, 1, 1);
    }
}
