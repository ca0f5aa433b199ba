//! Keyboard handling for each input mode.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::App;
use crate::models::Mode;

/// Route a key press to the handler for the current mode
pub fn handle_key(app: &mut App, key: KeyEvent, now: Instant) {
    // Ignore key release/repeat events reported by some terminals
    if key.kind == KeyEventKind::Release {
        return;
    }
    if is_shortcut(&key) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match app.mode {
        Mode::Timers => handle_timers_key(app, key, now),
        Mode::Edit => handle_edit_key(app, key),
        Mode::OpenFile => handle_open_file_key(app, key),
    }
}

/// Ctrl without Alt. Windows reports AltGr as Ctrl+Alt, and AltGr
/// combinations are ordinary text on many layouts.
fn is_shortcut(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && !key.modifiers.contains(KeyModifiers::ALT)
}

fn handle_timers_key(app: &mut App, key: KeyEvent, now: Instant) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_selected(now),
        KeyCode::Char('r') => app.reset_selected(),
        KeyCode::Char('u') => app.apply_agenda(),
        KeyCode::Char('t') => app.show_editor = !app.show_editor,
        KeyCode::Char('e') => {
            app.show_editor = true;
            app.mode = Mode::Edit;
        }
        KeyCode::Char('o') => {
            app.path_input = app
                .agenda_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default();
            app.mode = Mode::OpenFile;
        }
        _ => {}
    }
}

fn handle_edit_key(app: &mut App, key: KeyEvent) {
    if is_shortcut(&key) {
        if key.code == KeyCode::Char('s') {
            app.mode = Mode::Timers;
            app.apply_agenda();
        }
        return;
    }

    let editor = &mut app.editor;
    match key.code {
        KeyCode::Esc => app.mode = Mode::Timers,
        KeyCode::Enter => editor.newline(),
        KeyCode::Backspace => editor.backspace(),
        KeyCode::Delete => editor.delete(),
        KeyCode::Left => editor.move_left(),
        KeyCode::Right => editor.move_right(),
        KeyCode::Up => editor.move_up(),
        KeyCode::Down => editor.move_down(),
        KeyCode::Home => editor.move_home(),
        KeyCode::End => editor.move_end(),
        KeyCode::Tab => editor.insert_str("  "),
        KeyCode::Char(c) => editor.insert_char(c),
        _ => {}
    }
}

fn handle_open_file_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.mode = Mode::Timers,
        KeyCode::Enter => {
            app.mode = Mode::Timers;
            app.open_file();
        }
        KeyCode::Backspace => {
            app.path_input.pop();
        }
        KeyCode::Char(c) => app.path_input.push(c),
        _ => {}
    }
}
