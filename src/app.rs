//! Application state and core logic for the agenda timer TUI.
//!
//! This module contains the `App` struct which owns the timer board, the
//! tick source, the agenda editor and the navigation/view state.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use notify::RecommendedWatcher;
use tracing::{debug, info, warn};

use crate::cli::CliConfig;
use crate::editor::AgendaEditor;
use crate::models::{load_agenda_file, parse, AgendaSource, LoadError, LoadedAgenda, Mode};
use crate::timer::{Board, Ticker};
use crate::watcher::setup_agenda_watcher;

/// How often the expired-timer pulse flips
const ANIMATION_INTERVAL: Duration = Duration::from_millis(500);

/// Upper bound on how long the event loop waits for input
const MAX_POLL: Duration = Duration::from_millis(100);

/// Application state
pub struct App {
    pub mode: Mode,
    pub board: Board,
    pub ticker: Ticker,
    pub editor: AgendaEditor,
    // Path typed into the open-file prompt
    pub path_input: String,
    // File the current agenda came from, if any
    pub agenda_path: Option<PathBuf>,
    pub agenda_needs_reload: Arc<Mutex<bool>>,
    // Follow the agenda file on disk
    pub watch: bool,
    // Watcher for `agenda_path`, replaced when another file is opened
    pub watcher: Option<RecommendedWatcher>,
    reload_deferred: bool,
    // Re-parse keeps unchanged timers instead of rebuilding
    pub keep_running: bool,
    pub selected: usize,
    pub show_editor: bool,
    // Latest message for the status bar
    pub notice: Option<String>,
    // Animation state
    pub animation_tick: u64,
    pub last_animation_update: Instant,
    pub should_quit: bool,
}

impl App {
    pub fn new(loaded: LoadedAgenda, config: &CliConfig) -> Self {
        let agenda_path = match loaded.source {
            AgendaSource::File(path) => Some(path),
            AgendaSource::Example => None,
        };
        let board = Board::from_entries(parse(&loaded.text));
        info!(timers = board.len(), "agenda parsed");

        Self {
            mode: Mode::Timers,
            board,
            ticker: Ticker::new(),
            editor: AgendaEditor::new(&loaded.text),
            path_input: String::new(),
            agenda_path,
            agenda_needs_reload: Arc::new(Mutex::new(false)),
            watch: config.watch,
            watcher: None,
            reload_deferred: false,
            keep_running: config.keep_running,
            selected: 0,
            show_editor: true,
            notice: loaded.notice,
            animation_tick: 0,
            last_animation_update: Instant::now(),
            should_quit: false,
        }
    }

    /// Re-parse the editor text into timers
    pub fn apply_agenda(&mut self) {
        let entries = parse(&self.editor.text());
        let count = entries.len();
        if self.keep_running {
            let kept = self.board.reconcile(entries);
            self.notice = Some(format!("{} timers ({} kept)", count, kept));
        } else {
            self.board.rebuild(entries);
            self.ticker.clear();
            self.notice = Some(format!("{} timers", count));
        }
        if self.selected >= self.board.len() {
            self.selected = self.board.len().saturating_sub(1);
        }
        info!(timers = count, keep_running = self.keep_running, "agenda applied");
    }

    pub fn toggle_selected(&mut self, now: Instant) {
        if let Some((id, handle)) = self.board.toggle(self.selected) {
            self.ticker.arm(id, handle, now);
        }
        if let Some(timer) = self.board.get(self.selected) {
            debug!(
                item = timer.description(),
                running = timer.is_running(),
                remaining = timer.remaining_secs(),
                total = timer.total_secs(),
                armed = self.ticker.armed_count(),
                "toggled timer"
            );
        }
    }

    pub fn reset_selected(&mut self) {
        self.board.reset(self.selected);
        debug!(index = self.selected, "reset timer");
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.board.len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Deliver due ticks and advance the animation clock
    pub fn on_tick(&mut self, now: Instant) {
        self.ticker.fire_due(now, &mut self.board);
        if now.saturating_duration_since(self.last_animation_update) >= ANIMATION_INTERVAL {
            self.animation_tick = self.animation_tick.wrapping_add(1);
            self.last_animation_update = now;
        }
    }

    /// How long the event loop may block waiting for input
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        match self.ticker.next_due() {
            Some(due) => due.saturating_duration_since(now).min(MAX_POLL),
            None => MAX_POLL,
        }
    }

    /// Load the file named in the open-file prompt into the editor.
    /// On failure the current agenda stays untouched.
    pub fn open_file(&mut self) {
        let path = PathBuf::from(self.path_input.trim());
        if path.as_os_str().is_empty() {
            self.notice = Some("No file name given".to_string());
            return;
        }
        match self.load_into_editor(&path) {
            Ok(()) => {
                self.agenda_path = Some(path);
                self.watch_agenda();
            }
            Err(e) => {
                warn!(error = %e, "open file failed");
                self.notice = Some(format!("Failed to load file: {}", e));
            }
        }
    }

    /// Point the file watcher at the current agenda path. Dropping the old
    /// watcher stops events from the previously opened file.
    pub fn watch_agenda(&mut self) {
        if !self.watch {
            return;
        }
        self.watcher = None;
        let Some(path) = self.agenda_path.clone() else {
            return;
        };
        self.watcher = setup_agenda_watcher(path, self.agenda_needs_reload.clone());
        // Content was just read, a change seen before the switch is stale
        if let Ok(mut flag) = self.agenda_needs_reload.lock() {
            *flag = false;
        }
    }

    /// Replace the editor text with the file's content and re-parse
    fn load_into_editor(&mut self, path: &Path) -> Result<(), LoadError> {
        let text = load_agenda_file(path)?;
        self.editor.set_text(&text);
        self.apply_agenda();
        Ok(())
    }

    /// Reload the agenda file from disk if the watcher flagged a change.
    /// While editing, the flag stays raised until the user leaves the editor.
    pub fn reload_agenda_if_needed(&mut self) {
        if self.mode == Mode::Edit {
            let pending = self.agenda_needs_reload.lock().is_ok_and(|flag| *flag);
            if pending && !self.reload_deferred {
                info!("agenda file changed while editing, reload deferred");
                self.notice = Some("Agenda file changed on disk, reloads after editing".to_string());
                self.reload_deferred = true;
            }
            return;
        }
        self.reload_deferred = false;

        let needs_reload = {
            let Ok(mut flag) = self.agenda_needs_reload.lock() else {
                return;
            };
            std::mem::take(&mut *flag)
        };

        if !needs_reload {
            return;
        }
        let Some(path) = self.agenda_path.clone() else {
            return;
        };
        info!(path = %path.display(), "agenda file changed, reloading");
        if let Err(e) = self.load_into_editor(&path) {
            warn!(error = %e, "reload failed");
            self.notice = Some(format!("Reload failed: {}", e));
        }
    }
}
