//! Agenda Timer - per-item countdowns for a meeting agenda in the terminal.

mod app;
mod cli;
mod editor;
mod error;
mod input;
mod logging;
mod models;
mod theme;
mod timer;
mod ui;
mod utils;
mod watcher;

use std::io::{self, stdout};
use std::process::ExitCode;
use std::time::Instant;

use crossterm::{
    event::{self, DisableBracketedPaste, EnableBracketedPaste, Event},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use tracing::{error, info};

use app::App;
use cli::{parse_args, CliConfig, ListFormat, VERSION};
use error::Result;
use models::{load_agenda_or_example, parse, serialize, Mode};

fn main() -> ExitCode {
    let config = parse_args();

    match run_app(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "agenda-timer failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_app(config: &CliConfig) -> Result<()> {
    let log_path = logging::init_logging(config);
    info!(version = VERSION, log = ?log_path, "starting agenda-timer");

    let loaded = load_agenda_or_example(config.input.as_deref());
    if let Some(notice) = &loaded.notice {
        eprintln!("{}", notice);
    }

    if config.list {
        let entries = parse(&loaded.text);
        match config.format {
            ListFormat::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
            ListFormat::Text => println!("{}", serialize(&entries)),
        }
        return Ok(());
    }

    let mut app = App::new(loaded, config);

    app.watch_agenda();

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(EnableBracketedPaste)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    // Run the app
    let result = run(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(DisableBracketedPaste)?;
    stdout().execute(LeaveAlternateScreen)?;

    info!("agenda-timer exited");
    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while !app.should_quit {
        app.reload_agenda_if_needed();
        app.on_tick(Instant::now());

        terminal.draw(|frame| ui::draw(frame, app))?;

        // Handle input, waking in time for the next due tick
        if event::poll(app.poll_timeout(Instant::now()))? {
            match event::read()? {
                Event::Key(key) => input::handle_key(app, key, Instant::now()),
                Event::Paste(text) if app.mode == Mode::Edit => {
                    app.editor.insert_str(&text)
                }
                _ => {}
            }
        }
    }

    Ok(())
}
