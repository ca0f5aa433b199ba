//! Tracing setup. The terminal belongs to the UI, so logs go to a file.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::cli::CliConfig;

/// Install the global subscriber writing to the configured log file.
///
/// Returns the log path in use, or `None` when logging is disabled because
/// the file couldn't be opened. Never fails the application.
pub fn init_logging(config: &CliConfig) -> Option<PathBuf> {
    let path = config.log_path()?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("agenda_timer={}", config.log_level())));

    match open_log_file(&path) {
        Ok(file) => {
            let installed = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init();
            match installed {
                Ok(()) => Some(path),
                Err(e) => {
                    eprintln!("Warning: logging disabled: {}", e);
                    None
                }
            }
        }
        Err(e) => {
            eprintln!("Warning: cannot open log file {}: {}", path.display(), e);
            None
        }
    }
}

fn open_log_file(path: &Path) -> std::io::Result<fs::File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_log_file_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("agenda-timer.log");
        open_log_file(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_open_log_file_appends() {
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("agenda-timer.log");
        writeln!(open_log_file(&path).unwrap(), "first").unwrap();
        writeln!(open_log_file(&path).unwrap(), "second").unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "first\nsecond\n");
    }
}
