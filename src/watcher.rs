//! File watching for the agenda input file.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use notify::{Config, RecommendedWatcher, RecursiveMode, Watcher};
use tracing::{debug, warn};

/// Set up a file watcher that raises `needs_reload` when the agenda changes
pub fn setup_agenda_watcher(
    agenda_path: PathBuf,
    needs_reload: Arc<Mutex<bool>>,
) -> Option<RecommendedWatcher> {
    // Use a shorter poll interval for more responsive updates
    let config = Config::default().with_poll_interval(Duration::from_millis(500));

    // Canonicalize the path for reliable comparison
    let canonical_agenda = agenda_path
        .canonicalize()
        .unwrap_or_else(|_| agenda_path.clone());
    let agenda_filename = agenda_path.file_name().map(|s| s.to_os_string());

    let watcher_result = RecommendedWatcher::new(
        move |res: Result<notify::Event, notify::Error>| {
            if let Ok(event) = res {
                // Skip pure reads, only content or metadata changes matter
                if event.kind.is_access() {
                    return;
                }
                let matches = event.paths.iter().any(|p| {
                    if let Ok(canonical) = p.canonicalize() {
                        if canonical == canonical_agenda {
                            return true;
                        }
                    }
                    // Fall back to filename comparison
                    match (&agenda_filename, p.file_name()) {
                        (Some(expected), Some(name)) => name == expected,
                        _ => false,
                    }
                });

                if matches {
                    if let Ok(mut flag) = needs_reload.lock() {
                        *flag = true;
                    }
                }
            }
        },
        config,
    );

    match watcher_result {
        Ok(mut watcher) => {
            // Watch the parent directory since some editors replace files
            let parent = match agenda_path.parent() {
                Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
                _ => PathBuf::from("."),
            };
            if let Err(e) = watcher.watch(&parent, RecursiveMode::NonRecursive) {
                warn!(error = %e, dir = %parent.display(), "cannot watch agenda directory");
                return None;
            }
            debug!(path = %agenda_path.display(), "watching agenda file");
            Some(watcher)
        }
        Err(e) => {
            warn!(error = %e, "cannot create file watcher");
            None
        }
    }
}
