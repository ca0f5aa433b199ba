//! Agenda loading from disk, with fallback to the built-in example.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use crate::models::EXAMPLE_AGENDA;

/// Failure to read an agenda file
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Error reading file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("File {} is not valid UTF-8: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },
}

/// Where the agenda text came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgendaSource {
    File(PathBuf),
    Example,
}

/// Agenda text ready for parsing, plus any notice for the user
#[derive(Debug, Clone)]
pub struct LoadedAgenda {
    pub text: String,
    pub source: AgendaSource,
    pub notice: Option<String>,
}

impl LoadedAgenda {
    fn example(notice: Option<String>) -> Self {
        Self {
            text: EXAMPLE_AGENDA.to_string(),
            source: AgendaSource::Example,
            notice,
        }
    }
}

/// Read an agenda file as UTF-8 text
pub fn load_agenda_file(path: &Path) -> Result<String, LoadError> {
    let bytes = fs::read(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            LoadError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            LoadError::Io {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    String::from_utf8(bytes).map_err(|e| LoadError::Decode {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load the agenda at `path`, or the example agenda when there is no path,
/// the file can't be read, or it holds nothing but whitespace.
pub fn load_agenda_or_example(path: Option<&Path>) -> LoadedAgenda {
    let Some(path) = path else {
        return LoadedAgenda::example(None);
    };

    match load_agenda_file(path) {
        Ok(text) if text.trim().is_empty() => {
            warn!(path = %path.display(), "agenda file is empty");
            LoadedAgenda::example(Some(format!(
                "Agenda file {} is empty, using example agenda",
                path.display()
            )))
        }
        Ok(text) => {
            info!(path = %path.display(), bytes = text.len(), "loaded agenda file");
            LoadedAgenda {
                text,
                source: AgendaSource::File(path.to_path_buf()),
                notice: None,
            }
        }
        Err(e) => {
            warn!(error = %e, "failed to load agenda file");
            LoadedAgenda::example(Some(format!(
                "Failed to read agenda from {} ({}), using example agenda",
                path.display(),
                e
            )))
        }
    }
}
