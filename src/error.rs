//! Application-level error types.
//!
//! Agenda loading has its own `LoadError`, which never escapes the load
//! boundary. What reaches `main` is limited to terminal and output failures.

use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// Terminal setup, drawing, or input failure
    #[error("Terminal error: {0}")]
    Terminal(#[from] io::Error),

    /// Agenda listing could not be encoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
