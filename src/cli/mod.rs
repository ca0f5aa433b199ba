//! CLI argument parsing for the agenda timer.

mod args;

pub use args::{parse_args, CliConfig, ListFormat, VERSION};
