//! CLI argument parsing and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Output format for `--list`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ListFormat {
    /// JSON array of `{description, duration_secs}`
    #[default]
    Json,
    /// Normalized agenda text, one `Description - N minutes` per line
    Text,
}

/// Configuration from CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "agenda-timer")]
#[command(version, about = "Per-item countdown timers for a meeting agenda")]
#[command(after_help = "Agenda format, one item per line:\n  \
    Opening remarks - 5 minutes   # comments start with '#'\n\n\
    Without --input the built-in example agenda is used.")]
pub struct CliConfig {
    /// Path to the agenda file
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Reload the agenda when the input file changes on disk
    #[arg(short, long, requires = "input")]
    pub watch: bool,

    /// Keep timers of unchanged items running when the agenda is re-parsed
    #[arg(short, long)]
    pub keep_running: bool,

    /// Print the parsed agenda and exit
    #[arg(long)]
    pub list: bool,

    /// Format used by --list
    #[arg(long, value_enum, default_value_t = ListFormat::Json, requires = "list")]
    pub format: ListFormat,

    /// Write logs to this file instead of the cache directory
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliConfig {
    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// Log file location: explicit flag, else `<cache dir>/agenda-timer/agenda-timer.log`
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file.clone().or_else(|| {
            dirs::cache_dir().map(|dir| dir.join("agenda-timer").join("agenda-timer.log"))
        })
    }
}

/// Parse CLI arguments and return configuration
pub fn parse_args() -> CliConfig {
    CliConfig::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        CliConfig::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let config = CliConfig::try_parse_from(["agenda-timer"]).unwrap();
        assert!(config.input.is_none());
        assert!(!config.watch);
        assert!(!config.keep_running);
        assert!(!config.list);
        assert_eq!(config.log_level(), "info");
    }

    #[test]
    fn test_input_flag() {
        let config = CliConfig::try_parse_from(["agenda-timer", "-i", "standup.txt"]).unwrap();
        assert_eq!(config.input, Some(PathBuf::from("standup.txt")));

        let config =
            CliConfig::try_parse_from(["agenda-timer", "--input", "retro.txt", "-w", "-k"]).unwrap();
        assert_eq!(config.input, Some(PathBuf::from("retro.txt")));
        assert!(config.watch);
        assert!(config.keep_running);
    }

    #[test]
    fn test_watch_requires_input() {
        assert!(CliConfig::try_parse_from(["agenda-timer", "--watch"]).is_err());
    }

    #[test]
    fn test_list_format() {
        let config = CliConfig::try_parse_from(["agenda-timer", "--list"]).unwrap();
        assert!(config.list);
        assert_eq!(config.format, ListFormat::Json);

        let config =
            CliConfig::try_parse_from(["agenda-timer", "--list", "--format", "text"]).unwrap();
        assert_eq!(config.format, ListFormat::Text);

        assert!(CliConfig::try_parse_from(["agenda-timer", "--format", "text"]).is_err());
    }

    #[test]
    fn test_verbose_log_level() {
        let config = CliConfig::try_parse_from(["agenda-timer", "-v"]).unwrap();
        assert_eq!(config.log_level(), "debug");
    }

    #[test]
    fn test_explicit_log_path() {
        let config =
            CliConfig::try_parse_from(["agenda-timer", "--log-file", "/tmp/agenda.log"]).unwrap();
        assert_eq!(config.log_path(), Some(PathBuf::from("/tmp/agenda.log")));
    }
}
