use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use directory_logging::LevelFilter;

#[derive(Debug, Parser)]
#[command(name = "directory")]
#[command(about = "Search and page through a team directory", long_about = None)]
#[command(version)]
pub struct Cli {
    /// JSON document with the team records.
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Records per page.
    #[arg(long)]
    pub page_size: Option<NonZeroUsize>,

    /// RON configuration file.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Stay on the current page after a search if it still exists.
    #[arg(long)]
    pub keep_page: bool,

    /// Also write logs to ./directory.log.
    #[arg(long)]
    pub log_file: bool,

    #[arg(long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}
