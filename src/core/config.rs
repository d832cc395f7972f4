//! # Configuration
//!
//! Everything is decided on the command line; there is no config file and
//! no environment lookup. `Config::resolve` collapses the raw CLI values into
//! concrete settings once at startup.

use log::{LevelFilter, SetLoggerError};
use simplelog::{ConfigBuilder, WriteLogger};
use std::fmt;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Config {
    /// Absolute directory the session starts in.
    pub start_dir: PathBuf,
    pub color: bool,
    pub log_file: Option<PathBuf>,
    pub log_level: LevelFilter,
}

#[derive(Debug)]
pub enum ConfigError {
    WorkingDir(io::Error),
    StartDir { path: PathBuf, source: io::Error },
    LogFile { path: PathBuf, source: io::Error },
    Logger(SetLoggerError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::WorkingDir(e) => write!(f, "cannot determine working directory: {e}"),
            ConfigError::StartDir { path, source } => {
                write!(f, "cannot open {}: {source}", path.display())
            }
            ConfigError::LogFile { path, source } => {
                write!(f, "cannot create log file {}: {source}", path.display())
            }
            ConfigError::Logger(e) => write!(f, "cannot install logger: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Resolve CLI values. No path means the process working directory.
    pub fn resolve(
        path: Option<&Path>,
        color: bool,
        log_file: Option<PathBuf>,
        log_level: LevelFilter,
    ) -> Result<Self, ConfigError> {
        let start_dir = match path {
            Some(path) => path.canonicalize().map_err(|source| ConfigError::StartDir {
                path: path.to_path_buf(),
                source,
            })?,
            None => std::env::current_dir().map_err(ConfigError::WorkingDir)?,
        };

        Ok(Self {
            start_dir,
            color,
            log_file,
            log_level,
        })
    }

    /// Install the file logger when `--log-file` was given.
    ///
    /// The terminal belongs to the UI, so logs only ever go to a file.
    pub fn init_logging(&self) -> Result<(), ConfigError> {
        let Some(path) = &self.log_file else {
            return Ok(());
        };

        let log_file = File::create(path).map_err(|source| ConfigError::LogFile {
            path: path.clone(),
            source,
        })?;
        let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
        WriteLogger::init(self.log_level, log_config, log_file).map_err(ConfigError::Logger)
    }
}
