//! # Rove
//!
//! Terminal directory browser. The binary is a thin shell over this library:
//!
//! - [`core`]: navigation state, events and `update()`, directory listing
//! - [`tui`]: ratatui/crossterm adapter that owns the terminal and draws
//! - [`RoveError`]: every way a session can end with a non-zero status

use std::fmt;
use std::io;

use crate::core::config::ConfigError;
use crate::core::lister::ListError;

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// Anything that ends a session with a non-zero exit status.
#[derive(Debug)]
pub enum RoveError {
    Config(ConfigError),
    List(ListError),
    Terminal(io::Error),
}

impl fmt::Display for RoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoveError::Config(e) => write!(f, "{e}"),
            RoveError::List(e) => write!(f, "{e}"),
            RoveError::Terminal(e) => write!(f, "terminal error: {e}"),
        }
    }
}

impl std::error::Error for RoveError {}

impl From<ConfigError> for RoveError {
    fn from(e: ConfigError) -> Self {
        RoveError::Config(e)
    }
}

impl From<ListError> for RoveError {
    fn from(e: ListError) -> Self {
        RoveError::List(e)
    }
}

impl From<io::Error> for RoveError {
    fn from(e: io::Error) -> Self {
        RoveError::Terminal(e)
    }
}
