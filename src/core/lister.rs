//! # Directory Lister
//!
//! The only filesystem access the core performs: "list the immediate children
//! of a path". Behind a trait so the state machine can be driven by an
//! in-memory tree in tests.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;

use crate::core::entry::Listing;

/// Any failure to enumerate a directory (missing, permission denied, not a directory).
#[derive(Debug)]
pub struct ListError {
    pub path: PathBuf,
    pub source: io::Error,
}

impl ListError {
    pub fn new(path: &Path, source: io::Error) -> Self {
        Self {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot read directory {}: {}", self.path.display(), self.source)
    }
}

impl std::error::Error for ListError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

pub trait DirectoryLister {
    /// Immediate children of `path`, in whatever order the source reports them.
    fn list(&self, path: &Path) -> Result<Vec<Listing>, ListError>;
}

/// Lists the real filesystem.
///
/// Symlinks are reported by their own type, so a link to a directory is a
/// plain (non-enterable) entry. Names are passed through byte for byte.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsLister;

impl DirectoryLister for FsLister {
    fn list(&self, path: &Path) -> Result<Vec<Listing>, ListError> {
        let read_dir = fs::read_dir(path).map_err(|e| ListError::new(path, e))?;

        let mut children = Vec::new();
        for dir_entry in read_dir {
            let dir_entry = dir_entry.map_err(|e| ListError::new(path, e))?;
            let file_type = dir_entry.file_type().map_err(|e| ListError::new(path, e))?;
            children.push(Listing {
                name: dir_entry.file_name(),
                is_dir: file_type.is_dir(),
            });
        }

        debug!("Listed {} ({} children)", path.display(), children.len());
        Ok(children)
    }
}
