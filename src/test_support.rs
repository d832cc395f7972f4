//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use crate::core::entry::Listing;
use crate::core::lister::{DirectoryLister, ListError};

/// An in-memory directory tree. Paths without a listing fail with `NotFound`.
#[derive(Default)]
pub struct StaticLister {
    dirs: HashMap<PathBuf, Vec<Listing>>,
}

impl StaticLister {
    pub fn with_dir(mut self, path: &str, children: Vec<Listing>) -> Self {
        self.dirs.insert(PathBuf::from(path), children);
        self
    }
}

impl DirectoryLister for StaticLister {
    fn list(&self, path: &Path) -> Result<Vec<Listing>, ListError> {
        self.dirs
            .get(path)
            .cloned()
            .ok_or_else(|| ListError::new(path, io::Error::from(io::ErrorKind::NotFound)))
    }
}

/// `/` → `a/`; `/a` → `b/`, `c`; `/a/b` → `d`.
pub fn sample_lister() -> StaticLister {
    StaticLister::default()
        .with_dir("/", vec![Listing::dir("a")])
        .with_dir("/a", vec![Listing::dir("b"), Listing::file("c")])
        .with_dir("/a/b", vec![Listing::file("d")])
}
