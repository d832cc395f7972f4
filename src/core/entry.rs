//! # Entries
//!
//! One row of the listing. Row 0 is always the synthetic "self/parent" entry:
//! its `name` holds the absolute path of the directory being listed, so the
//! first line of the screen doubles as the location bar.
//!
//! Names are kept as raw `OsString`s so any name the OS reports can be joined
//! back onto the directory; lossy text is only produced for display.
//!
//! ```text
//! [0] /home/user/project   (dir, synthetic: activate → parent)
//! [1] src                  (dir)
//! [2] Cargo.toml           (file)
//! ```

use std::borrow::Cow;
use std::ffi::OsString;
use std::path::Path;

/// A raw child reported by a `DirectoryLister`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub name: OsString,
    pub is_dir: bool,
}

impl Listing {
    pub fn dir(name: impl Into<OsString>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
        }
    }

    pub fn file(name: impl Into<OsString>) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
        }
    }
}

/// A navigable row in the current listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: OsString,
    pub is_dir: bool,
}

impl Entry {
    /// Printable form of `name`; invalid UTF-8 becomes U+FFFD.
    pub fn display_name(&self) -> Cow<'_, str> {
        self.name.to_string_lossy()
    }
}

impl From<Listing> for Entry {
    fn from(listing: Listing) -> Self {
        Self {
            name: listing.name,
            is_dir: listing.is_dir,
        }
    }
}

/// Build the display list for `dir`: the synthetic entry first, then the
/// children exactly as listed (no sorting, no filtering).
pub fn build_entries(dir: &Path, children: Vec<Listing>) -> Vec<Entry> {
    let mut entries = Vec::with_capacity(children.len() + 1);
    entries.push(Entry {
        name: dir.as_os_str().to_os_string(),
        is_dir: true,
    });
    entries.extend(children.into_iter().map(Entry::from));
    entries
}
