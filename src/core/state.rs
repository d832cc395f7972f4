//! # Navigation State
//!
//! Everything a browsing session knows, in one place.
//!
//! ```text
//! Navigator
//! ├── lister: Box<dyn DirectoryLister>  // filesystem boundary
//! ├── current_dir: PathBuf              // absolute
//! ├── entries: Vec<Entry>               // [0] synthetic, [1..] children
//! ├── cursor: usize                     // 0 <= cursor < entries.len()
//! ├── mode: Mode                        // Browsing | Command(buffer)
//! ├── viewport: Viewport<Row>           // composed rows + scroll offset
//! └── ready: bool                       // first resize seen
//! ```
//!
//! State changes only happen through `update(nav, event)` in action.rs.

use std::path::{Path, PathBuf};

use log::info;

use crate::core::command::CommandLine;
use crate::core::compose::{Row, command_line_text, compose_rows};
use crate::core::entry::{Entry, build_entries};
use crate::core::lister::{DirectoryLister, ListError};
use crate::core::viewport::Viewport;

/// Rows reserved under the listing for the footer.
pub const FOOTER_HEIGHT: u16 = 2;

/// How close (in rows) the cursor may get to a viewport edge before scrolling.
pub const SCROLL_MARGIN: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Browsing,
    Command(CommandLine),
}

pub struct Navigator {
    lister: Box<dyn DirectoryLister>,
    pub(crate) current_dir: PathBuf,
    pub(crate) entries: Vec<Entry>,
    pub(crate) cursor: usize,
    pub(crate) mode: Mode,
    pub(crate) viewport: Viewport<Row>,
    pub(crate) ready: bool,
}

impl Navigator {
    /// Start a session rooted at `start_dir`. Fails if it cannot be listed.
    pub fn new(lister: Box<dyn DirectoryLister>, start_dir: PathBuf) -> Result<Self, ListError> {
        let children = lister.list(&start_dir)?;
        let entries = build_entries(&start_dir, children);
        info!("Browsing {} ({} entries)", start_dir.display(), entries.len());

        let mut nav = Self {
            lister,
            current_dir: start_dir,
            entries,
            cursor: 0,
            mode: Mode::Browsing,
            viewport: Viewport::default(),
            ready: false,
        };
        nav.recompose();
        Ok(nav)
    }

    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selected(&self) -> &Entry {
        &self.entries[self.cursor]
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn is_command_mode(&self) -> bool {
        matches!(self.mode, Mode::Command(_))
    }

    /// Captured command text; empty while browsing.
    pub fn command_buffer(&self) -> &str {
        match &self.mode {
            Mode::Command(line) => line.as_str(),
            Mode::Browsing => "",
        }
    }

    pub fn footer_text(&self) -> String {
        command_line_text(self.command_buffer())
    }

    pub fn viewport(&self) -> &Viewport<Row> {
        &self.viewport
    }

    /// True once the terminal size is known; nothing is drawn before that.
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// List `dir` and, only if that succeeds, make it the current directory.
    pub(crate) fn enter(&mut self, dir: PathBuf) -> Result<(), ListError> {
        let children = self.lister.list(&dir)?;
        self.entries = build_entries(&dir, children);
        self.current_dir = dir;
        self.cursor = 0;
        info!(
            "Browsing {} ({} entries)",
            self.current_dir.display(),
            self.entries.len()
        );
        Ok(())
    }

    /// Rebuild the viewport content from entries, cursor and width.
    pub(crate) fn recompose(&mut self) {
        let rows = compose_rows(&self.entries, self.cursor, self.viewport.width);
        self.viewport.set_content(rows);
    }
}
