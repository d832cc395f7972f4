//! # Events
//!
//! Everything that can happen to a browsing session becomes an `Event`.
//! The terminal got resized? That's `Event::Resize`. User pressed a key?
//! That's `Event::KeyPress("down")`.
//!
//! `update()` applies one event to the `Navigator` and tells the caller what
//! to do next. The only I/O it performs is the directory listing on activate.
//!
//! ```text
//! Navigator + Event  →  update()  →  Effect (or ListError)
//! ```
//!
//! ## Mode machine
//!
//! ```text
//!            ":"
//! Browsing ───────▶ Command(buffer)
//!    ▲                   │
//!    └───────────────────┘
//!        "esc" / "ctrl+c"
//! ```

use std::path::PathBuf;

use log::{debug, info};

use crate::core::command::{COMMAND_KEY, Capture, CommandLine};
use crate::core::lister::ListError;
use crate::core::state::{FOOTER_HEIGHT, Mode, Navigator, SCROLL_MARGIN};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Resize { width: u16, height: u16 },
    /// A key identified by its canonical token (`"up"`, `"q"`, `"ctrl+c"`, `" "`).
    KeyPress(String),
}

impl Event {
    pub fn key(token: impl Into<String>) -> Self {
        Event::KeyPress(token.into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(nav: &mut Navigator, event: Event) -> Result<Effect, ListError> {
    let effect = match event {
        Event::Resize { width, height } => {
            debug!("Resize {}x{}", width, height);
            nav.viewport
                .set_size(width, height.saturating_sub(FOOTER_HEIGHT));
            nav.ready = true;
            Effect::None
        }
        Event::KeyPress(token) => {
            debug!("Key {:?} ({:?})", token, nav.mode);
            handle_key(nav, &token)?
        }
    };
    nav.recompose();
    Ok(effect)
}

fn handle_key(nav: &mut Navigator, token: &str) -> Result<Effect, ListError> {
    if let Mode::Command(line) = &mut nav.mode {
        if line.capture(token) == Capture::Cancelled {
            nav.mode = Mode::Browsing;
        }
        return Ok(Effect::None);
    }

    match token {
        COMMAND_KEY => nav.mode = Mode::Command(CommandLine::open()),
        "q" | "ctrl+c" | " " => {
            info!("Quit requested ({:?})", token);
            return Ok(Effect::Quit);
        }
        "up" | "k" => move_up(nav),
        "down" | "j" => move_down(nav),
        "enter" => activate(nav)?,
        _ => {}
    }
    Ok(Effect::None)
}

fn move_up(nav: &mut Navigator) {
    if nav.cursor > 0 {
        nav.cursor -= 1;
        if nav.cursor <= nav.viewport.offset() + SCROLL_MARGIN {
            nav.viewport.scroll_up(1);
        }
    } else {
        nav.cursor = nav.entries.len() - 1;
        nav.viewport.jump_to_bottom();
    }
}

fn move_down(nav: &mut Navigator) {
    let last = nav.entries.len() - 1;
    if nav.cursor < last {
        nav.cursor += 1;
        let bottom_edge = nav.viewport.offset() + nav.viewport.height as usize;
        if nav.cursor >= bottom_edge.saturating_sub(SCROLL_MARGIN) {
            nav.viewport.scroll_down(1);
        }
    } else {
        nav.cursor = 0;
        nav.viewport.jump_to_top();
    }
}

/// Enter the selected directory, or go up when the synthetic row is selected.
/// Files are ignored. The viewport offset is left alone.
fn activate(nav: &mut Navigator) -> Result<(), ListError> {
    if !nav.selected().is_dir {
        return Ok(());
    }

    let target = if nav.cursor == 0 {
        parent_of(&nav.current_dir)
    } else {
        nav.current_dir.join(&nav.selected().name)
    };
    nav.enter(target)
}

/// Lexical parent; the root is its own parent.
fn parent_of(dir: &std::path::Path) -> PathBuf {
    dir.parent()
        .map(PathBuf::from)
        .unwrap_or_else(|| dir.to_path_buf())
}
