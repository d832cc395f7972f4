//! # Theme
//!
//! All colors used by the renderer. Built once in `main` and passed down to
//! the components, so nothing reads styling from global state.

use ratatui::style::{Color, Modifier, Style};

use crate::core::compose::Row;

const DIRECTORY_FG: u8 = 33;
const SELECTED_BG: u8 = 237;
const FOOTER_FG: u8 = 241;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub directory: Style,
    pub selected: Style,
    pub footer: Style,
}

impl Theme {
    pub fn new(color: bool) -> Self {
        if color { Self::colored() } else { Self::plain() }
    }

    /// 256-color palette.
    pub fn colored() -> Self {
        Self {
            directory: Style::default().fg(Color::Indexed(DIRECTORY_FG)),
            selected: Style::default().bg(Color::Indexed(SELECTED_BG)),
            footer: Style::default().fg(Color::Indexed(FOOTER_FG)),
        }
    }

    /// Modifiers only, for `--no-color`.
    pub fn plain() -> Self {
        Self {
            directory: Style::default().add_modifier(Modifier::BOLD),
            selected: Style::default().add_modifier(Modifier::REVERSED),
            footer: Style::default().add_modifier(Modifier::DIM),
        }
    }

    /// Directory style first, selection layered on top.
    pub fn row_style(&self, row: &Row) -> Style {
        let mut style = Style::default();
        if row.is_dir {
            style = style.patch(self.directory);
        }
        if row.selected {
            style = style.patch(self.selected);
        }
        style
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::colored()
    }
}
