//! # EntryList Component
//!
//! Draws the rows currently inside the viewport, one line per entry, styled
//! through the `Theme`. Rows arrive pre-padded to the viewport width, so the
//! selection background covers the whole line.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::core::compose::Row;
use crate::tui::component::Component;
use crate::tui::theme::Theme;

pub struct EntryList<'a> {
    /// Visible slice of the composed rows
    pub rows: &'a [Row],
    pub theme: &'a Theme,
}

impl<'a> EntryList<'a> {
    pub fn new(rows: &'a [Row], theme: &'a Theme) -> Self {
        Self { rows, theme }
    }
}

impl<'a> Component for EntryList<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = self
            .rows
            .iter()
            .map(|row| Line::styled(row.text.as_str(), self.theme.row_style(row)))
            .collect();
        frame.render_widget(Paragraph::new(lines), area);
    }
}
