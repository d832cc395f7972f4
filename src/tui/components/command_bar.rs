//! # CommandBar Component
//!
//! The footer line under the listing: `command` followed by whatever command
//! mode has captured so far. Always drawn, muted.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Span;

use crate::tui::component::Component;

pub struct CommandBar {
    pub text: String,
    pub style: Style,
}

impl CommandBar {
    pub fn new(text: String, style: Style) -> Self {
        Self { text, style }
    }
}

impl Component for CommandBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Span::styled(self.text.as_str(), self.style), area);
    }
}
