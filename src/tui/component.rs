use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components receive everything they draw as props (struct fields) and
/// render into a given `Rect`. They hold no state of their own; scroll
/// position and selection live in the core `Navigator`.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
