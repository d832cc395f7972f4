use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::state::Navigator;
use crate::tui::component::Component;
use crate::tui::components::{CommandBar, EntryList};
use crate::tui::theme::Theme;

/// Listing on top, footer line directly below it, remaining rows blank.
pub fn draw_ui(frame: &mut Frame, nav: &Navigator, theme: &Theme) {
    use Constraint::{Length, Min};
    let viewport = nav.viewport();
    let layout = Layout::vertical([Length(viewport.height), Length(1), Min(0)]);
    let [list_area, footer_area, _] = layout.areas(frame.area());

    EntryList::new(viewport.visible(), theme).render(frame, list_area);
    CommandBar::new(nav.footer_text(), theme.footer).render(frame, footer_area);
}
