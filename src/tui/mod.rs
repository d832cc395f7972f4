//! # TUI Adapter
//!
//! The ratatui-specific layer. Owns the terminal, decodes crossterm events
//! into core `Event` values, and draws the `Navigator` after every update.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! Strictly one event at a time: block on the next terminal event, apply it
//! with `update()`, redraw. Nothing runs in the background, so there is no
//! polling timeout and no redraw without input.
//!
//! crossterm does not report the initial window size, so the loop feeds a
//! synthetic `Resize` from the current terminal size before the first draw.

mod component;
mod components;
mod event;
mod theme;
mod ui;

pub use theme::Theme;

use log::{error, info};
use ratatui::DefaultTerminal;

use crate::RoveError;
use crate::core::action::{Effect, Event, update};
use crate::core::state::Navigator;
use crate::tui::event::read_event;

/// Run a session until the user quits or a listing fails.
///
/// The alternate screen is always left before returning, so the caller can
/// report errors on the normal screen.
pub fn run(mut nav: Navigator, theme: Theme) -> Result<(), RoveError> {
    let mut terminal = ratatui::init();
    info!("Entered alternate screen");

    let outcome = event_loop(&mut terminal, &mut nav, &theme);

    ratatui::restore();
    info!("Restored terminal");
    if let Err(e) = &outcome {
        error!("Session ended with error: {}", e);
    }
    outcome
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    nav: &mut Navigator,
    theme: &Theme,
) -> Result<(), RoveError> {
    let size = terminal.size()?;
    update(
        nav,
        Event::Resize {
            width: size.width,
            height: size.height,
        },
    )?;

    loop {
        if nav.is_ready() {
            terminal.draw(|f| ui::draw_ui(f, nav, theme))?;
        }

        let Some(event) = read_event()? else {
            continue;
        };

        if update(nav, event)? == Effect::Quit {
            info!("Quitting from {}", nav.current_dir().display());
            return Ok(());
        }
    }
}
