//! # TUI Components
//!
//! Stateless, props-based components. Each receives the data it draws as
//! struct fields and renders into the `Rect` it is given:
//!
//! - `EntryList`: the visible rows of the listing
//! - `CommandBar`: the footer line with captured command text
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── entry_list.rs    (Listing rows)
//! └── command_bar.rs   (Footer)
//! ```

pub mod command_bar;
pub mod entry_list;

pub use command_bar::CommandBar;
pub use entry_list::EntryList;
