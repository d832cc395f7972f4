//! # Core Navigation Logic
//!
//! This module contains Rove's browsing logic.
//! It knows nothing about any specific terminal library.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Navigator (state)    │
//!                    │  • Event (input)        │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  I/O only via lister.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                  ┌─────────────┴─────────────┐
//!                  ▼                           ▼
//!           ┌────────────┐              ┌────────────┐
//!           │    TUI     │              │  Listers   │
//!           │  Adapter   │              │ (fs, test) │
//!           │ (ratatui)  │              │            │
//!           └────────────┘              └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `Navigator` struct — all session state in one place
//! - [`action`]: The `Event` enum and `update()`
//! - [`viewport`]: Scroll window over the composed rows
//! - [`entry`], [`lister`]: What a directory contains and how it is read
//! - [`command`]: Command-mode key capture
//! - [`compose`]: Rows and footer text handed to the renderer
//! - [`config`]: Startup settings

pub mod action;
pub mod command;
pub mod compose;
pub mod config;
pub mod entry;
pub mod lister;
pub mod state;
pub mod viewport;
