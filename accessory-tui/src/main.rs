//! Accessory Manager TUI
//!
//! Elm Architecture (TEA) layout:
//! - **Model**: application state (`model/`)
//! - **Message**: event messages (`message/`)
//! - **Update**: state transitions (`update/`)
//! - **View**: UI rendering (`view/`)
//! - **Event**: input handling (`event/`)
//! - **Backend**: async bridge to `accessory-core` (`backend/`)
//!
//! The main loop draws the current model, polls for terminal input, and
//! drains results coming back from the backend. The update layer is the
//! only place that mutates the model; remote work is expressed as
//! `Command`s which the loop hands to the backend.

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::Result;

use util::{init_terminal, restore_terminal};

fn main() -> Result<()> {
    // Opt-in diagnostics via RUST_LOG; the alternate screen hides stderr
    // until the terminal is restored.
    env_logger::init();

    let config = backend::ApiConfig::load();
    let backend = backend::Backend::new(&config)?;

    let mut terminal = init_terminal()?;
    let mut app = model::App::new();

    let result = app::run(&mut terminal, &mut app, &backend);

    // Restore the terminal whether the loop succeeded or not
    restore_terminal(&mut terminal)?;

    result
}
