//! Application main loop
//!
//! Each iteration:
//! 1. render the UI from the current model
//! 2. drain backend results and reconcile them into the model
//! 3. poll for terminal input (100ms timeout), translate it to a message,
//!    and run the update layer
//!
//! Updates may return a `Command`; the loop dispatches those to the backend,
//! which later answers with a `RemoteMessage` on its channel. Whichever
//! response arrives last wins.

use std::time::Duration;

use anyhow::Result;

use crate::backend::Backend;
use crate::event;
use crate::message::{AppMessage, Command};
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// Run the application main loop.
pub fn run(terminal: &mut Term, app: &mut App, backend: &Backend) -> Result<()> {
    // Initial load: fetch the list once at startup.
    app.accessories.loading = true;
    backend.dispatch(Command::LoadAccessories);

    loop {
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        if app.should_quit {
            break;
        }

        // Reconcile any finished remote calls before blocking on input.
        while let Some(remote) = backend.try_recv() {
            dispatch(app, backend, AppMessage::Remote(remote));
        }

        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            let msg = event::handle_event(event, app);
            dispatch(app, backend, msg);
        }
    }

    Ok(())
}

fn dispatch(app: &mut App, backend: &Backend, msg: AppMessage) {
    if let Some(command) = update::update(app, msg) {
        backend.dispatch(command);
    }
}
