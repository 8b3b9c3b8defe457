//! Reconciliation of backend results
//!
//! Merges finished remote calls into the local list. Failures never touch
//! `items`: a failed load leaves the list empty with a persistent error
//! line, failed saves and deletes surface a one-shot notification and keep
//! the cached list exactly as it was.

use accessory_core::CoreError;

use crate::message::{Command, RemoteMessage};
use crate::model::App;

const SAVE_FAILED: &str = "Failed to save accessory. Please try again.";
const DELETE_FAILED: &str = "Failed to delete accessory. Please try again.";

/// Handle a backend result message
pub fn update(app: &mut App, msg: RemoteMessage) -> Option<Command> {
    match msg {
        RemoteMessage::Loaded(Ok(items)) => {
            let count = items.len();
            app.accessories.set_items(items);
            app.set_status(format!("Loaded {count} accessories"));
        }
        RemoteMessage::Loaded(Err(e)) => {
            log_failure("load", &e);
            app.accessories.set_load_error("Failed to load accessories");
            app.clear_status();
        }

        RemoteMessage::Created(Ok(record)) => {
            let name = record.name.clone();
            app.accessories.apply_created(record);
            app.form.reset();
            app.form.saving = false;
            app.set_status(format!("Added \"{name}\""));
        }
        RemoteMessage::Updated(Ok(record)) => {
            let name = record.name.clone();
            app.accessories.apply_updated(record);
            app.form.reset();
            app.form.saving = false;
            app.set_status(format!("Updated \"{name}\""));
        }
        RemoteMessage::Created(Err(e)) | RemoteMessage::Updated(Err(e)) => {
            log_failure("save", &e);
            app.form.saving = false;
            app.modal.show_error("Save failed", SAVE_FAILED);
            app.clear_status();
        }

        RemoteMessage::Deleted { id, result: Ok(()) } => {
            app.accessories.apply_removed(&id);
            if app.form.editing.as_ref() == Some(&id) {
                app.form.reset();
            }
            app.set_status("Accessory deleted");
        }
        RemoteMessage::Deleted { result: Err(e), .. } => {
            log_failure("delete", &e);
            app.modal.show_error("Delete failed", DELETE_FAILED);
            app.clear_status();
        }
    }
    None
}

/// All remote failures look the same to the user; the log keeps the detail.
fn log_failure(operation: &str, error: &CoreError) {
    if error.is_expected() {
        log::warn!("{operation} failed: {error}");
    } else {
        log::error!("{operation} failed: {error}");
    }
}
