//! Form panel update logic

use accessory_core::validate_draft;

use crate::message::{Command, FormMessage};
use crate::model::App;

/// Handle a form panel message
pub fn update(app: &mut App, msg: FormMessage) -> Option<Command> {
    match msg {
        FormMessage::NextField => {
            app.form.next_field();
            None
        }
        FormMessage::PrevField => {
            app.form.previous_field();
            None
        }
        FormMessage::Input(ch) => {
            app.form.input(ch);
            None
        }
        FormMessage::Backspace => {
            app.form.backspace();
            None
        }
        FormMessage::Submit => handle_submit(app),
    }
}

/// Validate the draft and turn it into a create or update call.
///
/// Invalid drafts are reported immediately and never reach the network.
fn handle_submit(app: &mut App) -> Option<Command> {
    if app.form.saving {
        return None;
    }

    let payload = match validate_draft(&app.form.draft()) {
        Ok(payload) => payload,
        Err(e) => {
            log::warn!("draft rejected: {e}");
            app.modal.show_error("Invalid accessory", e.to_string());
            return None;
        }
    };

    app.form.saving = true;
    app.set_status("Saving...");

    match app.form.editing.clone() {
        Some(id) => Some(Command::UpdateAccessory(id, payload)),
        None => Some(Command::CreateAccessory(payload)),
    }
}
