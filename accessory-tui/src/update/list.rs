//! List panel update logic

use crate::message::{Command, ListMessage};
use crate::model::{App, FocusPanel};

/// Handle a list panel message
pub fn update(app: &mut App, msg: ListMessage) -> Option<Command> {
    match msg {
        ListMessage::SelectPrevious => app.accessories.select_previous(),
        ListMessage::SelectNext => app.accessories.select_next(),
        ListMessage::SelectFirst => app.accessories.select_first(),
        ListMessage::SelectLast => app.accessories.select_last(),

        ListMessage::Add => handle_add(app),
        ListMessage::Edit => handle_edit(app),
        ListMessage::Delete => handle_delete(app),
    }
    None
}

fn handle_add(app: &mut App) {
    app.form.reset();
    app.focus = FocusPanel::Form;
    app.set_status("New accessory");
}

fn handle_edit(app: &mut App) {
    if let Some(accessory) = app.accessories.selected_accessory() {
        let name = accessory.name.clone();
        app.form.start_edit(accessory);
        app.focus = FocusPanel::Form;
        app.set_status(format!("Editing \"{name}\""));
    } else {
        app.set_status("No accessory selected");
    }
}

fn handle_delete(app: &mut App) {
    if let Some(accessory) = app.accessories.selected_accessory() {
        app.modal
            .show_confirm_delete(&accessory.name, accessory.id.clone());
    } else {
        app.set_status("No accessory selected");
    }
}
