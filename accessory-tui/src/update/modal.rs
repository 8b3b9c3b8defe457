//! Modal update logic

use crate::message::{Command, ModalMessage};
use crate::model::state::Modal;
use crate::model::App;

/// Handle a modal message
pub fn update(app: &mut App, msg: ModalMessage) -> Option<Command> {
    match app.modal.active {
        Some(Modal::ConfirmDelete { .. }) => handle_confirm_delete(app, msg),
        Some(Modal::Error { .. } | Modal::Help) => {
            handle_simple_modal(app, msg);
            None
        }
        None => None,
    }
}

fn handle_confirm_delete(app: &mut App, msg: ModalMessage) -> Option<Command> {
    let Some(Modal::ConfirmDelete {
        ref name,
        ref id,
        ref mut focus,
    }) = app.modal.active
    else {
        return None;
    };

    match msg {
        ModalMessage::Close => {
            app.modal.close();
            app.clear_status();
            None
        }

        ModalMessage::ToggleFocus => {
            *focus = usize::from(*focus == 0);
            None
        }

        ModalMessage::Confirm => {
            if *focus == 1 {
                let name = name.clone();
                let id = id.clone();
                app.modal.close();
                app.set_status(format!("Deleting \"{name}\"..."));
                Some(Command::DeleteAccessory(id))
            } else {
                // Declined: no call goes out
                app.modal.close();
                app.clear_status();
                None
            }
        }
    }
}

/// Help and error modals only close
fn handle_simple_modal(app: &mut App, msg: ModalMessage) {
    match msg {
        ModalMessage::Close | ModalMessage::Confirm => {
            app.modal.close();
        }
        ModalMessage::ToggleFocus => {}
    }
}
