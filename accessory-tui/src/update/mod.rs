//! Update layer: state transitions
//!
//! The only place that mutates the model. Every message maps to a state
//! change; transitions that need remote work return a `Command` for the
//! main loop to dispatch instead of performing IO themselves, which keeps
//! this layer synchronous and testable.

mod form;
mod list;
mod modal;
mod remote;

use crate::message::{AppMessage, Command};
use crate::model::App;

/// Handle an application message and update the state.
///
/// Returns the remote call the backend should run, if any.
pub fn update(app: &mut App, msg: AppMessage) -> Option<Command> {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
            None
        }

        AppMessage::ToggleFocus => {
            if !app.modal.is_open() {
                app.focus = app.focus.toggle();
            }
            None
        }

        AppMessage::Refresh => {
            // Manual, user-initiated reload; failures never retry on their
            // own.
            if app.accessories.loading {
                return None;
            }
            app.accessories.loading = true;
            app.accessories.error = None;
            app.set_status("Refreshing...");
            Some(Command::LoadAccessories)
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
            None
        }

        AppMessage::GoBack => {
            if app.modal.is_open() {
                app.modal.close();
                app.clear_status();
            } else if app.form.is_editing() {
                // Cancel the edit without a remote call
                app.form.reset();
                app.clear_status();
            }
            None
        }

        AppMessage::List(list_msg) => list::update(app, list_msg),
        AppMessage::Form(form_msg) => form::update(app, form_msg),
        AppMessage::Modal(modal_msg) => modal::update(app, modal_msg),
        AppMessage::Remote(remote_msg) => remote::update(app, remote_msg),

        AppMessage::Noop => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{FormMessage, ListMessage, ModalMessage, RemoteMessage};
    use crate::model::state::Modal;
    use accessory_core::{Accessory, AccessoryId, CoreError};

    fn record(id: i64, name: &str, price: f64) -> Accessory {
        Accessory {
            id: AccessoryId::Number(id),
            name: name.to_string(),
            price,
            link: String::new(),
        }
    }

    fn network_error() -> CoreError {
        CoreError::Network("connection refused".to_string())
    }

    // ---- create flow ----

    #[test]
    fn valid_submit_without_editing_requests_a_create() {
        let mut app = App::new();
        app.form.name = "Helmet".to_string();
        app.form.price = "1500".to_string();

        let cmd = update(&mut app, AppMessage::Form(FormMessage::Submit));

        match cmd {
            Some(Command::CreateAccessory(payload)) => {
                assert_eq!(payload.name, "Helmet");
                assert!((payload.price - 1500.0).abs() < f64::EPSILON);
            }
            other => panic!("expected create command, got {other:?}"),
        }
        assert!(app.form.saving);
    }

    #[test]
    fn create_success_appends_the_server_record_and_clears_the_draft() {
        let mut app = App::new();
        app.form.name = "Helmet".to_string();
        app.form.price = "1500".to_string();
        update(&mut app, AppMessage::Form(FormMessage::Submit));

        let created = record(1, "Helmet", 1500.0);
        let cmd = update(
            &mut app,
            AppMessage::Remote(RemoteMessage::Created(Ok(created.clone()))),
        );

        assert!(cmd.is_none());
        assert_eq!(app.accessories.items, vec![created]);
        assert!(app.form.name.is_empty());
        assert!(app.form.price.is_empty());
        assert!(!app.form.saving);
    }

    #[test]
    fn invalid_draft_is_rejected_before_any_remote_call() {
        let mut app = App::new();
        app.form.price = "1500".to_string();

        let cmd = update(&mut app, AppMessage::Form(FormMessage::Submit));

        assert!(cmd.is_none());
        assert!(!app.form.saving);
        match &app.modal.active {
            Some(Modal::Error { message, .. }) => {
                assert_eq!(message, "Accessory name is required.");
            }
            other => panic!("expected validation modal, got {other:?}"),
        }
    }

    #[test]
    fn submit_is_ignored_while_a_save_is_in_flight() {
        let mut app = App::new();
        app.form.name = "Helmet".to_string();
        app.form.price = "1500".to_string();
        app.form.saving = true;

        let cmd = update(&mut app, AppMessage::Form(FormMessage::Submit));
        assert!(cmd.is_none());
    }

    // ---- update flow ----

    #[test]
    fn editing_submit_requests_an_update_and_replaces_exactly_one_record() {
        let mut app = App::new();
        app.accessories
            .set_items(vec![record(1, "Helmet", 1500.0), record(2, "Gloves", 300.0)]);
        update(&mut app, AppMessage::List(ListMessage::Edit));
        assert_eq!(app.form.editing, Some(AccessoryId::Number(1)));

        app.form.name = "Helmet Pro".to_string();
        app.form.price = "1800".to_string();
        let cmd = update(&mut app, AppMessage::Form(FormMessage::Submit));
        match cmd {
            Some(Command::UpdateAccessory(id, payload)) => {
                assert_eq!(id, AccessoryId::Number(1));
                assert_eq!(payload.name, "Helmet Pro");
            }
            other => panic!("expected update command, got {other:?}"),
        }

        let updated = record(1, "Helmet Pro", 1800.0);
        update(
            &mut app,
            AppMessage::Remote(RemoteMessage::Updated(Ok(updated.clone()))),
        );
        assert_eq!(app.accessories.items[0], updated);
        assert_eq!(app.accessories.items[1], record(2, "Gloves", 300.0));
        assert!(!app.form.is_editing());
        assert!(!app.form.saving);
    }

    #[test]
    fn cancel_edit_clears_the_draft_without_a_command() {
        let mut app = App::new();
        app.accessories.set_items(vec![record(1, "Helmet", 1500.0)]);
        update(&mut app, AppMessage::List(ListMessage::Edit));

        let cmd = update(&mut app, AppMessage::GoBack);
        assert!(cmd.is_none());
        assert!(!app.form.is_editing());
        assert!(app.form.name.is_empty());
    }

    // ---- delete flow ----

    #[test]
    fn delete_needs_confirmation_before_the_call_goes_out() {
        let mut app = App::new();
        app.accessories
            .set_items(vec![record(1, "a", 1.0), record(2, "b", 2.0)]);

        let cmd = update(&mut app, AppMessage::List(ListMessage::Delete));
        assert!(cmd.is_none());
        assert!(matches!(
            app.modal.active,
            Some(Modal::ConfirmDelete { focus: 0, .. })
        ));

        // Focus moves to Delete, then Enter confirms.
        update(&mut app, AppMessage::Modal(ModalMessage::ToggleFocus));
        let cmd = update(&mut app, AppMessage::Modal(ModalMessage::Confirm));
        assert_eq!(cmd, Some(Command::DeleteAccessory(AccessoryId::Number(1))));

        update(
            &mut app,
            AppMessage::Remote(RemoteMessage::Deleted {
                id: AccessoryId::Number(1),
                result: Ok(()),
            }),
        );
        assert_eq!(app.accessories.items, vec![record(2, "b", 2.0)]);
    }

    #[test]
    fn declined_confirmation_issues_no_call_and_keeps_items() {
        let mut app = App::new();
        app.accessories
            .set_items(vec![record(1, "a", 1.0), record(2, "b", 2.0)]);
        let before = app.accessories.items.clone();

        update(&mut app, AppMessage::List(ListMessage::Delete));
        // Default focus is Cancel; Enter declines.
        let cmd = update(&mut app, AppMessage::Modal(ModalMessage::Confirm));

        assert!(cmd.is_none());
        assert!(!app.modal.is_open());
        assert_eq!(app.accessories.items, before);
    }

    #[test]
    fn deleting_the_record_being_edited_clears_the_form() {
        let mut app = App::new();
        app.accessories.set_items(vec![record(1, "Helmet", 1500.0)]);
        update(&mut app, AppMessage::List(ListMessage::Edit));

        update(
            &mut app,
            AppMessage::Remote(RemoteMessage::Deleted {
                id: AccessoryId::Number(1),
                result: Ok(()),
            }),
        );
        assert!(!app.form.is_editing());
        assert!(app.form.name.is_empty());
    }

    // ---- failure isolation ----

    #[test]
    fn load_failure_sets_a_persistent_error_and_leaves_items_empty() {
        let mut app = App::new();
        app.accessories.loading = true;

        update(
            &mut app,
            AppMessage::Remote(RemoteMessage::Loaded(Err(network_error()))),
        );
        assert!(app.accessories.items.is_empty());
        assert!(!app.accessories.loading);
        assert!(app.accessories.error.is_some());
    }

    #[test]
    fn remote_failures_never_touch_the_cached_items() {
        let mut app = App::new();
        app.accessories
            .set_items(vec![record(1, "a", 1.0), record(2, "b", 2.0)]);
        let before = app.accessories.items.clone();

        app.form.saving = true;
        update(
            &mut app,
            AppMessage::Remote(RemoteMessage::Created(Err(network_error()))),
        );
        assert_eq!(app.accessories.items, before);
        assert!(!app.form.saving);
        assert!(matches!(app.modal.active, Some(Modal::Error { .. })));

        app.form.saving = true;
        update(
            &mut app,
            AppMessage::Remote(RemoteMessage::Updated(Err(network_error()))),
        );
        assert_eq!(app.accessories.items, before);
        assert!(!app.form.saving);

        update(
            &mut app,
            AppMessage::Remote(RemoteMessage::Deleted {
                id: AccessoryId::Number(1),
                result: Err(network_error()),
            }),
        );
        assert_eq!(app.accessories.items, before);
    }
}
