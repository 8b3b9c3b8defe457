//! Event handler
//!
//! Translates raw terminal events into messages. No state is mutated here;
//! the model is only read to decide where a key should go (modal first,
//! then the focused panel).

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, FormMessage, ListMessage, ModalMessage};
use crate::model::App;

/// Poll for an event
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Translate an event into a message
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // Resizes redraw automatically on the next frame
        _ => AppMessage::Noop,
    }
}

fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // Only Press events; Release and Repeat cause double input on Windows
    // terminals.
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // An open modal captures all input.
    if app.modal.is_open() {
        return handle_modal_keys(key);
    }

    // Global shortcuts, regardless of focus
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::HELP.matches(&key) {
        return AppMessage::ShowHelp;
    }
    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }
    if key.modifiers.is_empty() && key.code == KeyCode::Tab {
        return AppMessage::ToggleFocus;
    }
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }

    if app.focus.is_form() {
        handle_form_keys(key)
    } else {
        handle_list_keys(key)
    }
}

/// Keys while the list panel has focus
fn handle_list_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::ACTION_ADD.matches(&key) {
        return AppMessage::List(ListMessage::Add);
    }
    if DefaultKeymap::ACTION_EDIT.matches(&key) {
        return AppMessage::List(ListMessage::Edit);
    }
    if DefaultKeymap::ACTION_DELETE.matches(&key) {
        return AppMessage::List(ListMessage::Delete);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::List(ListMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::List(ListMessage::SelectNext),
        KeyCode::Home => AppMessage::List(ListMessage::SelectFirst),
        KeyCode::End => AppMessage::List(ListMessage::SelectLast),
        // Enter edits the selected row
        KeyCode::Enter => AppMessage::List(ListMessage::Edit),
        KeyCode::Delete => AppMessage::List(ListMessage::Delete),
        KeyCode::Char('?') if key.modifiers.is_empty() => AppMessage::ShowHelp,
        _ => AppMessage::Noop,
    }
}

/// Keys while the form panel has focus
fn handle_form_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Down => AppMessage::Form(FormMessage::NextField),
        KeyCode::Up | KeyCode::BackTab => AppMessage::Form(FormMessage::PrevField),
        KeyCode::Enter => AppMessage::Form(FormMessage::Submit),
        KeyCode::Backspace => AppMessage::Form(FormMessage::Backspace),
        KeyCode::Char(ch) if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT => {
            AppMessage::Form(FormMessage::Input(ch))
        }
        _ => AppMessage::Noop,
    }
}

/// Keys while a modal is open
fn handle_modal_keys(key: KeyEvent) -> AppMessage {
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) | (KeyModifiers::NONE, KeyCode::Esc) => {
            AppMessage::Modal(ModalMessage::Close)
        }
        (_, KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right) => {
            AppMessage::Modal(ModalMessage::ToggleFocus)
        }
        (_, KeyCode::Enter) => AppMessage::Modal(ModalMessage::Confirm),
        _ => AppMessage::Noop,
    }
}
