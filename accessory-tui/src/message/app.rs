//! Main application message enum

use super::{FormMessage, ListMessage, ModalMessage, RemoteMessage};

/// Main application message
#[derive(Debug)]
pub enum AppMessage {
    /// Exit the application
    Quit,
    /// Switch focus between form and list
    ToggleFocus,
    /// User-initiated reload of the list
    Refresh,
    /// Show the help modal
    ShowHelp,
    /// Esc: close a modal, or cancel an edit in progress
    GoBack,
    /// List panel sub-message
    List(ListMessage),
    /// Form panel sub-message
    Form(FormMessage),
    /// Modal sub-message
    Modal(ModalMessage),
    /// Result of a finished backend call
    Remote(RemoteMessage),
    /// No operation; stands in for `Option::None`
    Noop,
}
