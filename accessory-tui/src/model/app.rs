//! Main application state

use super::state::{AccessoriesState, FormState, ModalState};
use super::FocusPanel;

/// Main application state
pub struct App {
    /// Whether the application should exit
    pub should_quit: bool,

    /// Currently focused panel
    pub focus: FocusPanel,

    /// Status bar message
    pub status_message: Option<String>,

    /// Accessory list state (items, selection, loading, load error)
    pub accessories: AccessoriesState,

    /// Form state (draft, editing id, saving flag)
    pub form: FormState,

    /// Modal state
    pub modal: ModalState,
}

impl App {
    /// Create a fresh application state
    pub fn new() -> Self {
        Self {
            should_quit: false,
            focus: FocusPanel::default(),
            status_message: None,
            accessories: AccessoriesState::new(),
            form: FormState::new(),
            modal: ModalState::new(),
        }
    }

    /// Set the status bar message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status bar message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
