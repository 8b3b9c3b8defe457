//! Modal/dialog state

use accessory_core::AccessoryId;

/// Active modal
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    /// Blocking yes/no dialog shown before a delete call
    ConfirmDelete {
        name: String,
        id: AccessoryId,
        /// 0 = Cancel, 1 = Delete
        focus: usize,
    },
    /// One-shot notification (validation or remote failure)
    Error { title: String, message: String },
    /// Key reference
    Help,
}

/// Modal state container
#[derive(Debug, Default)]
pub struct ModalState {
    pub active: Option<Modal>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn close(&mut self) {
        self.active = None;
    }

    /// Open the delete confirmation with focus on Cancel
    pub fn show_confirm_delete(&mut self, name: &str, id: AccessoryId) {
        self.active = Some(Modal::ConfirmDelete {
            name: name.to_string(),
            id,
            focus: 0,
        });
    }

    pub fn show_error(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.active = Some(Modal::Error {
            title: title.into(),
            message: message.into(),
        });
    }

    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }
}
