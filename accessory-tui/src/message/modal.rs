//! Modal messages

/// Modal message
#[derive(Debug, Clone)]
pub enum ModalMessage {
    /// Close the modal without acting
    Close,
    /// Move focus between the modal's buttons
    ToggleFocus,
    /// Activate the focused button
    Confirm,
}
