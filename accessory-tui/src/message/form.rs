//! Form panel messages

/// Form panel message
#[derive(Debug, Clone)]
pub enum FormMessage {
    /// Move the cursor to the next field
    NextField,
    /// Move the cursor to the previous field
    PrevField,
    /// Type a character into the focused field
    Input(char),
    /// Delete the character before the cursor
    Backspace,
    /// Validate and save the draft
    Submit,
}
