//! List panel messages

/// List panel message
#[derive(Debug, Clone)]
pub enum ListMessage {
    // ---- selection ----
    /// Select the previous row
    SelectPrevious,
    /// Select the next row
    SelectNext,
    /// Jump to the first row
    SelectFirst,
    /// Jump to the last row
    SelectLast,

    // ---- CRUD ----
    /// Start a blank draft (create mode)
    Add,
    /// Copy the selected record into the form (edit mode)
    Edit,
    /// Ask for confirmation before deleting the selected record
    Delete,
}
