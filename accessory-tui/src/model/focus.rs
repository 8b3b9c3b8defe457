//! Focus state definition

/// Focused panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// Accessory form (left panel)
    Form,
    /// Accessory list (right panel)
    #[default]
    List,
}

impl FocusPanel {
    /// Switch to the other panel
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Self::Form => Self::List,
            Self::List => Self::Form,
        }
    }

    pub fn is_form(self) -> bool {
        matches!(self, Self::Form)
    }

    pub fn is_list(self) -> bool {
        matches!(self, Self::List)
    }
}
