//! Accessory form state
//!
//! Holds the draft (free-form text, validated only on submit), which field
//! has the cursor, and whether a save is in flight. `editing` decides
//! whether a submit becomes a create or an update call.

use accessory_core::{Accessory, AccessoryDraft, AccessoryId};

/// Form input fields, in cursor order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Price,
    Link,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Price,
            Self::Price => Self::Link,
            Self::Link => Self::Name,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Self::Name => Self::Link,
            Self::Price => Self::Name,
            Self::Link => Self::Price,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Price => "Price (INR)",
            Self::Link => "Link",
        }
    }
}

/// Accessory form state
#[derive(Debug, Default)]
pub struct FormState {
    pub name: String,
    pub price: String,
    pub link: String,
    /// Field holding the cursor
    pub field: FormField,
    /// `Some` while editing an existing record; selects the update call
    pub editing: Option<AccessoryId>,
    /// Save request in flight; submit is disabled meanwhile
    pub saving: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Snapshot the current text fields as a draft for validation
    pub fn draft(&self) -> AccessoryDraft {
        AccessoryDraft {
            name: self.name.clone(),
            price: self.price.clone(),
            link: self.link.clone(),
        }
    }

    /// Enter edit mode: copy a record's fields into the draft
    pub fn start_edit(&mut self, record: &Accessory) {
        self.name = record.name.clone();
        self.price = price_text(record.price);
        self.link = record.link.clone();
        self.editing = Some(record.id.clone());
        self.field = FormField::Name;
    }

    /// Clear the draft and leave edit mode. The in-flight flag is managed
    /// separately by the update layer.
    pub fn reset(&mut self) {
        self.name.clear();
        self.price.clear();
        self.link.clear();
        self.editing = None;
        self.field = FormField::Name;
    }

    // ---- text input ----

    pub fn input(&mut self, ch: char) {
        self.active_field_mut().push(ch);
    }

    pub fn backspace(&mut self) {
        self.active_field_mut().pop();
    }

    fn active_field_mut(&mut self) -> &mut String {
        match self.field {
            FormField::Name => &mut self.name,
            FormField::Price => &mut self.price,
            FormField::Link => &mut self.link,
        }
    }

    pub fn next_field(&mut self) {
        self.field = self.field.next();
    }

    pub fn previous_field(&mut self) {
        self.field = self.field.previous();
    }
}

/// Render a numeric price as editable text: integral amounts without the
/// trailing `.0`.
fn price_text(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{price:.0}")
    } else {
        price.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> Accessory {
        Accessory {
            id: AccessoryId::Number(1),
            name: "Helmet".to_string(),
            price: 1500.0,
            link: "https://shop.example/helmet".to_string(),
        }
    }

    #[test]
    fn start_edit_copies_fields_and_sets_editing() {
        let mut form = FormState::new();
        form.start_edit(&record());
        assert_eq!(form.name, "Helmet");
        assert_eq!(form.price, "1500");
        assert_eq!(form.link, "https://shop.example/helmet");
        assert_eq!(form.editing, Some(AccessoryId::Number(1)));
    }

    #[test]
    fn fractional_prices_keep_their_decimals() {
        assert_eq!(price_text(1500.5), "1500.5");
        assert_eq!(price_text(300.0), "300");
    }

    #[test]
    fn reset_clears_draft_and_editing() {
        let mut form = FormState::new();
        form.start_edit(&record());
        form.reset();
        assert_eq!(form.draft(), AccessoryDraft::default());
        assert!(!form.is_editing());
        assert_eq!(form.field, FormField::Name);
    }

    #[test]
    fn input_goes_to_the_focused_field() {
        let mut form = FormState::new();
        form.input('H');
        form.next_field();
        form.input('9');
        form.backspace();
        form.input('5');
        assert_eq!(form.name, "H");
        assert_eq!(form.price, "5");
    }
}
