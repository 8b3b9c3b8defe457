//! Accessory list state
//!
//! Locally cached copy of the remote list plus selection and load flags.
//! Reconciliation of remote responses happens through the `apply_*`
//! operations; nothing here talks to the network.

use accessory_core::{subtotal, Accessory, AccessoryId};

/// Accessory list state
#[derive(Debug, Default)]
pub struct AccessoriesState {
    /// Cached records, in the order the server returned them
    pub items: Vec<Accessory>,
    /// Currently selected index
    pub selected: usize,
    /// Initial load in flight
    pub loading: bool,
    /// Persistent load failure message
    pub error: Option<String>,
}

impl AccessoriesState {
    pub fn new() -> Self {
        Self::default()
    }

    // ---- selection ----

    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn select_next(&mut self) {
        if !self.items.is_empty() && self.selected < self.items.len() - 1 {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        if !self.items.is_empty() {
            self.selected = self.items.len() - 1;
        }
    }

    /// Currently selected record, if any
    pub fn selected_accessory(&self) -> Option<&Accessory> {
        self.items.get(self.selected)
    }

    // ---- reconciliation ----

    /// Replace the list wholesale with the server's response
    pub fn set_items(&mut self, items: Vec<Accessory>) {
        self.items = items;
        self.selected = 0;
        self.loading = false;
        self.error = None;
    }

    /// Record the initial load failure; the list stays empty
    pub fn set_load_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.loading = false;
    }

    /// Append a freshly created record and select it
    pub fn apply_created(&mut self, record: Accessory) {
        self.items.push(record);
        self.selected = self.items.len() - 1;
    }

    /// Replace the record with a matching id. A missing id means the list
    /// changed under us; the response is dropped.
    pub fn apply_updated(&mut self, record: Accessory) {
        match self.items.iter_mut().find(|item| item.id == record.id) {
            Some(item) => *item = record,
            None => log::warn!("update response for unknown id {}, ignoring", record.id),
        }
    }

    /// Remove the record with a matching id, keeping the selection in range
    pub fn apply_removed(&mut self, id: &AccessoryId) {
        self.items.retain(|item| &item.id != id);
        if self.selected >= self.items.len() {
            self.selected = self.items.len().saturating_sub(1);
        }
    }

    /// Derived sum of all prices
    pub fn subtotal(&self) -> f64 {
        subtotal(&self.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, name: &str, price: f64) -> Accessory {
        Accessory {
            id: AccessoryId::Number(id),
            name: name.to_string(),
            price,
            link: String::new(),
        }
    }

    #[test]
    fn set_items_resets_selection_and_flags() {
        let mut state = AccessoriesState::new();
        state.loading = true;
        state.selected = 5;
        state.set_items(vec![record(1, "Helmet", 1500.0)]);
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.selected, 0);
        assert!(!state.loading);
        assert!(state.error.is_none());
    }

    #[test]
    fn load_error_leaves_items_empty() {
        let mut state = AccessoriesState::new();
        state.loading = true;
        state.set_load_error("Failed to load accessories");
        assert!(state.items.is_empty());
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("Failed to load accessories"));
    }

    #[test]
    fn apply_updated_replaces_only_the_matching_record() {
        let mut state = AccessoriesState::new();
        state.set_items(vec![record(1, "Helmet", 1500.0), record(2, "Gloves", 300.0)]);
        state.apply_updated(record(1, "Helmet Pro", 1800.0));
        assert_eq!(state.items[0].name, "Helmet Pro");
        assert!((state.items[0].price - 1800.0).abs() < f64::EPSILON);
        assert_eq!(state.items[1], record(2, "Gloves", 300.0));
    }

    #[test]
    fn apply_updated_with_unknown_id_changes_nothing() {
        let mut state = AccessoriesState::new();
        state.set_items(vec![record(1, "Helmet", 1500.0)]);
        state.apply_updated(record(9, "Ghost", 1.0));
        assert_eq!(state.items, vec![record(1, "Helmet", 1500.0)]);
    }

    #[test]
    fn apply_removed_drops_the_record_and_clamps_selection() {
        let mut state = AccessoriesState::new();
        state.set_items(vec![record(1, "a", 1.0), record(2, "b", 2.0)]);
        state.select_last();
        state.apply_removed(&AccessoryId::Number(2));
        assert_eq!(state.items, vec![record(1, "a", 1.0)]);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn subtotal_follows_items() {
        let mut state = AccessoriesState::new();
        assert_eq!(state.subtotal(), 0.0);
        state.set_items(vec![record(1, "a", 100.0), record(2, "b", 50.0)]);
        assert!((state.subtotal() - 150.0).abs() < f64::EPSILON);
    }
}
