// src/state/selection.rs
use std::collections::HashMap;

/// The one size currently chosen per product card. Single-select: picking a
/// size replaces any prior pick for that item.
#[derive(Debug, Default)]
pub struct SelectionState {
    chosen: HashMap<String, String>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, item_id: &str, size: &str) {
        self.chosen.insert(item_id.to_string(), size.to_string());
    }

    pub fn selected(&self, item_id: &str) -> Option<&str> {
        self.chosen.get(item_id).map(String::as_str)
    }

    /// Cleared in bulk when a new outfit arrives or the session resets.
    pub fn clear(&mut self) {
        self.chosen.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.chosen.is_empty()
    }
}
