// src/state/favorites.rs
use crate::models::FavoriteLine;

/// Liked items: a presence set over (item, size), no quantities.
#[derive(Debug, Default)]
pub struct FavoritesLedger {
    lines: Vec<FavoriteLine>,
}

impl FavoritesLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Idempotent: returns false and leaves the ledger untouched when the
    /// (item, size) pair is already liked.
    pub fn insert(&mut self, line: FavoriteLine) -> bool {
        if self.is_liked(&line.item_id, &line.size) {
            return false;
        }
        self.lines.push(line);
        true
    }

    /// Silent no-op when no matching line exists.
    pub fn remove(&mut self, item_id: &str, size: &str) {
        self.lines
            .retain(|line| !(line.item_id == item_id && line.size == size));
    }

    /// Exact-match membership check, recomputed per call.
    pub fn is_liked(&self, item_id: &str, size: &str) -> bool {
        self.lines
            .iter()
            .any(|line| line.item_id == item_id && line.size == size)
    }

    pub fn lines(&self) -> &[FavoriteLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
