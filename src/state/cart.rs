// src/state/cart.rs
use crate::models::{CartLine, ProductCard};

/// In-memory cart: at most one line per (item, size) pair, insertion order
/// preserved for rendering. Quantities on surviving lines are always >= 1.
#[derive(Debug, Default)]
pub struct CartLedger {
    lines: Vec<CartLine>,
}

impl CartLedger {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, item_id: &str, size: &str) -> Option<usize> {
        self.lines
            .iter()
            .position(|line| line.item_id == item_id && line.size == size)
    }

    /// Merge semantics shared by direct adds and moves from favorites: an
    /// existing (item, size) line gains quantity, otherwise a new quantity-1
    /// line snapshots the given name/price/photo.
    pub fn merge(&mut self, item_id: &str, name: &str, price: f64, size: &str, photo_url: &str) {
        if let Some(i) = self.position(item_id, size) {
            self.lines[i].quantity += 1;
        } else {
            self.lines.push(CartLine {
                item_id: item_id.to_string(),
                name: name.to_string(),
                price,
                size: size.to_string(),
                quantity: 1,
                photo_url: photo_url.to_string(),
            });
        }
    }

    pub fn add(&mut self, card: &ProductCard, size: &str) {
        self.merge(&card.id, &card.name, card.price, size, &card.photo_url);
    }

    /// Silent no-op when no matching line exists.
    pub fn remove(&mut self, item_id: &str, size: &str) {
        self.lines
            .retain(|line| !(line.item_id == item_id && line.size == size));
    }

    /// A quantity below 1 removes the line instead of leaving a zombie.
    /// No upper bound here; stock ceilings are a presentation concern.
    pub fn set_quantity(&mut self, item_id: &str, size: &str, quantity: u32) {
        if quantity < 1 {
            self.remove(item_id, size);
            return;
        }
        if let Some(i) = self.position(item_id, size) {
            self.lines[i].quantity = quantity;
        }
    }

    pub fn line(&self, item_id: &str, size: &str) -> Option<&CartLine> {
        self.position(item_id, size).map(|i| &self.lines[i])
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of quantities across all lines (the navigation badge number).
    pub fn total_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    pub fn total_price(&self) -> f64 {
        self.lines
            .iter()
            .map(|line| line.quantity as f64 * line.price)
            .sum()
    }
}
