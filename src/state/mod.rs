// src/state/mod.rs
pub mod cart;
pub mod favorites;
pub mod feedback;
pub mod filters;
pub mod selection;

pub use cart::CartLedger;
pub use favorites::FavoritesLedger;
pub use feedback::Feedback;
pub use filters::FilterState;
pub use selection::SelectionState;
