// src/services/mod.rs
pub mod api_client;

pub use api_client::{ApiService, OutfitApi};
