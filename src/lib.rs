// src/lib.rs
pub mod catalog;
pub mod errors;
pub mod models;
pub mod resolver;
pub mod services;
pub mod session;
pub mod state;

pub use errors::ArmarioError;
pub use session::{PendingRequest, SessionPhase, Storefront};
