//! Per-user cart with server-side price normalization.

pub mod handlers;
pub mod models;
pub mod repository;

pub use models::{CartLine, normalized_price};
pub use repository::CartRepository;
