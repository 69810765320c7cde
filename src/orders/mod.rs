//! Orders: atomic placement from the cart, role-scoped visibility, and
//! verb-gated mutation.

pub mod guard;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;

pub use guard::ListingScope;
pub use models::{Order, OrderLine, PlacedOrder};
pub use service::place_order;
