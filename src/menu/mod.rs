//! Menu domain: categories and menu items.

pub mod handlers;
pub mod models;
pub mod repository;

pub use models::{Category, MenuItem};
