//! Named group membership administration.

pub mod handlers;
pub mod repository;

pub use repository::{GroupRepository, UserView};
