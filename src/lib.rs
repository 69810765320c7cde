//! Bistro - Restaurant Ordering Backend
//!
//! A REST backend over PostgreSQL: menu and category management, per-user
//! carts, atomic order placement, and role-gated administration.
//!
//! # Modules
//!
//! - [`config`] - YAML application configuration
//! - [`logging`] - tracing subscriber setup
//! - [`db`] - PostgreSQL connection pool and migrations
//! - [`error`] - API error taxonomy
//! - [`auth`] - registration, login, JWT middleware, principal resolution
//! - [`menu`] - categories and menu items
//! - [`groups`] - Manager / Delivery crew membership administration
//! - [`cart`] - per-user cart lines with server-side price normalization
//! - [`orders`] - order placement transaction and visibility/mutation guard
//! - [`gateway`] - axum router assembly and shared state

pub mod auth;
pub mod cart;
pub mod config;
pub mod db;
pub mod error;
pub mod gateway;
pub mod groups;
pub mod logging;
pub mod menu;
pub mod orders;

// Convenient re-exports at crate root
pub use auth::principal::{Principal, Role};
pub use config::AppConfig;
pub use db::Database;
pub use error::ApiError;
pub use gateway::types::ApiResponse;
