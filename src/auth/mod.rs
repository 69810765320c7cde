//! Authentication: registration, login, JWT verification and per-request
//! principal resolution.

pub mod handlers;
pub mod middleware;
pub mod principal;
pub mod service;

pub use principal::{DELIVERY_CREW_GROUP, MANAGER_GROUP, Principal, Role};
pub use service::{AuthService, Claims};
