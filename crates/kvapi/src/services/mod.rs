//! Request-scoped services owned by the router state.

pub mod health;
pub mod items;

pub use health::HealthService;
pub use items::ItemService;
