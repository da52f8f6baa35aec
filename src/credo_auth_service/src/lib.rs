pub mod auth_service;
pub mod bootstrap;
pub mod telemetry;

pub use auth_service::AuthService;
pub use bootstrap::{configure_postgresql, get_postgres_pool};
