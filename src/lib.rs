//! Customer and order REST API over PostgreSQL.

pub mod config;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::AppConfig;
pub use error::{AppError, ConfigError};
pub use migration::apply_migrations;
pub use routes::{api_routes, app, common_routes};
pub use service::{CustomerService, OrderService};
pub use state::AppState;
pub use store::{ensure_database_exists, CustomerStore, OrderStore, StoreError, Violation};
