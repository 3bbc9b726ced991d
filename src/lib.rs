//! vanfleet: REST backend for vans and their engines.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod response;
pub mod routes;
pub mod schema;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::Config;
pub use error::AppError;
pub use routes::api_routes;
pub use schema::ensure_schema;
pub use state::AppState;
