pub mod api;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod templates;
pub mod utils;

pub use error::ProxyError;
pub use models::{AppState, CreationOutcome, CreationRequest, OsKind};
pub use routes::build_router;
