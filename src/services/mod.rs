pub mod creation_service;

pub use creation_service::{forward_creation, request_creation};
