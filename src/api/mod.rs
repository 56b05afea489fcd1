pub mod build;
pub mod client;
pub mod creation;

pub use build::submit_build;
pub use client::{backend_call, set_silent};
pub use creation::{create_instance, ping_backend};
