//! Travel management web entrypoint and common exports.
//!
//! This crate hosts the Dioxus-based browser client. All data lives behind the
//! remote travel management API; the client only keeps the signed-in identity.

pub mod app;
pub mod app_root;
pub mod error;

pub use app::{components, config::ClientConfig, pages, routes::Routes};
pub use error::ApiError;
