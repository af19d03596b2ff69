//! Calls to the travel management backend, one module per resource.
//!
//! Every function takes the shared [`ApiClient`] from context. Mutations are
//! sent once; reads go through the client's retrying GET.

pub mod auth;
pub mod bookings;
pub mod client;
pub mod complaints;
pub mod destinations;
pub mod hotels;
pub mod packages;
pub mod restaurants;
pub mod search;

pub use client::ApiClient;

use dioxus::prelude::*;

/// Shared API client from context
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}
