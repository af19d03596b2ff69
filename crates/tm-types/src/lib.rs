//! Shared type definitions for the travel management client
//!
//! This crate contains lightweight wire and domain types used by the web client.
//! It has no browser or UI dependencies so everything here can be unit tested natively.

pub mod auth;
pub mod bookings;
pub mod catalog;
pub mod complaints;
pub mod packages;
pub mod search;
pub mod validation;
