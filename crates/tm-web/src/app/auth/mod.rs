pub mod context;
pub mod guard;
pub mod hooks;
pub mod session;
pub mod store;
