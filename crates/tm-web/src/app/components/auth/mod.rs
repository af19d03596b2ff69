// Authentication components

pub mod protected;
pub mod require_role;

pub use protected::Protected;
pub use require_role::RequireRole;
