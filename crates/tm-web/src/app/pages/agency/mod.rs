//! Pages for travel agencies managing their packages.

mod create_package;
mod edit_package;
mod view_packages;

pub use create_package::CreatePackagePage;
pub use edit_package::EditPackagePage;
pub use view_packages::ViewPackagesPage;
