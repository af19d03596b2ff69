pub mod auth;
pub mod complaint_form;
pub mod fields;
pub mod footer;
pub mod layout;
pub mod modal;
pub mod navbar;
pub mod package_form;
pub mod status;
pub mod toast;

pub use auth::{Protected, RequireRole};
pub use complaint_form::ComplaintForm;
pub use fields::{FieldError, field_error};
pub use footer::Footer;
pub use layout::Layout;
pub use modal::{ConfirmDialog, Modal};
pub use navbar::NavBar;
pub use package_form::PackageFormFields;
pub use status::{ErrorPanel, LoadingPanel, StatusBadge};
pub use toast::{Toast, ToastHandle, ToastMessage, ToastType, use_toast, use_toast_provider};
