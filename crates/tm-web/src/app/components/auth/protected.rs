use dioxus::prelude::*;
use tm_types::auth::Role;

use crate::app::auth::hooks::use_auth;

/// Role-conditional rendering inside a page.
///
/// Shows children only if the signed-in user holds one of `roles`, otherwise
/// the fallback (or nothing). With no roles given, any signed-in user passes.
///
/// ```text
/// rsx! {
///     Protected { roles: vec![Role::Traveller],
///         Link { to: Routes::BookPackagePage { id }, "Book now" }
///     }
/// }
/// ```
#[component]
pub fn Protected(
    #[props(default)] roles: Vec<Role>,

    /// Content to show when the user is not allowed
    fallback: Option<Element>,

    children: Element,
) -> Element {
    let auth = use_auth();

    let is_authorized = match &auth.read().user {
        Some(user) => roles.is_empty() || user.has_any_role(&roles),
        None => false,
    };

    rsx! {
        if is_authorized {
            {children}
        } else if let Some(fallback_element) = fallback {
            {fallback_element}
        }
    }
}
