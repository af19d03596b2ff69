use dioxus::prelude::*;

use crate::{
    Routes, app::auth::{
        guard::{AccessPolicy, GuardDecision, GuardState, authorize}, hooks::use_auth
    }
};

/// Route guard for role-restricted pages.
///
/// Anonymous visitors are sent to the login page with the requested path as
/// the return target. Signed-in users without an allowed role go to the
/// policy's fallback. The check runs again whenever the identity or the route
/// changes, so signing out while on a protected page leaves it right away.
///
/// ```text
/// rsx! {
///     RequireRole { policy: AccessPolicy::ADMIN_ONLY,
///         Layout { DestinationsTable {} }
///     }
/// }
/// ```
#[component]
pub fn RequireRole(
    /// Allowed roles and the fallback for everyone else
    policy: AccessPolicy,

    /// Page content, rendered only once access is granted
    children: Element,
) -> Element {
    let auth = use_auth();
    let nav = navigator();
    let requested = use_route::<Routes>().to_string();
    let mut state = use_signal(GuardState::default);

    use_effect(use_reactive!(|requested| {
        let decision = authorize(auth.read().user.as_ref(), &policy, &requested);
        match GuardState::from(decision) {
            GuardState::Redirecting(target) => {
                tracing::debug!(path = %requested, to = %target.path(), "route guard redirect");
                state.set(GuardState::Redirecting(target.clone()));
                nav.replace(target.route());
            }
            next => state.set(next),
        }
    }));

    // The render-time decision keeps content hidden between a logout and the
    // effect above catching up.
    let decision = authorize(auth.read().user.as_ref(), &policy, &requested);
    if decision == GuardDecision::Allow && state() == GuardState::Allowed {
        return rsx! { {children} };
    }

    rsx! {
        div { class: "flex items-center justify-center min-h-[50vh]",
            span { class: "loading loading-spinner loading-lg" }
        }
    }
}
