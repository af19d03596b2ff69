use dioxus::prelude::*;
use tm_types::auth::{Identity, Role};

use super::{context::AuthState, session::SessionService};

/// Get current auth state from context
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Session service for `login`/`logout`.
pub fn use_session() -> SessionService {
    use_context::<SessionService>()
}

/// The signed-in user, subscribing the caller to changes.
pub fn use_current_user() -> Option<Identity> {
    use_auth().read().user.clone()
}

pub fn use_has_role(role: Role) -> bool {
    use_auth().read().user.as_ref().is_some_and(|u| u.has_role(role))
}
