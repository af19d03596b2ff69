use std::rc::Rc;

use dioxus::prelude::*;
use tm_types::auth::Identity;

use super::{session::SessionService, store::BrowserSessionStore};

/// Reactive mirror of the session service, read by the navbar and guards.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct AuthState {
    pub user: Option<Identity>,
}

/// Create the session service, provide it to the tree and keep an
/// [`AuthState`] signal in sync with it.
///
/// Must be called once, from the application root.
pub fn use_auth_provider(session_key: String) -> Signal<AuthState> {
    let session = use_hook(move || SessionService::new(Rc::new(BrowserSessionStore::new(session_key))));
    let auth = use_signal(|| AuthState {
        user: session.current_user(),
    });

    let listener = use_hook({
        let session = session.clone();
        move || {
            session.subscribe(move |user| {
                let mut auth = auth;
                auth.set(AuthState { user: user.cloned() });
            })
        }
    });

    use_drop({
        let session = session.clone();
        move || session.unsubscribe(listener)
    });

    use_context_provider(|| session);
    use_context_provider(|| auth);

    auth
}
