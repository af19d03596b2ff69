//! Process-wide session service.

use std::{cell::RefCell, rc::Rc};

use tm_types::auth::Identity;

use super::store::SessionStore;

pub type ListenerId = u64;

type Listener = Rc<dyn Fn(Option<&Identity>)>;

struct Inner {
    current: Option<Identity>,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: ListenerId,
}

/// Owns the signed-in identity.
///
/// Cloning yields another handle to the same session. Everything runs on the
/// UI thread, so plain `Rc<RefCell<..>>` is enough. Listeners are called after
/// the internal borrow is released and may read the session themselves.
#[derive(Clone)]
pub struct SessionService {
    inner: Rc<RefCell<Inner>>,
    store: Rc<dyn SessionStore>,
}

impl PartialEq for SessionService {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl SessionService {
    /// Create the service and rehydrate from the store.
    pub fn new(store: Rc<dyn SessionStore>) -> Self {
        let current = store.load();
        match &current {
            Some(identity) => tracing::debug!(user = %identity, "restored session"),
            None => tracing::debug!("no stored session"),
        }

        Self {
            inner: Rc::new(RefCell::new(Inner {
                current,
                listeners: Vec::new(),
                next_listener: 0,
            })),
            store,
        }
    }

    pub fn current_user(&self) -> Option<Identity> {
        self.inner.borrow().current.clone()
    }

    pub fn is_logged_in(&self) -> bool {
        self.inner.borrow().current.is_some()
    }

    /// Make `identity` the signed-in user, persist it and notify listeners.
    pub fn login(&self, identity: Identity) {
        tracing::info!(user = %identity, "signed in");
        self.store.save(&identity);
        self.inner.borrow_mut().current = Some(identity);
        self.notify();
    }

    pub fn logout(&self) {
        let previous = self.inner.borrow_mut().current.take();
        self.store.clear();
        if let Some(identity) = previous {
            tracing::info!(user = %identity, "signed out");
        }
        self.notify();
    }

    pub fn subscribe(&self, listener: impl Fn(Option<&Identity>) + 'static) -> ListenerId {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_listener;
        inner.next_listener += 1;
        inner.listeners.push((id, Rc::new(listener)));
        id
    }

    pub fn unsubscribe(&self, id: ListenerId) {
        self.inner.borrow_mut().listeners.retain(|(listener_id, _)| *listener_id != id);
    }

    fn notify(&self) {
        let (current, listeners) = {
            let inner = self.inner.borrow();
            let listeners: Vec<Listener> = inner.listeners.iter().map(|(_, l)| l.clone()).collect();
            (inner.current.clone(), listeners)
        };

        for listener in listeners {
            listener(current.as_ref());
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use tm_types::auth::Role;

    use super::*;
    use crate::app::auth::store::MemorySessionStore;

    fn service_with(store: Rc<MemorySessionStore>) -> SessionService {
        SessionService::new(store)
    }

    #[test]
    fn test_rehydrates_on_construction() {
        let store = Rc::new(MemorySessionStore::new());
        store.save(&Identity::new("ana", Role::Traveller));

        let session = service_with(store);
        assert_eq!(session.current_user().map(|u| u.username), Some("ana".to_string()));
    }

    #[test]
    fn test_malformed_store_starts_logged_out() {
        let session = service_with(Rc::new(MemorySessionStore::with_raw("garbage")));
        assert!(!session.is_logged_in());
    }

    #[test]
    fn test_login_persists_and_logout_clears() {
        let store = Rc::new(MemorySessionStore::new());
        let session = service_with(store.clone());

        session.login(Identity::new("root", Role::Admin));
        assert_eq!(store.load().map(|u| u.role), Some(Role::Admin));

        session.logout();
        assert_eq!(session.current_user(), None);
        assert_eq!(store.load(), None);

        // A fresh service sees the logout too
        assert!(!service_with(store).is_logged_in());
    }

    #[test]
    fn test_listeners_see_changes_and_can_read_session() {
        let session = service_with(Rc::new(MemorySessionStore::new()));
        let seen = Rc::new(RefCell::new(Vec::new()));

        let reader = session.clone();
        let log = seen.clone();
        session.subscribe(move |user| {
            // Re-entrant read must not panic
            let current = reader.current_user();
            assert_eq!(current.as_ref(), user);
            log.borrow_mut().push(user.map(|u| u.username.clone()));
        });

        session.login(Identity::new("ana", Role::Traveller));
        session.logout();

        assert_eq!(*seen.borrow(), vec![Some("ana".to_string()), None]);
    }

    #[test]
    fn test_unsubscribe() {
        let session = service_with(Rc::new(MemorySessionStore::new()));
        let calls = Rc::new(Cell::new(0));

        let counter = calls.clone();
        let id = session.subscribe(move |_| counter.set(counter.get() + 1));
        session.login(Identity::new("ana", Role::Traveller));
        session.unsubscribe(id);
        session.logout();

        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_clones_share_state() {
        let session = service_with(Rc::new(MemorySessionStore::new()));
        let other = session.clone();
        other.login(Identity::new("globe", Role::TravelAgency));
        assert!(session.is_logged_in());
        assert!(session == other);
    }
}
