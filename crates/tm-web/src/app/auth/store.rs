//! Durable storage for the signed-in identity.

use std::cell::RefCell;

use tm_types::auth::Identity;

use crate::app::storage::BrowserStorage;

/// Where the session identity is persisted between page loads.
///
/// Implementations never fail loudly: write errors are logged and a missing or
/// unreadable entry simply loads as `None`.
pub trait SessionStore {
    fn save(&self, identity: &Identity);
    fn load(&self) -> Option<Identity>;
    fn clear(&self);
}

/// Decode a stored identity, treating malformed data as signed out.
pub fn decode_identity(raw: &str) -> Option<Identity> {
    match serde_json::from_str::<Identity>(raw) {
        Ok(identity) => Some(identity),
        Err(e) => {
            tracing::debug!(error = %e, "discarding unreadable stored session");
            None
        }
    }
}

/// Session store backed by `localStorage`.
pub struct BrowserSessionStore {
    storage: BrowserStorage,
    key: String,
}

impl BrowserSessionStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            storage: BrowserStorage::new(),
            key: key.into(),
        }
    }
}

impl SessionStore for BrowserSessionStore {
    fn save(&self, identity: &Identity) {
        if let Err(e) = self.storage.set_json(&self.key, identity) {
            tracing::warn!(key = %self.key, error = %e, "failed to persist session");
        }
    }

    fn load(&self) -> Option<Identity> {
        self.storage.get_json(&self.key)
    }

    fn clear(&self) {
        if let Err(e) = self.storage.remove(&self.key) {
            tracing::warn!(key = %self.key, error = %e, "failed to clear stored session");
        }
    }
}

/// In-memory session store holding the serialized form, like the browser would.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    raw: RefCell<Option<String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an arbitrary stored value, valid or not.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: RefCell::new(Some(raw.into())),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.raw.borrow().clone()
    }
}

impl SessionStore for MemorySessionStore {
    fn save(&self, identity: &Identity) {
        match serde_json::to_string(identity) {
            Ok(json) => *self.raw.borrow_mut() = Some(json),
            Err(e) => tracing::warn!(error = %e, "failed to serialize session"),
        }
    }

    fn load(&self) -> Option<Identity> {
        self.raw.borrow().as_deref().and_then(decode_identity)
    }

    fn clear(&self) {
        self.raw.borrow_mut().take();
    }
}

#[cfg(test)]
mod tests {
    use tm_types::auth::Role;

    use super::*;

    #[test]
    fn test_save_then_load() {
        let store = MemorySessionStore::new();
        let identity = Identity::new("ana", Role::Traveller).with_id(7);
        store.save(&identity);

        let loaded = store.load().unwrap();
        assert_eq!(loaded.username, "ana");
        assert_eq!(loaded.role, Role::Traveller);
        assert_eq!(loaded.id, Some(7));
    }

    #[test]
    fn test_save_overwrites() {
        let store = MemorySessionStore::new();
        store.save(&Identity::new("ana", Role::Traveller));
        store.save(&Identity::new("root", Role::Admin));
        assert_eq!(store.load().unwrap().username, "root");
    }

    #[test]
    fn test_clear() {
        let store = MemorySessionStore::new();
        store.save(&Identity::new("ana", Role::Traveller));
        store.clear();
        assert_eq!(store.load(), None);
        assert_eq!(store.raw(), None);
    }

    #[test]
    fn test_malformed_loads_as_none() {
        assert_eq!(MemorySessionStore::with_raw("{not json").load(), None);
        assert_eq!(MemorySessionStore::with_raw(r#"{"username":"ana"}"#).load(), None);
        assert_eq!(MemorySessionStore::with_raw(r#"{"username":"ana","role":"PILOT"}"#).load(), None);
    }

    #[test]
    fn test_legacy_stored_shape_loads() {
        // Older clients stored the raw login response
        let store = MemorySessionStore::with_raw(r#"{"username":"globe","role":"ROLE_TRAVEL_AGENCY","isLoggedIn":true,"userId":3}"#);
        let identity = store.load().unwrap();
        assert_eq!(identity.role, Role::TravelAgency);
        assert_eq!(identity.id, Some(3));
    }

    #[test]
    fn test_stored_form_uses_bare_role() {
        let store = MemorySessionStore::new();
        store.save(&Identity::new("root", Role::Admin));
        let raw = store.raw().unwrap();
        assert!(raw.contains(r#""role":"ADMIN""#));
    }

    #[test]
    fn test_browser_store_off_browser_is_empty() {
        let store = BrowserSessionStore::new("user");
        store.save(&Identity::new("ana", Role::Traveller));
        assert_eq!(store.load(), None);
        store.clear();
    }
}
