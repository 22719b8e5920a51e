//! In-memory key-value store for tests and embedding.

use std::collections::BTreeMap;

use parking_lot::RwLock;

use super::{SessionStore, SESSION_TOKEN_KEY};

/// In-memory stand-in for the browser-local persistent store.
///
/// Writers (login/logout flows) mutate through this handle; the auth gate
/// reads through the [`SessionStore`] trait.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    entries: RwLock<BTreeMap<String, String>>,
}

impl InMemorySessionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value under `key`, replacing any previous one.
    pub fn set(&self, key: &str, value: &str) {
        self.entries
            .write()
            .insert(key.to_string(), value.to_string());
    }

    /// Remove the value under `key`, if any.
    pub fn remove(&self, key: &str) {
        self.entries.write().remove(key);
    }

    /// Store a session token, marking the user authenticated.
    pub fn login(&self, token: &str) {
        self.set(SESSION_TOKEN_KEY, token);
    }

    /// Drop the session token, marking the user unauthenticated.
    pub fn logout(&self) {
        self.remove(SESSION_TOKEN_KEY);
    }
}

impl SessionStore for InMemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::is_authenticated;

    #[test]
    fn login_and_logout_toggle_authentication() {
        let store = InMemorySessionStore::new();
        assert!(!is_authenticated(&store));

        store.login("jwt-abc123");
        assert!(is_authenticated(&store));

        store.logout();
        assert!(!is_authenticated(&store));
    }

    #[test]
    fn empty_token_is_unauthenticated() {
        let store = InMemorySessionStore::new();
        store.login("");
        assert!(!is_authenticated(&store));
    }
}
