//! Session token storage backends.

pub mod memory;

/// Fixed key under which the session token is persisted.
pub const SESSION_TOKEN_KEY: &str = "token";

/// Read-only view of the browser-local key-value store.
///
/// The navigation core only ever reads; login and logout flows write
/// through their own handle. Reads are never composed with writes, so no
/// locking protocol is imposed on implementors beyond interior thread
/// safety.
pub trait SessionStore: Send + Sync {
    /// Current value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;
}

/// Whether the store currently holds a non-empty session token.
pub fn is_authenticated(store: &dyn SessionStore) -> bool {
    store
        .get(SESSION_TOKEN_KEY)
        .is_some_and(|token| !token.is_empty())
}

pub use memory::InMemorySessionStore;
