//! Session persistence over browser local storage.
//!
//! The store is written against a small backend trait instead of the browser
//! global so the persistence contract can be exercised off-browser.

use crate::config::AuthConfig;
use doorway_client::types::User;
use std::cell::RefCell;
use std::collections::HashMap;
use web_sys::Storage;

/// The client-held record of the authenticated user and their bearer token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user: User,
    pub token: String,
}

/// Minimal key-value surface of `window.localStorage`
pub trait StorageBackend {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Backend over the real browser local storage
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStorage;

impl StorageBackend for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        local_storage().and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// In-memory backend for tests
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

/// Persists and restores the session under the `auth_user` and `auth_token`
/// local storage keys
pub struct SessionStore<B = BrowserStorage> {
    backend: B,
}

impl SessionStore<BrowserStorage> {
    /// Store over the browser's local storage
    pub fn browser() -> Self {
        Self::with_backend(BrowserStorage)
    }
}

impl<B: StorageBackend> SessionStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    /// Persist the user and token. Two separate writes; a failure between
    /// them reads back as no session at all.
    pub fn save(&self, user: &User, token: &str) {
        if let Ok(serialized) = serde_json::to_string(user) {
            self.backend.set(AuthConfig::USER_KEY, &serialized);
        }
        self.backend.set(AuthConfig::TOKEN_KEY, token);
    }

    /// Restore the previously saved session. Yields a session only when both
    /// keys are present and the user record still deserializes.
    pub fn load(&self) -> Option<Session> {
        let user = self.backend.get(AuthConfig::USER_KEY)?;
        let token = self.backend.get(AuthConfig::TOKEN_KEY)?;
        let user: User = serde_json::from_str(&user).ok()?;
        Some(Session { user, token })
    }

    /// Remove both keys
    pub fn clear(&self) {
        self.backend.remove(AuthConfig::USER_KEY);
        self.backend.remove(AuthConfig::TOKEN_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: 7,
            email: "user@example.com".to_string(),
            username: Some("user".to_string()),
        }
    }

    fn store() -> SessionStore<MemoryStorage> {
        SessionStore::with_backend(MemoryStorage::default())
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = store();
        store.save(&user(), "tok-123");

        let session = store.load().expect("session should be present");
        assert_eq!(session.user, user());
        assert_eq!(session.token, "tok-123");
    }

    #[test]
    fn save_uses_the_documented_keys() {
        let store = store();
        store.save(&user(), "tok-123");

        assert!(store.backend.get("auth_user").is_some());
        assert_eq!(store.backend.get("auth_token").as_deref(), Some("tok-123"));
    }

    #[test]
    fn user_record_is_plain_json() {
        let store = store();
        store.save(&user(), "tok-123");

        let raw = store.backend.get("auth_user").unwrap();
        let parsed: User = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed, user());
    }

    #[test]
    fn clear_removes_both_keys() {
        let store = store();
        store.save(&user(), "tok-123");
        store.clear();

        assert!(store.backend.get("auth_user").is_none());
        assert!(store.backend.get("auth_token").is_none());
        assert!(store.load().is_none());
    }

    #[test]
    fn load_on_empty_storage_is_none() {
        assert!(store().load().is_none());
    }

    #[test]
    fn partial_session_reads_back_as_absent() {
        // A failure between the two writes leaves one key behind; that must
        // not surface as a session.
        let store = store();
        store.backend.set("auth_user", r#"{"id":7,"email":"user@example.com"}"#);
        assert!(store.load().is_none());

        let store = self::store();
        store.backend.set("auth_token", "tok-123");
        assert!(store.load().is_none());
    }

    #[test]
    fn corrupt_user_record_reads_back_as_absent() {
        let store = store();
        store.backend.set("auth_user", "not json");
        store.backend.set("auth_token", "tok-123");
        assert!(store.load().is_none());
    }

    #[test]
    fn username_is_optional() {
        let store = store();
        store
            .backend
            .set("auth_user", r#"{"id":1,"email":"a@b.c"}"#);
        store.backend.set("auth_token", "t");

        let session = store.load().unwrap();
        assert_eq!(session.user.username, None);
    }
}
