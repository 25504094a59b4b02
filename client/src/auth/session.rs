//! Session client backed by a stored identity delegation.
//!
//! DESIGN
//! ======
//! `SessionFactory::create` is the fallible step (storage access + decoding);
//! the resulting `AuthSession` answers `is_authenticated` synchronously from
//! the snapshot taken at creation time.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::net::types::Principal;

/// Storage key holding the serialized `StoredDelegation`.
pub const DELEGATION_STORAGE_KEY: &str = "postboard.delegation";

/// Errors raised while creating a session client.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("session storage unavailable")]
    StorageUnavailable,

    #[error("stored delegation malformed: {0}")]
    Malformed(String),
}

/// Delegation record persisted by the identity provider after login.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoredDelegation {
    pub principal: Principal,
    /// Expiry in milliseconds since the Unix epoch.
    pub expires_at_ms: f64,
}

/// Key/value storage the delegation is read from.
pub trait SessionStore {
    /// Read the raw value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::StorageUnavailable` if the backing storage
    /// cannot be reached.
    fn load(&self, key: &str) -> Result<Option<String>, SessionError>;
}

/// `window.localStorage`; unavailable outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSessionStore;

impl SessionStore for BrowserSessionStore {
    fn load(&self, key: &str) -> Result<Option<String>, SessionError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window()
                .and_then(|w| w.local_storage().ok().flatten())
                .ok_or(SessionError::StorageUnavailable)?;
            storage.get_item(key).map_err(|_| SessionError::StorageUnavailable)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(SessionError::StorageUnavailable)
        }
    }
}

/// In-process store, used on the server and in tests.
#[derive(Clone, Debug, Default)]
pub struct MemorySessionStore {
    items: HashMap<String, String>,
    unavailable: bool,
}

impl MemorySessionStore {
    #[must_use]
    pub fn with_item(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.items.insert(key.into(), value.into());
        self
    }

    /// A store whose every read fails.
    #[must_use]
    pub fn unavailable() -> Self {
        Self { items: HashMap::new(), unavailable: true }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self, key: &str) -> Result<Option<String>, SessionError> {
        if self.unavailable {
            return Err(SessionError::StorageUnavailable);
        }
        Ok(self.items.get(key).cloned())
    }
}

/// Authentication collaborator: creates a session handle.
#[allow(async_fn_in_trait)]
pub trait SessionFactory {
    type Session: AuthSession;

    async fn create(&self) -> Result<Self::Session, SessionError>;
}

/// A created session handle.
pub trait AuthSession {
    fn is_authenticated(&self) -> bool;
}

/// Session snapshot taken from storage at creation time.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionClient {
    delegation: Option<StoredDelegation>,
    checked_at_ms: f64,
}

impl SessionClient {
    #[must_use]
    pub fn principal(&self) -> Option<&Principal> {
        self.delegation.as_ref().map(|d| &d.principal)
    }
}

impl AuthSession for SessionClient {
    fn is_authenticated(&self) -> bool {
        self.delegation
            .as_ref()
            .is_some_and(|d| !d.principal.is_anonymous() && d.expires_at_ms > self.checked_at_ms)
    }
}

/// Builds `SessionClient`s from a `SessionStore` and a millisecond clock.
#[derive(Clone, Debug)]
pub struct StoredSessionFactory<S> {
    store: S,
    clock: fn() -> f64,
}

impl<S: SessionStore> StoredSessionFactory<S> {
    pub fn new(store: S, clock: fn() -> f64) -> Self {
        Self { store, clock }
    }
}

impl StoredSessionFactory<BrowserSessionStore> {
    /// Factory reading `localStorage` with the wall clock.
    #[must_use]
    pub fn browser() -> Self {
        Self::new(BrowserSessionStore, now_ms)
    }
}

impl<S: SessionStore> SessionFactory for StoredSessionFactory<S> {
    type Session = SessionClient;

    async fn create(&self) -> Result<SessionClient, SessionError> {
        let delegation = match self.store.load(DELEGATION_STORAGE_KEY)? {
            Some(raw) => Some(
                serde_json::from_str::<StoredDelegation>(&raw)
                    .map_err(|e| SessionError::Malformed(e.to_string()))?,
            ),
            None => None,
        };
        Ok(SessionClient { delegation, checked_at_ms: (self.clock)() })
    }
}

/// Current wall-clock time in milliseconds since the Unix epoch.
#[must_use]
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0.0, |d| d.as_secs_f64() * 1000.0)
    }
}
