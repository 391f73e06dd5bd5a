//! Client Auth Store
//!
//! Persists the bearer token and signed-in user in browser storage:
//! `localStorage` when the user asked to be remembered, `sessionStorage`
//! otherwise.

use leptos::prelude::*;

use crate::models::{StoredAuth, User};
use crate::storage::{BrowserStorage, KeyValueStore, StorageError};

pub const TOKEN_KEY: &str = "adminToken";
pub const USER_KEY: &str = "adminUser";
pub const CHECKER_ID_KEY: &str = "checkerID";

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthStoreError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("failed to encode user: {0}")]
    Encode(String),
    #[error("browser storage is not available")]
    Unavailable,
}

/// Auth state over a persistent and a per-tab backend
pub struct AuthStore<L, S> {
    local: L,
    session: S,
}

impl AuthStore<BrowserStorage, BrowserStorage> {
    /// Store backed by the current window's Web Storage
    pub fn browser() -> Option<Self> {
        Some(Self::new(BrowserStorage::local()?, BrowserStorage::session()?))
    }
}

impl<L: KeyValueStore, S: KeyValueStore> AuthStore<L, S> {
    pub fn new(local: L, session: S) -> Self {
        Self { local, session }
    }

    /// Write token and user as plaintext JSON. The other backend is cleared so
    /// a stale session can't shadow the new one.
    pub fn store_auth(&self, token: &str, user: &User, remember: bool) -> Result<(), AuthStoreError> {
        let user_json = serde_json::to_string(user).map_err(|e| AuthStoreError::Encode(e.to_string()))?;
        if remember {
            clear_keys(&self.session);
            write_auth(&self.local, token, &user_json)?;
        } else {
            clear_keys(&self.local);
            write_auth(&self.session, token, &user_json)?;
        }
        log::info!("stored session for {} (remember={})", user.email, remember);
        Ok(())
    }

    /// Session storage first, then local. Missing or malformed entries read as `None`.
    pub fn get_stored_auth(&self) -> Option<StoredAuth> {
        read_auth(&self.session).or_else(|| read_auth(&self.local))
    }

    pub fn clear_auth(&self) {
        clear_keys(&self.local);
        clear_keys(&self.session);
    }

    /// True iff a stored user has the admin role
    pub fn is_authenticated(&self) -> bool {
        self.get_stored_auth().is_some_and(|auth| auth.user.is_admin())
    }

    pub fn token(&self) -> Option<String> {
        self.get_stored_auth().map(|auth| auth.token)
    }

    pub fn store_checker_id(&self, id: &str) -> Result<(), AuthStoreError> {
        self.local.set(CHECKER_ID_KEY, id)?;
        Ok(())
    }

    pub fn checker_id(&self) -> Option<String> {
        self.local.get(CHECKER_ID_KEY).filter(|id| !id.is_empty())
    }

    pub fn clear_checker_id(&self) {
        self.local.remove(CHECKER_ID_KEY);
    }
}

fn write_auth(store: &impl KeyValueStore, token: &str, user_json: &str) -> Result<(), StorageError> {
    store.set(TOKEN_KEY, token)?;
    store.set(USER_KEY, user_json)
}

fn read_auth(store: &impl KeyValueStore) -> Option<StoredAuth> {
    let token = store.get(TOKEN_KEY).filter(|t| !t.is_empty())?;
    let raw_user = store.get(USER_KEY)?;
    match serde_json::from_str::<User>(&raw_user) {
        Ok(user) => Some(StoredAuth { token, user }),
        Err(e) => {
            log::error!("failed to parse stored user: {}", e);
            None
        }
    }
}

fn clear_keys(store: &impl KeyValueStore) {
    store.remove(TOKEN_KEY);
    store.remove(USER_KEY);
}

// ========================
// Reactive Session
// ========================

/// Reactive view of the stored auth, provided via context
#[derive(Clone, Copy)]
pub struct AuthSession {
    auth: RwSignal<Option<StoredAuth>>,
}

impl AuthSession {
    pub fn new() -> Self {
        let session = Self {
            auth: RwSignal::new(None),
        };
        session.refresh();
        session
    }

    /// Re-read storage; only notifies subscribers on change
    pub fn refresh(&self) {
        let current = AuthStore::browser().and_then(|store| store.get_stored_auth());
        if self.auth.get_untracked() != current {
            self.auth.set(current);
        }
    }

    pub fn current(&self) -> Option<StoredAuth> {
        self.auth.get()
    }

    pub fn user(&self) -> Option<User> {
        self.auth.with(|auth| auth.as_ref().map(|a| a.user.clone()))
    }

    pub fn is_admin(&self) -> bool {
        self.auth.with(|auth| auth.as_ref().is_some_and(|a| a.user.is_admin()))
    }

    pub fn login(&self, token: &str, user: User, remember: bool) -> Result<(), AuthStoreError> {
        let store = AuthStore::browser().ok_or(AuthStoreError::Unavailable)?;
        store.store_auth(token, &user, remember)?;
        self.auth.set(Some(StoredAuth {
            token: token.to_string(),
            user,
        }));
        Ok(())
    }

    pub fn logout(&self) {
        if let Some(store) = AuthStore::browser() {
            store.clear_auth();
        }
        self.auth.set(None);
    }
}

pub fn use_auth_session() -> AuthSession {
    expect_context::<AuthSession>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn user(role: &str) -> User {
        User {
            id: "42".into(),
            email: "ops@shop.test".into(),
            name: "Ops".into(),
            role: role.into(),
        }
    }

    #[test]
    fn test_remembered_auth_lives_in_local_storage() {
        let (local, session) = (MemoryStorage::new(), MemoryStorage::new());
        let store = AuthStore::new(&local, &session);
        store.store_auth("tok", &user("admin"), true).unwrap();

        let auth = store.get_stored_auth().unwrap();
        assert_eq!(auth.token, "tok");
        assert_eq!(auth.user, user("admin"));
        assert_eq!(local.get(TOKEN_KEY).as_deref(), Some("tok"));
        assert_eq!(session.get(TOKEN_KEY), None);
    }

    #[test]
    fn test_session_auth_absent_from_local_storage() {
        let (local, session) = (MemoryStorage::new(), MemoryStorage::new());
        let store = AuthStore::new(&local, &session);
        store.store_auth("tok", &user("admin"), false).unwrap();

        assert_eq!(store.get_stored_auth().unwrap().token, "tok");
        assert_eq!(session.get(TOKEN_KEY).as_deref(), Some("tok"));
        assert_eq!(local.get(TOKEN_KEY), None);
        assert_eq!(local.get(USER_KEY), None);
    }

    #[test]
    fn test_session_storage_wins_over_local() {
        let (local, session) = (MemoryStorage::new(), MemoryStorage::new());
        let store = AuthStore::new(&local, &session);
        write_auth(&local, "old", &serde_json::to_string(&user("admin")).unwrap()).unwrap();
        write_auth(&session, "new", &serde_json::to_string(&user("admin")).unwrap()).unwrap();
        assert_eq!(store.token().as_deref(), Some("new"));
    }

    #[test]
    fn test_malformed_user_reads_as_none() {
        let (local, session) = (MemoryStorage::new(), MemoryStorage::new());
        local.set(TOKEN_KEY, "tok").unwrap();
        local.set(USER_KEY, "{not json").unwrap();
        let store = AuthStore::new(&local, &session);
        assert_eq!(store.get_stored_auth(), None);
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_numeric_user_id_in_storage_is_read() {
        let (local, session) = (MemoryStorage::new(), MemoryStorage::new());
        local.set(TOKEN_KEY, "tok").unwrap();
        local.set(USER_KEY, r#"{"id":12,"email":"ops@shop.test","name":"Ops","role":"admin"}"#).unwrap();
        let store = AuthStore::new(&local, &session);
        assert_eq!(store.get_stored_auth().map(|auth| auth.user.id).as_deref(), Some("12"));
        assert!(store.is_authenticated());
    }

    #[test]
    fn test_is_authenticated_requires_admin_role() {
        let store = AuthStore::new(MemoryStorage::new(), MemoryStorage::new());
        store.store_auth("tok", &user("Admin"), true).unwrap();
        assert!(store.is_authenticated());

        store.store_auth("tok", &user("vendor"), true).unwrap();
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_clear_auth_logs_out() {
        let store = AuthStore::new(MemoryStorage::new(), MemoryStorage::new());
        store.store_auth("a", &user("admin"), true).unwrap();
        store.clear_auth();
        assert!(!store.is_authenticated());
        assert_eq!(store.get_stored_auth(), None);
    }

    #[test]
    fn test_checker_id_survives_clear_auth() {
        let store = AuthStore::new(MemoryStorage::new(), MemoryStorage::new());
        assert_eq!(store.checker_id(), None);
        store.store_checker_id("CHK-0007").unwrap();
        store.clear_auth();
        assert_eq!(store.checker_id().as_deref(), Some("CHK-0007"));
        store.clear_checker_id();
        assert_eq!(store.checker_id(), None);
    }
}
