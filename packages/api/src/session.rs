//! The session gate: persisted credential state and the page-access decision.
//!
//! The session is three string fields in a key-value store (`token`, `username`,
//! `isAdmin`). Only login writes them, only logout clears them; everything else
//! is read-only, so no locking discipline is needed beyond the store itself.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

use crate::models::SessionInfo;

pub const TOKEN_KEY: &str = "token";
pub const USERNAME_KEY: &str = "username";
pub const IS_ADMIN_KEY: &str = "isAdmin";

/// Key-value persistence for the session fields.
///
/// `BrowserStore` backs this with `window.localStorage` on wasm; `MemoryStore`
/// is the native fallback and what tests inject.
pub trait SessionStore: Clone + 'static {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory store for tests and non-browser targets.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: std::sync::Arc<std::sync::Mutex<std::collections::HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.values.lock().unwrap().remove(key);
    }
}

/// `window.localStorage`-backed store. Tokens survive reloads; the server-issued
/// token expiry (if any) is opaque to the client, so nothing here ever ages out.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Debug, Default)]
pub struct BrowserStore;

#[cfg(target_arch = "wasm32")]
impl BrowserStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

#[cfg(target_arch = "wasm32")]
impl SessionStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            if let Err(err) = storage.set_item(key, value) {
                tracing::error!("localStorage write failed: {err:?}");
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Pages the gate distinguishes. Everything that is not the login page requires
/// a token; the admin page additionally requires the admin role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Login,
    Files,
    Admin,
}

/// Outcome of the access check: stay, or go somewhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Continue,
    ToLogin,
    ToFiles,
}

/// Pure page-access decision.
///
/// A logged-in user landing on the login page is sent to the files page; an
/// anonymous visitor anywhere else is sent to login; a non-admin on the admin
/// page is sent to the files page. The token value is never inspected here;
/// the server is the authority on whether it is still good.
pub fn check_access(token: Option<&str>, is_admin: bool, page: Page) -> Gate {
    if page == Page::Login {
        return if token.is_some() {
            Gate::ToFiles
        } else {
            Gate::Continue
        };
    }
    if token.is_none() {
        return Gate::ToLogin;
    }
    if page == Page::Admin && !is_admin {
        return Gate::ToFiles;
    }
    Gate::Continue
}

/// The client's locally held proof of identity plus cached role flag.
#[derive(Clone, Debug)]
pub struct Session<S: SessionStore> {
    store: S,
}

impl<S: SessionStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY)
    }

    pub fn username(&self) -> Option<String> {
        self.store.get(USERNAME_KEY)
    }

    pub fn is_admin(&self) -> bool {
        self.store.get(IS_ADMIN_KEY).as_deref() == Some("true")
    }

    /// The renderable view of the session, or `None` when anonymous.
    pub fn info(&self) -> Option<SessionInfo> {
        self.token()?;
        Some(SessionInfo {
            username: self.username().unwrap_or_default(),
            is_admin: self.is_admin(),
        })
    }

    /// Transition to Authenticated-User / Authenticated-Admin. Called only on
    /// a successful login response.
    pub fn persist(&self, token: &str, username: &str, is_admin: bool) {
        self.store.set(TOKEN_KEY, token);
        self.store.set(USERNAME_KEY, username);
        self.store
            .set(IS_ADMIN_KEY, if is_admin { "true" } else { "false" });
    }

    /// Transition back to Anonymous.
    pub fn clear(&self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(USERNAME_KEY);
        self.store.remove(IS_ADMIN_KEY);
    }

    /// Header set for an authorized call: JSON content-type marker always, the
    /// bearer token only when one is stored. With no token the auth header is
    /// simply absent and the server answers 401; callers surface that as a
    /// normal request failure.
    pub fn authorize(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(token) = self.token() {
            if let Ok(value) = HeaderValue::from_str(&format!("Bearer {token}")) {
                headers.insert(AUTHORIZATION, value);
            }
        }
        headers
    }

    pub fn gate(&self, page: Page) -> Gate {
        check_access(self.token().as_deref(), self.is_admin(), page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session<MemoryStore> {
        Session::new(MemoryStore::new())
    }

    #[test]
    fn authorize_round_trips_token() {
        let session = session();
        for token in ["t", "abc.def.ghi", "a-much-longer-opaque-token-value"] {
            session.persist(token, "alice", false);
            let headers = session.authorize();
            let value = headers.get(AUTHORIZATION).unwrap().to_str().unwrap();
            assert_eq!(value, format!("Bearer {token}"));
        }
    }

    #[test]
    fn authorize_without_token_has_no_auth_header() {
        let session = session();
        let headers = session.authorize();
        assert!(headers.get(AUTHORIZATION).is_none());
        assert_eq!(
            headers.get(CONTENT_TYPE).unwrap().to_str().unwrap(),
            "application/json"
        );
    }

    #[test]
    fn login_then_logout_state_machine() {
        let session = session();
        assert!(session.info().is_none());

        session.persist("tok", "alice", true);
        let info = session.info().unwrap();
        assert_eq!(info.username, "alice");
        assert!(info.is_admin);

        session.clear();
        assert!(session.token().is_none());
        assert!(session.username().is_none());
        assert!(!session.is_admin());
        assert!(session.info().is_none());
    }

    #[test]
    fn anonymous_is_sent_to_login() {
        assert_eq!(check_access(None, false, Page::Files), Gate::ToLogin);
        assert_eq!(check_access(None, false, Page::Admin), Gate::ToLogin);
        assert_eq!(check_access(None, false, Page::Login), Gate::Continue);
    }

    #[test]
    fn logged_in_user_skips_login_page() {
        assert_eq!(check_access(Some("tok"), false, Page::Login), Gate::ToFiles);
        assert_eq!(check_access(Some("tok"), true, Page::Login), Gate::ToFiles);
    }

    #[test]
    fn non_admin_never_reaches_admin_page() {
        // Holds for any token value.
        for token in ["x", "tok", "eyJhbGciOiJIUzI1NiJ9.e30.sig"] {
            assert_eq!(check_access(Some(token), false, Page::Admin), Gate::ToFiles);
        }
    }

    #[test]
    fn authenticated_pages_continue() {
        assert_eq!(check_access(Some("tok"), false, Page::Files), Gate::Continue);
        assert_eq!(check_access(Some("tok"), true, Page::Files), Gate::Continue);
        assert_eq!(check_access(Some("tok"), true, Page::Admin), Gate::Continue);
    }

    #[test]
    fn gate_reads_session_fields() {
        let session = session();
        assert_eq!(session.gate(Page::Files), Gate::ToLogin);
        session.persist("tok", "bob", false);
        assert_eq!(session.gate(Page::Files), Gate::Continue);
        assert_eq!(session.gate(Page::Admin), Gate::ToFiles);
    }
}
