//! HTTP client for the remote file-hosting API.
//!
//! Each method is one endpoint. Mutations do not patch any local state: the
//! calling view refetches the full list afterwards, so there is no cache to
//! keep consistent. Requests are never retried and never cancelled once sent.

use reqwest::multipart;

use crate::confirm::ConfirmPrompt;
use crate::error::ApiError;
use crate::expiry::ExpiryOption;
use crate::models::{FileRecord, LoginResponse, SessionInfo, UploadFile, UserRecord};
use crate::session::{Session, SessionStore};

const DEV_BASE_URL: &str = "http://localhost:6002/api";

/// API base URL for the current origin: the dev backend when served from
/// localhost, otherwise `/api` on the same origin.
#[cfg(target_arch = "wasm32")]
pub fn default_base_url() -> String {
    let Some(window) = web_sys::window() else {
        return DEV_BASE_URL.to_string();
    };
    let location = window.location();
    match (location.hostname(), location.origin()) {
        (Ok(host), Ok(origin)) if host != "localhost" && host != "127.0.0.1" => {
            format!("{origin}/api")
        }
        _ => DEV_BASE_URL.to_string(),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn default_base_url() -> String {
    DEV_BASE_URL.to_string()
}

/// A handle on the remote API, carrying the session it authorizes with.
#[derive(Clone, Debug)]
pub struct ApiClient<S: SessionStore> {
    base_url: String,
    http: reqwest::Client,
    session: Session<S>,
}

impl<S: SessionStore> ApiClient<S> {
    pub fn new(base_url: impl Into<String>, session: Session<S>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
            session,
        }
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Exchange credentials for a token and persist the session.
    ///
    /// Any failure (bad credentials, server error, or the network being down)
    /// comes back as `InvalidCredentials` with nothing persisted. The login
    /// form has no more detail to offer either way.
    pub async fn login(&self, username: &str, password: &str) -> Result<SessionInfo, ApiError> {
        let response = self
            .http
            .post(self.url("/login"))
            .json(&serde_json::json!({ "username": username, "password": password }))
            .send()
            .await
            .map_err(|err| {
                tracing::warn!("login request failed: {err}");
                ApiError::InvalidCredentials
            })?;

        if !response.status().is_success() {
            return Err(ApiError::InvalidCredentials);
        }

        let body: LoginResponse = response
            .json()
            .await
            .map_err(|_| ApiError::InvalidCredentials)?;

        self.session.persist(&body.token, &body.username, body.is_admin);
        Ok(SessionInfo {
            username: body.username,
            is_admin: body.is_admin,
        })
    }

    /// Drop the persisted session. Purely local; the token is opaque and the
    /// server keeps no client-visible session to tear down.
    pub fn logout(&self) {
        self.session.clear();
    }

    /// Current file set. Zero files is an empty list, not an error.
    pub async fn list_files(&self) -> Result<Vec<FileRecord>, ApiError> {
        let files = self
            .http
            .get(self.url("/files"))
            .headers(self.session.authorize())
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(files)
    }

    /// Multipart upload: the file, its retention duration, and an optional
    /// access password that is forwarded to the server, never checked here.
    pub async fn upload(
        &self,
        file: Option<UploadFile>,
        duration: ExpiryOption,
        password: &str,
    ) -> Result<FileRecord, ApiError> {
        let Some(file) = file else {
            return Err(ApiError::NoFileSelected);
        };

        let mut form = multipart::Form::new()
            .part("file", multipart::Part::bytes(file.bytes).file_name(file.name))
            .text("duration", duration.value());
        if !password.is_empty() {
            form = form.text("password", password.to_string());
        }

        let mut request = self.http.post(self.url("/upload")).multipart(form);
        if let Some(token) = self.session.token() {
            request = request.bearer_auth(token);
        }

        let record = request
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(record)
    }

    /// Delete a file, gated on user confirmation. Declining issues no request
    /// and returns `Ok(false)`; the caller refreshes the list only on `Ok(true)`.
    pub async fn delete_file(
        &self,
        id: &str,
        confirm: &impl ConfirmPrompt,
    ) -> Result<bool, ApiError> {
        if !confirm.confirm("Are you sure you want to delete this file?") {
            return Ok(false);
        }

        self.http
            .delete(self.url(&format!("/files/{id}")))
            .headers(self.session.authorize())
            .send()
            .await?
            .error_for_status()?;
        Ok(true)
    }

    /// Public download link for a hosted file.
    pub fn share_link(&self, id: &str) -> String {
        self.url(&format!("/file/{id}"))
    }

    /// Full user roster. Admin role enforced server-side; this just attaches
    /// the session headers like every other authorized call.
    pub async fn list_users(&self) -> Result<Vec<UserRecord>, ApiError> {
        let users = self
            .http
            .get(self.url("/admin/users"))
            .headers(self.session.authorize())
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(users)
    }

    pub async fn create_user(
        &self,
        username: &str,
        password: &str,
        is_admin: bool,
    ) -> Result<(), ApiError> {
        self.http
            .post(self.url("/admin/users"))
            .headers(self.session.authorize())
            .json(&serde_json::json!({
                "username": username,
                "password": password,
                "isAdmin": is_admin,
            }))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    pub async fn update_user(
        &self,
        id: &str,
        username: &str,
        is_admin: bool,
    ) -> Result<(), ApiError> {
        self.http
            .put(self.url(&format!("/admin/users/{id}")))
            .headers(self.session.authorize())
            .json(&serde_json::json!({ "username": username, "isAdmin": is_admin }))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    pub async fn change_password(&self, id: &str, password: &str) -> Result<(), ApiError> {
        self.http
            .put(self.url(&format!("/admin/users/{id}/password")))
            .headers(self.session.authorize())
            .json(&serde_json::json!({ "password": password }))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    /// Save an edited user: profile fields first, then the password in its own
    /// call only when a new one was supplied. A password failure after a
    /// successful profile update is not rolled back.
    pub async fn save_user(
        &self,
        id: &str,
        username: &str,
        is_admin: bool,
        new_password: &str,
    ) -> Result<(), ApiError> {
        self.update_user(id, username, is_admin).await?;
        if !new_password.is_empty() {
            self.change_password(id, new_password).await?;
        }
        Ok(())
    }

    /// Delete a roster entry, gated on user confirmation like [`delete_file`].
    ///
    /// [`delete_file`]: ApiClient::delete_file
    pub async fn delete_user(
        &self,
        id: &str,
        confirm: &impl ConfirmPrompt,
    ) -> Result<bool, ApiError> {
        if !confirm.confirm("Are you sure you want to delete this user?") {
            return Ok(false);
        }

        self.http
            .delete(self.url(&format!("/admin/users/{id}")))
            .headers(self.session.authorize())
            .send()
            .await?
            .error_for_status()?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemoryStore;

    /// Prompt stub that always declines and records that it was asked.
    struct Deny(std::cell::Cell<bool>);

    impl Deny {
        fn new() -> Self {
            Deny(std::cell::Cell::new(false))
        }
    }

    impl ConfirmPrompt for Deny {
        fn confirm(&self, _message: &str) -> bool {
            self.0.set(true);
            false
        }
    }

    /// Client pointed at a port nothing listens on: any request that actually
    /// goes out fails fast instead of hanging.
    fn offline_client() -> ApiClient<MemoryStore> {
        ApiClient::new("http://127.0.0.1:9/api", Session::new(MemoryStore::new()))
    }

    #[test]
    fn share_link_shape() {
        let client = offline_client();
        assert_eq!(client.share_link("abc123"), "http://127.0.0.1:9/api/file/abc123");
    }

    #[tokio::test]
    async fn upload_without_file_is_local_error() {
        let client = offline_client();
        // Resolves immediately: no file means no request is ever built.
        let result = client.upload(None, ExpiryOption::OneDay, "secret").await;
        assert!(matches!(result, Err(ApiError::NoFileSelected)));
    }

    #[tokio::test]
    async fn declined_delete_issues_no_request() {
        let client = offline_client();
        let prompt = Deny::new();

        let result = client.delete_file("f1", &prompt).await;
        assert!(matches!(result, Ok(false)));
        assert!(prompt.0.get(), "prompt was never consulted");

        let result = client.delete_user("u1", &prompt).await;
        assert!(matches!(result, Ok(false)));
    }

    #[tokio::test]
    async fn failed_login_persists_nothing() {
        let client = offline_client();
        let result = client.login("alice", "hunter2").await;
        assert!(matches!(result, Err(ApiError::InvalidCredentials)));
        assert!(client.session().token().is_none());
        assert!(client.session().info().is_none());
    }

    #[tokio::test]
    async fn logout_clears_session() {
        let client = offline_client();
        client.session().persist("tok", "alice", true);
        client.logout();
        assert!(client.session().token().is_none());
    }
}
