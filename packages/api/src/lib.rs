//! # API crate — session gate and HTTP client for the Driftbox frontend
//!
//! Everything the web frontend knows about the remote file-hosting API lives here,
//! kept free of any rendering so the decision logic is testable on the host.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`session`] | Persisted credential state, authorization headers, page-access gate |
//! | [`client`] | `ApiClient`: login, upload, file listing, admin roster CRUD |
//! | [`models`] | Wire types (`FileRecord`, `UserRecord`, ...) in the server's camelCase form |
//! | [`expiry`] | Upload duration options and the expiry countdown formatter |
//! | [`confirm`] | Destructive-action confirmation as an injectable dependency |
//! | [`error`] | `ApiError`: every failure the frontend can surface |

pub mod client;
pub mod confirm;
pub mod error;
pub mod expiry;
pub mod models;
pub mod session;

pub use client::{default_base_url, ApiClient};
pub use confirm::{BrowserConfirm, ConfirmPrompt};
pub use error::ApiError;
pub use expiry::ExpiryOption;
pub use models::{FileRecord, SessionInfo, UploadFile, UserRecord};
pub use session::{check_access, Gate, MemoryStore, Page, Session, SessionStore};

#[cfg(target_arch = "wasm32")]
pub use session::BrowserStore;
