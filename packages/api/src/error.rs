use thiserror::Error;

/// Every failure the frontend surfaces to the user.
///
/// None of these are fatal: each call site converts the error into a single
/// toast and leaves the page usable. There is no retry policy.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Login was rejected, or the login request never reached the server.
    /// Nothing is persisted in either case.
    #[error("invalid username or password")]
    InvalidCredentials,

    /// Upload was submitted without a file. Pure client-side validation;
    /// no request is issued.
    #[error("no file selected")]
    NoFileSelected,

    /// Any non-2xx response or transport failure on an authorized call.
    #[error("request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
}
