//! Destructive-action confirmation as an explicit dependency.
//!
//! Delete calls take a `ConfirmPrompt` instead of reaching for `window.confirm`
//! themselves, so tests can inject a denying stub and assert that no request
//! goes out.

pub trait ConfirmPrompt {
    /// Ask the user to confirm. `false` aborts the action.
    fn confirm(&self, message: &str) -> bool;
}

/// The browser's native blocking confirm dialog.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserConfirm;

#[cfg(target_arch = "wasm32")]
impl ConfirmPrompt for BrowserConfirm {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}

// Without a browser there is nobody to ask; deny rather than delete silently.
#[cfg(not(target_arch = "wasm32"))]
impl ConfirmPrompt for BrowserConfirm {
    fn confirm(&self, _message: &str) -> bool {
        false
    }
}
