//! Thin browser shims so components stay target-agnostic.

/// Hard navigation to a path. Access-gate redirects are full page loads, so
/// this goes through `location` rather than the router.
pub fn navigate(path: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!("navigate to {path} (no browser)");
    }
}

/// Put text on the clipboard. Returns whether the write was dispatched;
/// the browser resolves it asynchronously and failures there are silent.
pub fn copy_to_clipboard(text: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        let _ = window.navigator().clipboard().write_text(text);
        true
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = text;
        false
    }
}
