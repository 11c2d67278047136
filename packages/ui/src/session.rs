//! Session context and the page-access gate, shared by every view.

use api::{ApiClient, Gate, Page, Session, SessionInfo};
use dioxus::prelude::*;

use crate::browser::navigate;

#[cfg(target_arch = "wasm32")]
pub type DefaultStore = api::BrowserStore;
#[cfg(not(target_arch = "wasm32"))]
pub type DefaultStore = api::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
fn default_store() -> DefaultStore {
    // One process-wide store so every client sees the same session, matching
    // what localStorage gives the browser build.
    static STORE: std::sync::OnceLock<api::MemoryStore> = std::sync::OnceLock::new();
    STORE.get_or_init(api::MemoryStore::new).clone()
}

#[cfg(target_arch = "wasm32")]
fn default_store() -> DefaultStore {
    api::BrowserStore::new()
}

/// Client for the current target's session store. Constructed per call site,
/// the way views construct their repository handle; the underlying store is
/// the shared persisted one either way.
pub fn make_client() -> ApiClient<DefaultStore> {
    ApiClient::new(api::default_base_url(), Session::new(default_store()))
}

/// Session state for the application.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionState {
    pub info: Option<SessionInfo>,
}

impl SessionState {
    pub fn is_admin(&self) -> bool {
        self.info.as_ref().is_some_and(|u| u.is_admin)
    }
}

/// Get the current session state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Provider component that exposes the persisted session to the tree.
/// Wrap the app with this component.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let session_state = use_signal(|| SessionState {
        info: make_client().session().info(),
    });

    use_context_provider(|| session_state);

    rsx! {
        {children}
    }
}

/// Apply the access gate for a page. Returns `true` when the view should
/// render; otherwise a redirect has been issued and the view should render
/// nothing. Call after hooks, before building the page body.
pub fn gate_or_redirect(page: Page) -> bool {
    match make_client().session().gate(page) {
        Gate::Continue => true,
        Gate::ToLogin => {
            navigate("/login");
            false
        }
        Gate::ToFiles => {
            navigate("/files");
            false
        }
    }
}

/// Whether a page may fetch its data: true only when the gate lets the page
/// render. Load futures consult this first, so a visitor who is about to be
/// redirected never fires the API call behind the page.
pub fn may_fetch(page: Page) -> bool {
    make_client().session().gate(page) == Gate::Continue
}

#[cfg(test)]
mod tests {
    use super::*;

    // The native store is process-wide, so the whole sequence lives in one
    // test to keep the transitions ordered.
    #[test]
    fn fetch_guard_follows_gate() {
        let session = make_client().session().clone();
        session.clear();

        // Anonymous: data pages must not fetch anything.
        assert!(!may_fetch(Page::Files));
        assert!(!may_fetch(Page::Admin));
        assert!(may_fetch(Page::Login));

        session.persist("tok", "alice", false);
        assert!(may_fetch(Page::Files));
        assert!(!may_fetch(Page::Admin));

        session.persist("tok", "root", true);
        assert!(may_fetch(Page::Admin));

        session.clear();
        assert!(!may_fetch(Page::Files));
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Log out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut session = use_session();

    let onclick = move |_| {
        make_client().logout();
        session.set(SessionState::default());
        navigate("/login");
    };

    rsx! {
        button {
            class: "logout-button {class}",
            onclick: onclick,
            "{label}"
        }
    }
}
