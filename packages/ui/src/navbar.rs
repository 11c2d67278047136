use dioxus::prelude::*;

use crate::session::{use_session, LogoutButton};

/// Top bar shared by the files and admin pages: brand, section links, current
/// user, logout. The admin link only renders for admins; the server still
/// enforces the role on every call behind it.
#[component]
pub fn Navbar() -> Element {
    let session = use_session();
    let state = session();

    rsx! {
        header {
            class: "navbar",
            a { class: "navbar-brand", href: "/files", "Driftbox" }
            nav {
                class: "navbar-links",
                a { href: "/files", "Files" }
                if state.is_admin() {
                    a { href: "/admin", "Admin" }
                }
            }
            div {
                class: "navbar-session",
                if let Some(user) = state.info {
                    span { class: "navbar-user", "{user.username}" }
                }
                LogoutButton {}
            }
        }
    }
}
