//! Login page: credential form against `POST /login`.

use api::Page;
use dioxus::prelude::*;
use ui::{gate_or_redirect, make_client, navigate, use_session, use_toasts, SessionState};

/// Login page component. A visitor who already holds a token is redirected to
/// the files page before anything renders.
#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let mut toasts = use_toasts();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut show_password = use_signal(|| false);
    let mut busy = use_signal(|| false);

    if !gate_or_redirect(Page::Login) {
        return rsx! {};
    }

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if busy() {
            return;
        }
        spawn(async move {
            busy.set(true);
            let client = make_client();
            match client.login(&username(), &password()).await {
                Ok(info) => {
                    // Role decides the landing page; the session fields are
                    // already persisted by the client.
                    let target = if info.is_admin { "/admin" } else { "/files" };
                    session.set(SessionState { info: Some(info) });
                    navigate(target);
                }
                Err(err) => {
                    tracing::warn!("login rejected: {err}");
                    toasts.error("Invalid username or password");
                    busy.set(false);
                }
            }
        });
    };

    rsx! {
        div {
            class: "login-container",
            form {
                class: "login-card",
                onsubmit: on_submit,

                h1 { "Driftbox" }
                p { class: "login-subtitle", "Sign in to manage your files" }

                div {
                    class: "form-field",
                    label { r#for: "login-username", "Username" }
                    input {
                        id: "login-username",
                        r#type: "text",
                        autocomplete: "username",
                        value: username(),
                        oninput: move |evt| username.set(evt.value()),
                    }
                }

                div {
                    class: "form-field",
                    label { r#for: "login-password", "Password" }
                    div {
                        class: "password-field",
                        input {
                            id: "login-password",
                            r#type: if show_password() { "text" } else { "password" },
                            autocomplete: "current-password",
                            value: password(),
                            oninput: move |evt| password.set(evt.value()),
                        }
                        button {
                            r#type: "button",
                            class: "toggle-password",
                            onclick: move |_| {
                                let shown = show_password();
                                show_password.set(!shown);
                            },
                            if show_password() { "Hide" } else { "Show" }
                        }
                    }
                }

                button {
                    r#type: "submit",
                    class: "login-button",
                    disabled: busy(),
                    if busy() { "Signing in..." } else { "Sign in" }
                }
            }
        }
    }
}
