use api::UserRecord;
use dioxus::prelude::*;

/// Modal form for creating a user. Submits `(username, password, is_admin)`.
#[component]
pub fn AddUserDialog(
    on_submit: EventHandler<(String, String, bool)>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut is_admin = use_signal(|| false);

    let handle_submit = move |_| {
        let name = username().trim().to_string();
        if name.is_empty() || password().is_empty() {
            return;
        }
        on_submit.call((name, password(), is_admin()));
    };

    rsx! {
        div {
            class: "modal-overlay",
            div {
                class: "modal",
                h2 { "New User" }

                div {
                    class: "form-field",
                    label { r#for: "new-username", "Username" }
                    input {
                        id: "new-username",
                        r#type: "text",
                        value: username(),
                        oninput: move |evt| username.set(evt.value()),
                    }
                }

                div {
                    class: "form-field",
                    label { r#for: "new-password", "Password" }
                    input {
                        id: "new-password",
                        r#type: "password",
                        value: password(),
                        oninput: move |evt| password.set(evt.value()),
                    }
                }

                div {
                    class: "form-field checkbox",
                    label {
                        input {
                            r#type: "checkbox",
                            checked: is_admin(),
                            onchange: move |evt| is_admin.set(evt.checked()),
                        }
                        "Administrator"
                    }
                }

                div {
                    class: "form-actions",
                    button { class: "primary", onclick: handle_submit, "Create" }
                    button { class: "secondary", onclick: move |_| on_cancel.call(()), "Cancel" }
                }
            }
        }
    }
}

/// Modal form for editing a user. Submits `(username, new_password, is_admin)`;
/// an empty password means "leave it alone" and the profile-only update is
/// issued without the password call.
#[component]
pub fn EditUserDialog(
    user: UserRecord,
    on_submit: EventHandler<(String, String, bool)>,
    on_cancel: EventHandler<()>,
) -> Element {
    let initial_username = user.username.clone();
    let initial_admin = user.is_admin;
    let mut username = use_signal(move || initial_username);
    let mut password = use_signal(String::new);
    let mut is_admin = use_signal(move || initial_admin);

    let handle_submit = move |_| {
        let name = username().trim().to_string();
        if name.is_empty() {
            return;
        }
        on_submit.call((name, password(), is_admin()));
    };

    rsx! {
        div {
            class: "modal-overlay",
            div {
                class: "modal",
                h2 { "Edit User" }

                div {
                    class: "form-field",
                    label { r#for: "edit-username", "Username" }
                    input {
                        id: "edit-username",
                        r#type: "text",
                        value: username(),
                        oninput: move |evt| username.set(evt.value()),
                    }
                }

                div {
                    class: "form-field",
                    label { r#for: "edit-password", "New password" }
                    input {
                        id: "edit-password",
                        r#type: "password",
                        placeholder: "Leave empty to keep current",
                        value: password(),
                        oninput: move |evt| password.set(evt.value()),
                    }
                }

                div {
                    class: "form-field checkbox",
                    label {
                        input {
                            r#type: "checkbox",
                            checked: is_admin(),
                            onchange: move |evt| is_admin.set(evt.checked()),
                        }
                        "Administrator"
                    }
                }

                div {
                    class: "form-actions",
                    button { class: "primary", onclick: handle_submit, "Save" }
                    button { class: "secondary", onclick: move |_| on_cancel.call(()), "Cancel" }
                }
            }
        }
    }
}
