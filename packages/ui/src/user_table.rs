use api::UserRecord;
use dioxus::prelude::*;

use crate::format::role_label;
use crate::icons::{FaPen, FaTrash};
use crate::Icon;

/// The roster as returned by the admin listing endpoint. Edit and delete are
/// raised to the admin view; nothing here mutates state.
#[component]
pub fn UserTable(
    users: Vec<UserRecord>,
    on_edit: EventHandler<UserRecord>,
    on_delete: EventHandler<UserRecord>,
) -> Element {
    if users.is_empty() {
        return rsx! {
            div {
                class: "empty-state",
                p { "No users found." }
            }
        };
    }

    rsx! {
        div {
            class: "user-list",
            for user in users {
                div {
                    key: "{user.id}",
                    class: "user-item",
                    div {
                        class: "user-info",
                        strong { "{user.username}" }
                        span {
                            class: if user.is_admin { "user-role admin" } else { "user-role" },
                            {role_label(user.is_admin)}
                        }
                    }
                    div {
                        class: "user-actions",
                        button {
                            class: "action-button",
                            onclick: {
                                let user = user.clone();
                                move |_| on_edit.call(user.clone())
                            },
                            Icon { icon: FaPen, width: 14, height: 14 }
                            span { "Edit" }
                        }
                        button {
                            class: "action-button delete",
                            onclick: {
                                let user = user.clone();
                                move |_| on_delete.call(user.clone())
                            },
                            Icon { icon: FaTrash, width: 14, height: 14 }
                            span { "Delete" }
                        }
                    }
                }
            }
        }
    }
}
