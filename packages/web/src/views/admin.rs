//! Admin page: user roster CRUD. The gate keeps non-admins out of the view;
//! the server enforces the role again on every call.

use api::{Page, UserRecord};
use dioxus::prelude::*;
use ui::{
    gate_or_redirect, make_client, may_fetch, use_toasts, AddUserDialog, EditUserDialog, Navbar,
    Toasts, UserTable,
};

async fn load_users(mut users: Signal<Vec<UserRecord>>, mut toasts: Toasts) {
    // Gate first: a visitor who is being redirected away never fires the call.
    if !may_fetch(Page::Admin) {
        return;
    }
    match make_client().list_users().await {
        Ok(list) => users.set(list),
        Err(err) => {
            tracing::error!("listing users failed: {err}");
            toasts.error("Failed to load users");
        }
    }
}

#[component]
pub fn Admin() -> Element {
    let users = use_signal(Vec::<UserRecord>::new);
    let mut show_add = use_signal(|| false);
    let mut editing = use_signal(|| Option::<UserRecord>::None);
    let toasts = use_toasts();

    let _loader = use_resource(move || load_users(users, toasts));

    if !gate_or_redirect(Page::Admin) {
        return rsx! {};
    }

    let on_create = move |(username, password, is_admin): (String, String, bool)| {
        spawn(async move {
            let mut toasts = toasts;
            match make_client().create_user(&username, &password, is_admin).await {
                Ok(()) => {
                    toasts.success("User created successfully");
                    show_add.set(false);
                    load_users(users, toasts).await;
                }
                Err(err) => {
                    tracing::error!("creating user failed: {err}");
                    toasts.error("Failed to create user");
                }
            }
        });
    };

    let on_save = move |(username, new_password, is_admin): (String, String, bool)| {
        let Some(user) = editing() else {
            return;
        };
        spawn(async move {
            let mut toasts = toasts;
            match make_client()
                .save_user(&user.id, &username, is_admin, &new_password)
                .await
            {
                Ok(()) => {
                    toasts.success("User updated successfully");
                    editing.set(None);
                    load_users(users, toasts).await;
                }
                Err(err) => {
                    tracing::error!("updating user failed: {err}");
                    toasts.error("Failed to update user");
                }
            }
        });
    };

    let on_delete = move |user: UserRecord| {
        spawn(async move {
            let mut toasts = toasts;
            match make_client().delete_user(&user.id, &api::BrowserConfirm).await {
                Ok(true) => {
                    toasts.success("User deleted successfully");
                    load_users(users, toasts).await;
                }
                Ok(false) => {}
                Err(err) => {
                    tracing::error!("deleting user failed: {err}");
                    toasts.error("Failed to delete user");
                }
            }
        });
    };

    rsx! {
        Navbar {}

        main {
            class: "page",
            section {
                class: "panel",
                div {
                    class: "panel-header",
                    h2 { "Users" }
                    button {
                        class: "primary",
                        onclick: move |_| show_add.set(true),
                        "Add user"
                    }
                }

                UserTable {
                    users: users(),
                    on_edit: move |user| editing.set(Some(user)),
                    on_delete: on_delete,
                }
            }
        }

        if show_add() {
            AddUserDialog {
                on_submit: on_create,
                on_cancel: move |_| show_add.set(false),
            }
        }

        if let Some(user) = editing() {
            EditUserDialog {
                user: user,
                on_submit: on_save,
                on_cancel: move |_| editing.set(None),
            }
        }
    }
}
