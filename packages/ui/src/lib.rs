//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod browser;
pub use browser::{copy_to_clipboard, navigate};

mod session;
pub use session::{
    gate_or_redirect, make_client, may_fetch, use_session, LogoutButton, SessionProvider,
    SessionState,
};

mod toast;
pub use toast::{use_toasts, Toast, ToastLevel, ToastProvider, Toasts};

mod navbar;
pub use navbar::Navbar;

pub mod format;

mod upload_form;
pub use upload_form::UploadForm;

mod file_list;
pub use file_list::FileList;

mod user_table;
pub use user_table::UserTable;

mod user_dialogs;
pub use user_dialogs::{AddUserDialog, EditUserDialog};
