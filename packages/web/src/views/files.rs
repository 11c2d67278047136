//! Files page: upload form plus the current file set.

use api::{FileRecord, Page};
use dioxus::prelude::*;
use ui::{
    copy_to_clipboard, gate_or_redirect, make_client, may_fetch, use_toasts, FileList, Navbar,
    Toasts, UploadForm,
};

async fn load_files(mut files: Signal<Vec<FileRecord>>, mut toasts: Toasts) {
    // Gate first: a visitor who is being redirected away never fires the call.
    if !may_fetch(Page::Files) {
        return;
    }
    match make_client().list_files().await {
        Ok(list) => files.set(list),
        Err(err) => {
            tracing::error!("listing files failed: {err}");
            toasts.error("Failed to load files");
        }
    }
}

#[component]
pub fn Files() -> Element {
    let files = use_signal(Vec::<FileRecord>::new);
    let mut toasts = use_toasts();

    // Fetch the current set on mount; every mutation below refetches rather
    // than patching the local copy.
    let _loader = use_resource(move || load_files(files, toasts));

    if !gate_or_redirect(Page::Files) {
        return rsx! {};
    }

    let mut copy_share_link = move |id: &str| {
        let link = make_client().share_link(id);
        if copy_to_clipboard(&link) {
            toasts.success("Link copied to clipboard!");
        } else {
            toasts.error("Failed to copy link");
        }
    };

    let on_uploaded = move |record: FileRecord| {
        copy_share_link(&record.id);
        spawn(load_files(files, toasts));
    };

    let on_copy = move |file: FileRecord| copy_share_link(&file.id);

    let on_delete = move |file: FileRecord| {
        spawn(async move {
            let mut toasts = toasts;
            match make_client().delete_file(&file.id, &api::BrowserConfirm).await {
                Ok(true) => {
                    toasts.success("File deleted successfully");
                    load_files(files, toasts).await;
                }
                // Declined in the confirm dialog: nothing was sent, nothing changes.
                Ok(false) => {}
                Err(err) => {
                    tracing::error!("deleting file failed: {err}");
                    toasts.error("Failed to delete file");
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
                h2 { "Upload" }
                UploadForm { on_uploaded: on_uploaded }
            }

            section {
                class: "panel",
                h2 { "Your files" }
                FileList {
                    files: files(),
                    on_copy: on_copy,
                    on_delete: on_delete,
                }
            }
        }
    }
}
