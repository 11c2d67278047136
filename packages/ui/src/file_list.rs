use api::FileRecord;
use dioxus::prelude::*;

use crate::format::file_meta;
use crate::icons::{FaCopy, FaTrash};
use crate::Icon;

/// The current file set. Purely presentational: copy and delete are raised to
/// the owning view, which talks to the API and refreshes this list.
#[component]
pub fn FileList(
    files: Vec<FileRecord>,
    on_copy: EventHandler<FileRecord>,
    on_delete: EventHandler<FileRecord>,
) -> Element {
    if files.is_empty() {
        return rsx! {
            div {
                class: "empty-state",
                p { "No files yet. Upload one above." }
            }
        };
    }

    // Build the row view-models up front; the markup below is purely layout.
    let rows: Vec<(FileRecord, String)> = files
        .into_iter()
        .map(|file| {
            let meta = file_meta(&file);
            (file, meta)
        })
        .collect();

    rsx! {
        div {
            class: "file-list",
            for (file, meta) in rows {
                div {
                    key: "{file.id}",
                    class: "file-item",
                    div {
                        class: "file-info",
                        strong { "{file.name}" }
                        p { class: "file-meta", "{meta}" }
                    }
                    div {
                        class: "file-actions",
                        button {
                            class: "action-button",
                            onclick: {
                                let file = file.clone();
                                move |_| on_copy.call(file.clone())
                            },
                            Icon { icon: FaCopy, width: 14, height: 14 }
                            span { "Copy Link" }
                        }
                        button {
                            class: "action-button delete",
                            onclick: {
                                let file = file.clone();
                                move |_| on_delete.call(file.clone())
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
