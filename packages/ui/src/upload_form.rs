use std::sync::Arc;

use api::{ApiError, ExpiryOption, FileRecord, UploadFile};
use dioxus::html::{FileEngine, HasFileData};
use dioxus::prelude::*;

use crate::format::format_size;
use crate::session::make_client;
use crate::toast::use_toasts;

/// Read the first picked file into memory and stage it for upload.
fn stage_first(engine: Arc<dyn FileEngine>, mut selected: Signal<Option<UploadFile>>) {
    spawn(async move {
        let Some(name) = engine.files().into_iter().next() else {
            return;
        };
        match engine.read_file(&name).await {
            Some(bytes) => selected.set(Some(UploadFile { name, bytes })),
            None => tracing::error!("failed to read picked file"),
        }
    });
}

/// Upload form: drop zone / file picker, retention duration, optional access
/// password. The submit button is disabled while a request is in flight,
/// which is the only duplicate-submission guard.
#[component]
pub fn UploadForm(on_uploaded: EventHandler<FileRecord>) -> Element {
    let mut selected = use_signal(|| Option::<UploadFile>::None);
    let mut duration = use_signal(|| ExpiryOption::OneDay.value().to_string());
    let mut password = use_signal(String::new);
    let mut show_password = use_signal(|| false);
    let mut dragging = use_signal(|| false);
    let mut busy = use_signal(|| false);
    let mut toasts = use_toasts();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if busy() {
            return;
        }
        let file = selected();
        if file.is_none() {
            // Pure client-side validation; no request goes out.
            toasts.error("Please select a file first");
            return;
        }
        spawn(async move {
            busy.set(true);
            let client = make_client();
            let result = client
                .upload(file, ExpiryOption::from_value(&duration()), &password())
                .await;
            match result {
                Ok(record) => {
                    toasts.success("File uploaded successfully!");
                    selected.set(None);
                    password.set(String::new());
                    on_uploaded.call(record);
                }
                Err(ApiError::NoFileSelected) => toasts.error("Please select a file first"),
                Err(err) => {
                    tracing::error!("upload failed: {err}");
                    toasts.error("Upload failed");
                }
            }
            busy.set(false);
        });
    };

    rsx! {
        form {
            class: "upload-form",
            onsubmit: on_submit,

            label {
                class: if dragging() { "drop-zone dragover" } else { "drop-zone" },
                ondragover: move |evt| {
                    evt.prevent_default();
                    dragging.set(true);
                },
                ondragleave: move |_| dragging.set(false),
                ondrop: move |evt| {
                    evt.prevent_default();
                    dragging.set(false);
                    if let Some(engine) = evt.files() {
                        stage_first(engine, selected);
                    }
                },

                input {
                    class: "file-input",
                    r#type: "file",
                    onchange: move |evt| {
                        if let Some(engine) = evt.files() {
                            stage_first(engine, selected);
                        }
                    },
                }

                if let Some(file) = selected() {
                    div {
                        class: "file-preview",
                        strong { "{file.name}" }
                        span { class: "file-size", {format_size(file.bytes.len() as i64)} }
                        p { class: "file-hint", "Click or drag another file to change" }
                    }
                } else {
                    div {
                        class: "drop-zone-idle",
                        p { "Drag & drop a file here or " span { class: "highlight", "click to select" } }
                        p { class: "file-hint", "Any file type" }
                    }
                }
            }

            div {
                class: "form-field",
                label { r#for: "upload-duration", "Keep for" }
                select {
                    id: "upload-duration",
                    value: duration(),
                    onchange: move |evt| duration.set(evt.value()),
                    for opt in ExpiryOption::ALL {
                        option { value: opt.value(), {opt.label()} }
                    }
                }
            }

            div {
                class: "form-field",
                label { r#for: "upload-password", "Password (optional)" }
                div {
                    class: "password-field",
                    input {
                        id: "upload-password",
                        r#type: if show_password() { "text" } else { "password" },
                        placeholder: "Leave empty for no password",
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
                class: "upload-button",
                disabled: busy(),
                if busy() { "Uploading..." } else { "Upload File" }
            }
        }
    }
}
