//! Plain form controls used by the admin create forms.

use client::backend::FilePart;
use dioxus::prelude::*;

#[component]
pub fn Label(html_for: String, children: Element) -> Element {
    rsx! {
        label { class: "form-label", r#for: html_for, {children} }
    }
}

#[component]
pub fn TextInput(
    id: String,
    placeholder: String,
    value: String,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        input {
            id,
            class: "form-input",
            r#type: "text",
            placeholder,
            value,
            oninput: move |evt| oninput.call(evt),
        }
    }
}

#[component]
pub fn TextArea(
    id: String,
    placeholder: String,
    value: String,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        textarea {
            id,
            class: "form-input form-textarea",
            placeholder,
            value,
            oninput: move |evt| oninput.call(evt),
        }
    }
}

/// Image picker. Reads the selected file off the file engine and hands the
/// bytes up as a [`FilePart`].
#[component]
pub fn FileInput(id: String, on_select: EventHandler<FilePart>) -> Element {
    rsx! {
        input {
            id,
            class: "form-input",
            r#type: "file",
            accept: "image/*",
            onchange: move |evt: FormEvent| {
                let Some(files) = evt.files() else {
                    return;
                };
                let Some(name) = files.files().into_iter().next() else {
                    return;
                };
                spawn(async move {
                    match files.read_file(&name).await {
                        Some(bytes) => on_select.call(FilePart {
                            mime: mime_of(&name).to_string(),
                            filename: name,
                            bytes,
                        }),
                        None => tracing::warn!(file = %name, "could not read selected file"),
                    }
                });
            },
        }
    }
}

fn mime_of(filename: &str) -> &'static str {
    let ext = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}
