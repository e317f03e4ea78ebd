//! The admin screen, written once and configured per resource.
//!
//! Every collection gets the same chrome: status banner, create form built
//! from the resource's field schema, a table (desktop) and cards (mobile) of
//! the current records, and a delete-confirmation modal. What varies per
//! resource is the entity type, the column set and the row/card renderers.

use client::admin::{self, AdminState, Phase};
use client::resource::{FieldDef, FieldKind, Resource};
use dioxus::prelude::*;

use crate::format::title_case;
use crate::{
    make_backend, use_session, Banner, ConfirmDeleteDialog, FileInput, Label, RichTextArea,
    Spinner, TextArea, TextInput,
};

/// Generic admin screen for one [`Resource`] collection.
///
/// `render_row` returns the data cells of a table row; `render_card` returns
/// the body of a mobile card. The screen appends the delete control to both.
#[component]
pub fn ResourceAdmin<R: Resource>(
    title: String,
    noun: String,
    columns: Vec<&'static str>,
    render_row: Callback<R, Element>,
    render_card: Callback<R, Element>,
) -> Element {
    let backend = use_hook(make_backend);
    let session = use_session();
    let mut state = use_signal(AdminState::<R>::new);

    {
        let backend = backend.clone();
        use_future(move || {
            let backend = backend.clone();
            async move {
                state.write().begin_load();
                let session = session.peek().clone();
                let outcome = admin::fetch_list::<R, _>(&backend, &session).await;
                state.write().apply_load(outcome);
            }
        });
    }

    let submit_backend = backend.clone();
    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if state.peek().phase != Phase::Idle {
            return;
        }
        let backend = submit_backend.clone();
        spawn(async move {
            let draft = state.peek().draft.clone();
            let session = session.peek().clone();
            state.write().begin_create();
            let outcome = admin::submit_create::<R, _>(&backend, &session, &draft).await;
            state.write().apply_create(outcome);
        });
    };

    let delete_backend = backend.clone();
    let on_confirm = move |_: ()| {
        let backend = delete_backend.clone();
        spawn(async move {
            let Some(id) = state.write().begin_confirmed_delete() else {
                return;
            };
            let session = session.peek().clone();
            let outcome = admin::delete_item::<R, _>(&backend, &session, &id).await;
            state.write().apply_delete(outcome);
        });
    };

    let snapshot = state.read();
    let submitting = snapshot.phase == Phase::Submitting;
    let deleting = matches!(snapshot.phase, Phase::Deleting(_));
    let modal_open = snapshot.modal_open();
    let loading = snapshot.phase == Phase::Loading && snapshot.items.is_empty();
    let items = snapshot.items.clone();
    let banner = snapshot
        .message
        .clone()
        .map(|message| rsx! { Banner { message } });
    drop(snapshot);

    let form_heading = format!("Add New {}", title_case(&noun));
    let submit_label = format!("Add {}", title_case(&noun));
    let empty_note = format!("No {} found.", R::ENDPOINT);

    let form = (!R::FIELDS.is_empty()).then(|| {
        rsx! {
            form {
                class: "admin-form",
                onsubmit: onsubmit,
                h2 { "{form_heading}" }
                for field in R::FIELDS {
                    div {
                        key: "{field.name}",
                        class: "form-group",
                        Label { html_for: field.name.to_string(), "{field.label}" }
                        {field_control(field, state)}
                    }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: submitting,
                    if submitting { "Adding..." } else { "{submit_label}" }
                }
            }
        }
    });

    let rows = items.iter().map(|item| {
        let id = item.id().to_string();
        let delete_id = id.clone();
        let cells = render_row.call(item.clone());
        rsx! {
            tr {
                key: "{id}",
                {cells}
                td {
                    button {
                        class: "btn btn-danger btn-small",
                        onclick: move |_| state.write().request_delete(delete_id.clone()),
                        "Delete"
                    }
                }
            }
        }
    });

    let cards = items.iter().map(|item| {
        let id = item.id().to_string();
        let delete_id = id.clone();
        let body = render_card.call(item.clone());
        rsx! {
            div {
                key: "{id}",
                class: "admin-card",
                {body}
                button {
                    class: "btn btn-danger btn-small",
                    onclick: move |_| state.write().request_delete(delete_id.clone()),
                    "Delete"
                }
            }
        }
    });

    let modal = modal_open.then(|| {
        rsx! {
            ConfirmDeleteDialog {
                noun: noun.clone(),
                busy: deleting,
                on_confirm: on_confirm,
                on_cancel: move |_| state.write().cancel_delete(),
            }
        }
    });

    rsx! {
        div {
            class: "admin-screen",
            h1 { "{title}" }
            {banner}
            {form}
            if loading {
                Spinner {}
            } else if items.is_empty() {
                p { class: "empty-note", "{empty_note}" }
            } else {
                table {
                    class: "admin-table",
                    thead {
                        tr {
                            for column in columns.iter() {
                                th { key: "{column}", "{column}" }
                            }
                            th { "Actions" }
                        }
                    }
                    tbody { {rows} }
                }
                div { class: "admin-cards", {cards} }
            }
            {modal}
        }
    }
}

fn field_control<R: Resource>(field: &'static FieldDef, mut state: Signal<AdminState<R>>) -> Element {
    let value = state.read().draft.text(field.name).to_string();
    match field.kind {
        FieldKind::Text => rsx! {
            TextInput {
                id: field.name.to_string(),
                placeholder: field.placeholder.to_string(),
                value,
                oninput: move |evt: FormEvent| state.write().update_text(field.name, evt.value()),
            }
        },
        FieldKind::TextArea => rsx! {
            TextArea {
                id: field.name.to_string(),
                placeholder: field.placeholder.to_string(),
                value,
                oninput: move |evt: FormEvent| state.write().update_text(field.name, evt.value()),
            }
        },
        FieldKind::RichText => rsx! {
            RichTextArea {
                id: field.name.to_string(),
                placeholder: field.placeholder.to_string(),
                value,
                on_change: move |html: String| state.write().update_text(field.name, html),
            }
        },
        FieldKind::File => {
            let chosen = state
                .read()
                .draft
                .file()
                .map(|file| file.filename.clone())
                .map(|name| rsx! { small { class: "file-note", "{name}" } });
            rsx! {
                FileInput {
                    id: field.name.to_string(),
                    on_select: move |part| state.write().attach_file(part),
                }
                {chosen}
            }
        }
    }
}
