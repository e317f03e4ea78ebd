use client::models::ContactSubmission;
use dioxus::prelude::*;
use ui::{format, ResourceAdmin};

/// Read-and-delete only: submissions come in through the public contact
/// form, so there is no create form here.
#[component]
pub fn Contacts() -> Element {
    rsx! {
        ResourceAdmin::<ContactSubmission> {
            title: "Contact Submissions",
            noun: "contact",
            columns: vec!["Name", "Email", "Number", "Message", "Received"],
            render_row: Callback::new(|contact: ContactSubmission| {
                let received = format::format_datetime(&contact.created_at);
                rsx! {
                    td { "{contact.name}" }
                    td { "{contact.email}" }
                    td { "{contact.number}" }
                    td { "{contact.message}" }
                    td { "{received}" }
                }
            }),
            render_card: Callback::new(|contact: ContactSubmission| {
                let received = format::format_datetime(&contact.created_at);
                rsx! {
                    h3 { "{contact.name}" }
                    p { "{contact.email} · {contact.number}" }
                    p { "{contact.message}" }
                    p { "{received}" }
                }
            }),
        }
    }
}
