use client::admin::{MessageKind, StatusMessage};
use dioxus::prelude::*;

/// Status banner shown above an admin form after an operation completes.
#[component]
pub fn Banner(message: StatusMessage) -> Element {
    let class = match message.kind {
        MessageKind::Success => "banner banner-success",
        MessageKind::Error => "banner banner-error",
    };
    rsx! {
        p { class, "{message.text}" }
    }
}
