use dioxus::prelude::*;

/// Image that swaps in a bundled fallback when the remote URL fails to load.
#[component]
pub fn RemoteImage(
    src: String,
    alt: String,
    #[props(default)] class: String,
    fallback: Asset,
) -> Element {
    let mut failed = use_signal(|| false);
    let shown = if failed() {
        fallback.to_string()
    } else {
        src.clone()
    };

    rsx! {
        img {
            class,
            src: shown,
            alt,
            onerror: move |_| failed.set(true),
        }
    }
}
