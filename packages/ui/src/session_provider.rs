use client::Session;
use dioxus::prelude::*;

/// Loads the credential once at startup and shares it through context.
/// Mount this above every view that talks to the API.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    use_context_provider(|| Signal::new(Session::load()));
    rsx! {
        {children}
    }
}

/// The session installed by [`SessionProvider`].
pub fn use_session() -> Signal<Session> {
    use_context()
}
