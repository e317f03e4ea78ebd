use dioxus::prelude::*;

/// Inline spinner for short in-place loads.
#[component]
pub fn Spinner() -> Element {
    rsx! {
        div { class: "spinner", aria_label: "Loading" }
    }
}

/// Gray placeholder cards shown while a public list page loads.
#[component]
pub fn LoadingSkeleton(#[props(default = 3)] count: usize) -> Element {
    rsx! {
        div {
            class: "skeleton-grid",
            for index in 0..count {
                div { key: "{index}", class: "skeleton-card" }
            }
        }
    }
}

/// Placeholder for an empty collection. An empty list is a valid state, not
/// an error.
#[component]
pub fn ComingSoon(heading: String, detail: String) -> Element {
    rsx! {
        div {
            class: "coming-soon",
            h2 { "{heading}" }
            p { "{detail}" }
        }
    }
}
