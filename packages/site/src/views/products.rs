use client::listing::{self, LoadState};
use client::models::Product;
use dioxus::prelude::*;
use ui::{make_backend, ComingSoon, RemoteImage, Spinner};

const FALLBACK_IMAGE: Asset = asset!("/assets/fallback-image.svg");

/// Public product catalog: a static intro followed by the fetched list.
#[component]
pub fn Products() -> Element {
    let backend = use_hook(make_backend);
    let mut state = use_signal(|| LoadState::Loading);

    {
        let backend = backend.clone();
        use_future(move || {
            let backend = backend.clone();
            async move {
                state.set(listing::load_public::<Product, _>(&backend).await);
            }
        });
    }

    let retry_backend = backend.clone();
    let retry = move |_| {
        let backend = retry_backend.clone();
        spawn(async move {
            state.set(LoadState::Loading);
            state.set(listing::load_public::<Product, _>(&backend).await);
        });
    };

    let list = match &*state.read() {
        LoadState::Loading => rsx! {
            Spinner {}
        },
        LoadState::Failed(message) => rsx! {
            div {
                class: "load-error",
                p { "{message}" }
                button { class: "btn btn-primary", onclick: retry, "Try Again" }
            }
        },
        LoadState::Ready(products) if products.is_empty() => rsx! {
            ComingSoon {
                heading: "Products Coming Soon",
                detail: "Our catalog is being prepared. Check back shortly.",
            }
        },
        LoadState::Ready(products) => rsx! {
            div {
                class: "product-grid",
                for product in products.iter() {
                    ProductCard { key: "{product.id}", product: product.clone() }
                }
            }
        },
    };

    rsx! {
        section {
            class: "products-page",
            div {
                class: "products-intro",
                h1 { "Our Products" }
                p {
                    "Tools we build and maintain for our clients, from internal "
                    "dashboards to customer-facing storefronts."
                }
            }
            {list}
        }
    }
}

#[component]
fn ProductCard(product: Product) -> Element {
    rsx! {
        article {
            class: "product-card",
            RemoteImage {
                class: "card-image",
                src: product.image.clone(),
                alt: product.name.clone(),
                fallback: FALLBACK_IMAGE,
            }
            div {
                class: "card-body",
                h3 { "{product.name}" }
                div {
                    class: "post-content",
                    dangerous_inner_html: product.description.clone(),
                }
            }
        }
    }
}
