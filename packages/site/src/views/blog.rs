use client::listing::{self, LoadState};
use client::models::BlogPost;
use dioxus::prelude::*;
use ui::{format, make_backend, ComingSoon, LoadingSkeleton, RemoteImage};

const FALLBACK_IMAGE: Asset = asset!("/assets/fallback-image.svg");

/// Public blog listing: newest post featured on top, the rest in a grid.
#[component]
pub fn Blog() -> Element {
    let backend = use_hook(make_backend);
    let mut state = use_signal(|| LoadState::Loading);

    {
        let backend = backend.clone();
        use_future(move || {
            let backend = backend.clone();
            async move {
                state.set(listing::load_public::<BlogPost, _>(&backend).await);
            }
        });
    }

    let retry_backend = backend.clone();
    let retry = move |_| {
        let backend = retry_backend.clone();
        spawn(async move {
            state.set(LoadState::Loading);
            state.set(listing::load_public::<BlogPost, _>(&backend).await);
        });
    };

    let body = match &*state.read() {
        LoadState::Loading => rsx! {
            LoadingSkeleton {}
        },
        LoadState::Failed(message) => rsx! {
            div {
                class: "load-error",
                h2 { "Oops!" }
                p { "{message}" }
                button { class: "btn btn-primary", onclick: retry, "Try Again" }
            }
        },
        LoadState::Ready(posts) if posts.is_empty() => rsx! {
            ComingSoon {
                heading: "Blog Posts Coming Soon!",
                detail: "We are working on fresh articles. Check back shortly.",
            }
        },
        LoadState::Ready(posts) => {
            let featured = posts.first().map(|post| {
                rsx! {
                    FeaturedPost { post: post.clone() }
                }
            });
            rsx! {
                {featured}
                div {
                    class: "blog-grid",
                    for post in posts.iter().skip(1) {
                        BlogCard { key: "{post.id}", post: post.clone() }
                    }
                }
            }
        }
    };

    rsx! {
        section {
            class: "blog-page",
            h1 { "From the Blog" }
            {body}
        }
    }
}

#[component]
fn FeaturedPost(post: BlogPost) -> Element {
    let date = format::format_date(&post.created_at);
    rsx! {
        article {
            class: "featured-post",
            RemoteImage {
                class: "featured-image",
                src: post.image.clone(),
                alt: post.title.clone(),
                fallback: FALLBACK_IMAGE,
            }
            div {
                class: "featured-body",
                h2 { "{post.title}" }
                p { class: "post-meta", "By {post.author} · {date}" }
                div {
                    class: "post-content",
                    dangerous_inner_html: post.content.clone(),
                }
            }
        }
    }
}

#[component]
fn BlogCard(post: BlogPost) -> Element {
    let date = format::format_date(&post.created_at);
    rsx! {
        article {
            class: "blog-card",
            RemoteImage {
                class: "card-image",
                src: post.image.clone(),
                alt: post.title.clone(),
                fallback: FALLBACK_IMAGE,
            }
            div {
                class: "card-body",
                h3 { "{post.title}" }
                p { class: "post-meta", "By {post.author} · {date}" }
                p { "{post.description}" }
            }
        }
    }
}
