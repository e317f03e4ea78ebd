use client::models::BlogPost;
use dioxus::prelude::*;
use ui::{format, ResourceAdmin};

#[component]
pub fn Blogs() -> Element {
    rsx! {
        ResourceAdmin::<BlogPost> {
            title: "Manage Blogs",
            noun: "blog",
            columns: vec!["Image", "Title", "Author", "Content"],
            render_row: Callback::new(|post: BlogPost| {
                let content = format::excerpt(&post.content, 50);
                rsx! {
                    td {
                        img { class: "thumb", src: "{post.image}", alt: "{post.title}" }
                    }
                    td { "{post.title}" }
                    td { "{post.author}" }
                    td {
                        span { title: "{post.content}", "{content}" }
                    }
                }
            }),
            render_card: Callback::new(|post: BlogPost| {
                let content = format::excerpt(&post.content, 50);
                rsx! {
                    h3 { "{post.title}" }
                    p { "By {post.author}" }
                    p { "{content}" }
                }
            }),
        }
    }
}
