use client::models::Product;
use dioxus::prelude::*;
use ui::{format, ResourceAdmin};

#[component]
pub fn Products() -> Element {
    rsx! {
        ResourceAdmin::<Product> {
            title: "Manage Products",
            noun: "product",
            columns: vec!["Image", "Name", "Description"],
            render_row: Callback::new(|product: Product| {
                let description = format::excerpt(&product.description, 50);
                rsx! {
                    td {
                        img { class: "thumb", src: "{product.image}", alt: "{product.name}" }
                    }
                    td { "{product.name}" }
                    td {
                        span { title: "{product.description}", "{description}" }
                    }
                }
            }),
            render_card: Callback::new(|product: Product| {
                let description = format::excerpt(&product.description, 50);
                rsx! {
                    h3 { "{product.name}" }
                    p { "{description}" }
                }
            }),
        }
    }
}
