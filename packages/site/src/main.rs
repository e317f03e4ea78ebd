use dioxus::prelude::*;

use views::{Blog, Products};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(SiteLayout)]
    #[route("/")]
    Root {},
    #[route("/blog")]
    Blog {},
    #[route("/products")]
    Products {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: ui::UI_CSS }

        Router::<Route> {}
    }
}

#[component]
fn SiteLayout() -> Element {
    rsx! {
        header {
            class: "site-header",
            span { class: "site-brand", "Forgepoint" }
            nav {
                Link { to: Route::Blog {}, "Blog" }
                Link { to: Route::Products {}, "Products" }
            }
        }
        main {
            class: "site-main",
            Outlet::<Route> {}
        }
    }
}

/// Redirect `/` to `/blog`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Blog {});
    rsx! {}
}
