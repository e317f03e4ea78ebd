use dioxus::prelude::*;

use ui::SessionProvider;
use views::{Blogs, Cases, Contacts, Products};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AdminLayout)]
    #[route("/")]
    Root {},
    #[route("/blogs")]
    Blogs {},
    #[route("/cases")]
    Cases {},
    #[route("/products")]
    Products {},
    #[route("/contacts")]
    Contacts {},
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

        SessionProvider {
            Router::<Route> {}
        }
    }
}

#[component]
fn AdminLayout() -> Element {
    rsx! {
        header {
            class: "admin-header",
            span { class: "admin-brand", "Forgepoint Admin" }
            nav {
                Link { to: Route::Blogs {}, "Blogs" }
                Link { to: Route::Cases {}, "Cases" }
                Link { to: Route::Products {}, "Products" }
                Link { to: Route::Contacts {}, "Contacts" }
            }
        }
        main {
            class: "admin-main",
            Outlet::<Route> {}
        }
    }
}

/// Redirect `/` to `/blogs`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Blogs {});
    rsx! {}
}
