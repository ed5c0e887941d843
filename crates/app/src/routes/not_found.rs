use dioxus::prelude::*;

use crate::routes::Route;

/// Catch-all for paths outside the router.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let missing = route.join("/");

    rsx! {
        main { class: "not-found-page",
            span { class: "not-found-code", "404" }
            h1 { class: "not-found-title", "Nothing here" }
            p { class: "not-found-message",
                "No page is served at "
                code { "/{missing}" }
                "."
            }
            nav { class: "home-links",
                Link { to: Route::Home {}, class: "not-found-link", "Home" }
                Link { to: Route::Login {}, class: "not-found-link", "Login" }
            }
        }
    }
}
