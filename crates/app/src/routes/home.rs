use dioxus::prelude::*;
use shared_ui::{Card, CardContent, CardHeader};

use crate::routes::Route;

/// Landing page pointing at the two auth forms.
#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    title: "Employee Management",
                    description: "Track employees and the tasks assigned to them.",
                }
                CardContent {
                    div { class: "home-links",
                        Link { to: Route::Login {}, class: "home-link primary", "Login" }
                        Link { to: Route::Register {}, class: "home-link secondary", "Sign up" }
                    }
                }
            }
        }
    }
}
