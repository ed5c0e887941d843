use client::config::load_client_config;
use client::ApiClient;
use dioxus::prelude::*;

mod delay;
mod routes;
mod session;
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Built once; every route reaches the backend through this client.
    let client = use_hook(|| ApiClient::new(load_client_config()));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        match client {
            Ok(client) => rsx! {
                session::ApiProvider { client, Router::<Route> {} }
            },
            Err(e) => {
                tracing::warn!(error = %e, "failed to build API client");
                rsx! {
                    div { class: "startup-error",
                        shared_ui::Alert { message: e.to_string() }
                    }
                }
            }
        }
    }
}
