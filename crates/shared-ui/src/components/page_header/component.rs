use dioxus::prelude::*;

/// Dashboard heading with room for actions on the right.
#[component]
pub fn PageHeader(title: String, #[props(default)] children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "page-header",
            h1 { class: "page-title", "{title}" }
            div { class: "page-actions", {children} }
        }
    }
}
