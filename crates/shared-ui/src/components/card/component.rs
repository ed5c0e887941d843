use dioxus::prelude::*;

/// Panel container used by the auth pages and dashboard sections.
#[component]
pub fn Card(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            {children}
        }
    }
}

/// Title line of a card, with an optional muted description under it.
#[component]
pub fn CardHeader(title: String, #[props(default)] description: Option<String>) -> Element {
    rsx! {
        div { class: "card-header",
            h2 { class: "card-title", "{title}" }
            if let Some(text) = description {
                p { class: "card-description", "{text}" }
            }
        }
    }
}

#[component]
pub fn CardContent(children: Element) -> Element {
    rsx! {
        div { class: "card-content", {children} }
    }
}

#[component]
pub fn CardFooter(children: Element) -> Element {
    rsx! {
        div { class: "card-footer", {children} }
    }
}
