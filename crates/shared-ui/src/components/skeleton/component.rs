use dioxus::prelude::*;

/// Pulsing placeholder bar.
#[component]
pub fn Skeleton(#[props(extends = GlobalAttributes)] attributes: Vec<Attribute>) -> Element {
    let base = vec![Attribute::new("class", "skeleton", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
        }
    }
}

/// Placeholder rows shown while a table's data is in flight.
#[component]
pub fn TableSkeleton(#[props(default = 3)] rows: usize) -> Element {
    rsx! {
        div { class: "table-skeleton",
            for i in 0..rows {
                Skeleton { key: "{i}", style: "height: 2rem; width: 100%;" }
            }
        }
    }
}
