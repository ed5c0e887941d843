use dioxus::prelude::*;

/// One entry of a [`TabBar`].
#[derive(Debug, Clone, PartialEq)]
pub struct TabItem {
    pub key: String,
    pub label: String,
}

impl TabItem {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// Row of mutually exclusive tab buttons.
///
/// The bar only reports clicks; the caller owns which tab is active so it can
/// start loading that tab's data in the same handler.
#[component]
pub fn TabBar(tabs: Vec<TabItem>, active: String, on_select: EventHandler<String>) -> Element {
    let buttons = tabs.into_iter().map(|tab| {
        let is_active = tab.key == active;
        let key = tab.key.clone();
        rsx! {
            TabButton {
                key: "{tab.key}",
                active: is_active,
                label: tab.label,
                onclick: move |_| on_select.call(key.clone()),
            }
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "tab-bar", role: "tablist", {buttons} }
    }
}

#[component]
fn TabButton(active: bool, label: String, onclick: EventHandler<MouseEvent>) -> Element {
    rsx! {
        button {
            r#type: "button",
            role: "tab",
            class: if active { "tab-button active" } else { "tab-button" },
            "aria-selected": "{active}",
            onclick: move |evt| onclick.call(evt),
            "{label}"
        }
    }
}
