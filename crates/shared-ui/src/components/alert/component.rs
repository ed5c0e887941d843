use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertTone {
    #[default]
    Error,
    Success,
}

impl AlertTone {
    fn class(&self) -> &'static str {
        match self {
            AlertTone::Error => "alert alert-error",
            AlertTone::Success => "alert alert-success",
        }
    }
}

/// Inline message box for form feedback and failed list fetches.
#[component]
pub fn Alert(#[props(default)] tone: AlertTone, message: String) -> Element {
    rsx! {
        div { class: tone.class(), role: "alert", "{message}" }
    }
}
