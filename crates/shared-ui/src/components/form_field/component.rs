use dioxus::prelude::*;

/// Labelled input for the auth forms, with an inline error under it.
#[component]
pub fn FormField(
    label: String,
    name: String,
    value: String,
    on_input: EventHandler<FormEvent>,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] placeholder: String,
    #[props(default)] error: Option<String>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "form-field",
            label { class: "form-field-label", r#for: "{name}", "{label}" }
            input {
                class: if error.is_some() {
                    "form-field-input invalid"
                } else {
                    "form-field-input"
                },
                id: "{name}",
                name: "{name}",
                r#type: "{input_type}",
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |evt| on_input.call(evt),
            }
            if let Some(err) = &error {
                div { class: "form-field-error", "{err}" }
            }
        }
    }
}
