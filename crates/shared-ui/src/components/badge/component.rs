use dioxus::prelude::*;

/// Colour of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeTone {
    #[default]
    Neutral,
    Success,
    Warning,
}

impl BadgeTone {
    fn class(&self) -> &'static str {
        match self {
            BadgeTone::Neutral => "neutral",
            BadgeTone::Success => "success",
            BadgeTone::Warning => "warning",
        }
    }

    /// Completed tasks are green; every other status is still open.
    pub fn for_task(completed: bool) -> Self {
        if completed {
            BadgeTone::Success
        } else {
            BadgeTone::Warning
        }
    }
}

/// Small inline label.
#[component]
pub fn Badge(
    #[props(default)] tone: BadgeTone,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "badge", None, false),
        Attribute::new("data-tone", tone.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..merged,
            {children}
        }
    }
}

/// A task's status text, coloured by whether the task is done.
#[component]
pub fn TaskStatusBadge(status: String, completed: bool) -> Element {
    rsx! {
        Badge { tone: BadgeTone::for_task(completed), "{status}" }
    }
}
