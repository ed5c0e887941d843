use client::dashboard::load_tasks;
use dioxus::prelude::*;

use super::tables::TasksTable;
use crate::session::use_api;

#[component]
pub fn EmployeeDashboard() -> Element {
    let client = use_api();
    let tasks = use_resource(move || {
        let client = client.clone();
        async move { load_tasks(&client).await }
    });

    rsx! {
        section { class: "dashboard-section",
            h2 { class: "dashboard-section-title", "My Tasks" }
            TasksTable { state: tasks().unwrap_or_default() }
        }
    }
}
