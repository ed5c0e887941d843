use client::dashboard::{load_employees, load_tasks};
use dioxus::prelude::*;

use super::tables::{EmployeesTable, TasksTable};
use crate::session::use_api;

/// Employees and tasks side by side, each fetched once.
#[component]
pub fn EmployerDashboard() -> Element {
    let client = use_api();
    let tasks_client = client.clone();

    let employees = use_resource(move || {
        let client = client.clone();
        async move { load_employees(&client).await }
    });
    let tasks = use_resource(move || {
        let client = tasks_client.clone();
        async move { load_tasks(&client).await }
    });

    rsx! {
        div { class: "dashboard-sections",
            section { class: "dashboard-section",
                h2 { class: "dashboard-section-title", "Employees" }
                EmployeesTable { state: employees().unwrap_or_default() }
            }
            section { class: "dashboard-section",
                h2 { class: "dashboard-section-title", "Tasks" }
                TasksTable { state: tasks().unwrap_or_default() }
            }
        }
    }
}
