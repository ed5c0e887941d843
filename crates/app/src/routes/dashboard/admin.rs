use client::admin::{fetch_tab, AdminDashboardState, AdminTab};
use dioxus::prelude::*;
use shared_ui::{TabBar, TabItem};

use super::tables::{EmployeesTable, TasksTable};
use crate::session::use_api;

fn tab_key(tab: AdminTab) -> &'static str {
    match tab {
        AdminTab::Employees => "employees",
        AdminTab::Tasks => "tasks",
    }
}

fn tab_from_key(key: &str) -> Option<AdminTab> {
    AdminTab::ALL.into_iter().find(|tab| tab_key(*tab) == key)
}

/// Employees and tasks behind a tab bar. Each click on a tab refetches it.
#[component]
pub fn AdminDashboard() -> Element {
    let client = use_api();
    let mut state = use_signal(AdminDashboardState::new);

    let load_tab = use_callback(move |tab: AdminTab| {
        let ticket = state.write().select(tab);
        let client = client.clone();
        spawn(async move {
            let fetched = fetch_tab(&client, ticket.tab()).await;
            state.write().apply(ticket, fetched);
        });
    });

    // Employees is the preselected tab and loads on mount.
    use_effect(move || load_tab.call(AdminTab::Employees));

    let tabs: Vec<TabItem> = AdminTab::ALL
        .into_iter()
        .map(|tab| TabItem::new(tab_key(tab), tab.label()))
        .collect();
    let snapshot = state.read().clone();

    rsx! {
        div { class: "admin-dashboard",
            TabBar {
                tabs,
                active: tab_key(snapshot.tab()),
                on_select: move |key: String| {
                    if let Some(tab) = tab_from_key(&key) {
                        load_tab.call(tab);
                    }
                },
            }
            div { class: "admin-tab-panel",
                match snapshot.tab() {
                    AdminTab::Employees => rsx! {
                        EmployeesTable { state: snapshot.employees().clone() }
                    },
                    AdminTab::Tasks => rsx! { TasksTable { state: snapshot.tasks().clone() } },
                }
            }
        }
    }
}
