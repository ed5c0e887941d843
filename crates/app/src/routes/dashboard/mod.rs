pub mod admin;
pub mod employee;
pub mod employer;
mod tables;

use client::api;
use client::dashboard::{load_dashboard_view, DashboardView};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdLogOut, LdShield};
use dioxus_free_icons::Icon;
use shared_ui::{Button, ButtonVariant, Card, CardContent, CardHeader, PageHeader, TableSkeleton};

use crate::routes::Route;
use crate::session::use_api;

/// Role-adaptive dashboard. The role is looked up once per mount and picks
/// which dashboard renders.
#[component]
pub fn Dashboard() -> Element {
    let client = use_api();
    let logout_client = client.clone();

    let view = use_resource(move || {
        let client = client.clone();
        async move { load_dashboard_view(&client).await }
    });
    let current = view().unwrap_or_default();

    let sign_out = move |_: MouseEvent| {
        let client = logout_client.clone();
        async move {
            if let Err(e) = api::logout(&client).await {
                tracing::warn!(error = %e, "logout request failed");
            }
            navigator().push(Route::Login {});
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }
        div { class: "dashboard-page",
            PageHeader { title: current.title(),
                if current.role().is_some() {
                    Button { variant: ButtonVariant::Ghost, onclick: sign_out,
                        Icon { icon: LdLogOut, width: 16, height: 16 }
                        "Sign out"
                    }
                }
            }

            match current {
                DashboardView::Loading => rsx! { TableSkeleton {} },
                DashboardView::Admin => rsx! { admin::AdminDashboard {} },
                DashboardView::Employer => rsx! { employer::EmployerDashboard {} },
                DashboardView::Employee => rsx! { employee::EmployeeDashboard {} },
                DashboardView::Unauthorized => rsx! { UnauthorizedNotice {} },
            }
        }
    }
}

/// Shown when the role lookup failed or returned a role this app has no
/// dashboard for.
#[component]
fn UnauthorizedNotice() -> Element {
    rsx! {
        Card { class: "unauthorized-card",
            CardHeader {
                title: "Access denied",
                description: "Your account has no dashboard here, or your session has expired.",
            }
            CardContent {
                div { class: "unauthorized-body",
                    Icon { icon: LdShield, width: 32, height: 32 }
                    Link { to: Route::Login {}, class: "auth-link", "Back to login" }
                }
            }
        }
    }
}

