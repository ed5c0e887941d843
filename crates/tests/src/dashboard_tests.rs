use client::api;
use client::dashboard::{load_dashboard_view, load_employees, load_tasks, DashboardView};
use pretty_assertions::assert_eq;
use shared_types::{ListState, Role};

use crate::common;

async fn view_for(role: &str) -> DashboardView {
    let server = common::test_server(role).await;
    common::login(&server).await;
    load_dashboard_view(&server.client).await
}

#[tokio::test]
async fn test_known_roles_pick_their_dashboard() {
    assert_eq!(view_for("Admin").await, DashboardView::Admin);
    assert_eq!(view_for("Employee").await, DashboardView::Employee);
    assert_eq!(view_for("Employer").await, DashboardView::Employer);
}

#[tokio::test]
async fn test_unknown_role_is_unauthorized() {
    let view = view_for("Manager").await;
    assert_eq!(view, DashboardView::Unauthorized);
    assert_eq!(view.role(), None);
}

#[tokio::test]
async fn test_role_names_are_case_sensitive() {
    assert_eq!(view_for("admin").await, DashboardView::Unauthorized);
}

#[tokio::test]
async fn test_missing_session_is_unauthorized() {
    let server = common::test_server("Admin").await;

    let view = load_dashboard_view(&server.client).await;
    assert_eq!(view, DashboardView::Unauthorized);
}

#[tokio::test]
async fn test_role_is_fetched_exactly_once() {
    let server = common::test_server("Employer").await;
    common::login(&server).await;

    let view = load_dashboard_view(&server.client).await;
    assert_eq!(view.role(), Some(Role::Employer));
    assert_eq!(server.hits("get_user_role"), 1);
}

#[tokio::test]
async fn test_get_employees_is_idempotent() {
    let server = common::test_server("Admin").await;
    common::login(&server).await;

    let first = api::get_employees(&server.client).await.unwrap();
    let second = api::get_employees(&server.client).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first.employee.len(), 2);
    assert_eq!(first.employee[0].full_name, "Ada Lovelace");
    assert_eq!(server.hits("get_employees"), 2);
}

#[tokio::test]
async fn test_tasks_accept_backend_list_key_and_sparse_rows() {
    let server = common::test_server("Employee").await;
    common::login(&server).await;

    let tasks = api::get_tasks(&server.client).await.unwrap().tasks;

    assert_eq!(tasks.len(), 4);
    assert!(tasks[0].is_completed());
    assert!(!tasks[1].is_completed());
    assert_eq!(tasks[2].id, 12);
    assert_eq!(tasks[2].title, "");
    assert_eq!(tasks[3].title, "Triage inbox");
    assert_eq!(tasks[3].assigned_to_name, "");
    assert!(!tasks[3].is_completed());
}

#[tokio::test]
async fn test_task_failure_yields_empty_list_with_reason() {
    let server = common::test_server("Employee").await;
    common::login(&server).await;
    server.fail_tasks();

    let state = load_tasks(&server.client).await;

    assert!(state.rows().is_empty());
    assert_eq!(state.error(), Some("Tasks are not found"));
}

#[tokio::test]
async fn test_employer_lists_load() {
    let server = common::test_server("Employer").await;
    common::login(&server).await;

    let employees = load_employees(&server.client).await;
    let tasks = load_tasks(&server.client).await;

    assert_eq!(employees.rows().len(), 2);
    assert!(matches!(tasks, ListState::Loaded(ref rows) if rows.len() == 4));
}
