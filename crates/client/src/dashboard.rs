//! Role-based selection of the dashboard variant.

use shared_types::{ApiError, Employee, ListState, Role, RoleResponse, Task};

use crate::api;
use crate::transport::ApiClient;

/// What the dashboard page shows.
///
/// Starts in `Loading`; one role lookup moves it to exactly one of the other
/// states, where it stays until the page is remounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardView {
    #[default]
    Loading,
    Admin,
    Employee,
    Employer,
    Unauthorized,
}

impl DashboardView {
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Admin => DashboardView::Admin,
            Role::Employee => DashboardView::Employee,
            Role::Employer => DashboardView::Employer,
        }
    }

    /// Outcome of the role lookup. Unrecognized roles and failures both end
    /// in `Unauthorized`.
    pub fn from_role_result(result: Result<RoleResponse, ApiError>) -> Self {
        match result {
            Ok(resp) => match resp.recognized_role() {
                Some(role) => Self::for_role(role),
                None => {
                    tracing::info!(
                        role = %resp.role,
                        "unrecognized role, showing unauthorized view"
                    );
                    DashboardView::Unauthorized
                }
            },
            Err(e) => {
                tracing::info!(error = %e, "role lookup failed, showing unauthorized view");
                DashboardView::Unauthorized
            }
        }
    }

    pub fn role(&self) -> Option<Role> {
        match self {
            DashboardView::Admin => Some(Role::Admin),
            DashboardView::Employee => Some(Role::Employee),
            DashboardView::Employer => Some(Role::Employer),
            DashboardView::Loading | DashboardView::Unauthorized => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, DashboardView::Loading)
    }

    pub fn title(&self) -> &'static str {
        match self {
            DashboardView::Loading => "Loading...",
            DashboardView::Admin => "Admin Dashboard",
            DashboardView::Employee => "Employee Dashboard",
            DashboardView::Employer => "Employer Dashboard",
            DashboardView::Unauthorized => "Unauthorized",
        }
    }
}

/// Look up the caller's role once and pick the view.
pub async fn load_dashboard_view(client: &ApiClient) -> DashboardView {
    DashboardView::from_role_result(api::get_user_role(client).await)
}

/// Fetch the employee list for a dashboard table.
pub async fn load_employees(client: &ApiClient) -> ListState<Employee> {
    ListState::from_result(api::get_employees(client).await.map(|r| r.employee))
}

/// Fetch the task list for a dashboard table.
pub async fn load_tasks(client: &ApiClient) -> ListState<Task> {
    ListState::from_result(api::get_tasks(client).await.map(|r| r.tasks))
}
