//! State behind the admin dashboard's two tabs.
//!
//! Each tab is loaded lazily: selecting it issues a fetch and the result
//! replaces that tab's list. Requests are not cancelled, so every fetch gets
//! a [`FetchTicket`] and only the newest ticket per tab may write its result.

use shared_types::{ApiError, Employee, EmployeesResponse, ListState, Task, TasksResponse};

use crate::api;
use crate::transport::ApiClient;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum AdminTab {
    #[default]
    Employees,
    Tasks,
}

impl AdminTab {
    pub const ALL: [AdminTab; 2] = [AdminTab::Employees, AdminTab::Tasks];

    pub fn label(&self) -> &'static str {
        match self {
            AdminTab::Employees => "Employees",
            AdminTab::Tasks => "Tasks",
        }
    }
}

/// Issued by [`AdminDashboardState::select`]; hand it back with the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    tab: AdminTab,
    seq: u64,
}

impl FetchTicket {
    pub fn tab(&self) -> AdminTab {
        self.tab
    }
}

/// Result of fetching one tab's data.
#[derive(Debug, Clone, PartialEq)]
pub enum TabFetch {
    Employees(Result<EmployeesResponse, ApiError>),
    Tasks(Result<TasksResponse, ApiError>),
}

impl TabFetch {
    pub fn tab(&self) -> AdminTab {
        match self {
            TabFetch::Employees(_) => AdminTab::Employees,
            TabFetch::Tasks(_) => AdminTab::Tasks,
        }
    }
}

/// Fetch the data behind `tab`.
pub async fn fetch_tab(client: &ApiClient, tab: AdminTab) -> TabFetch {
    match tab {
        AdminTab::Employees => TabFetch::Employees(api::get_employees(client).await),
        AdminTab::Tasks => TabFetch::Tasks(api::get_tasks(client).await),
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AdminDashboardState {
    tab: AdminTab,
    employees: ListState<Employee>,
    tasks: ListState<Task>,
    employees_seq: u64,
    tasks_seq: u64,
}

impl AdminDashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tab(&self) -> AdminTab {
        self.tab
    }

    pub fn employees(&self) -> &ListState<Employee> {
        &self.employees
    }

    pub fn tasks(&self) -> &ListState<Task> {
        &self.tasks
    }

    /// Make `tab` active and start a new fetch generation for it.
    ///
    /// The rows already on screen stay until the result is applied.
    pub fn select(&mut self, tab: AdminTab) -> FetchTicket {
        self.tab = tab;
        let seq = match tab {
            AdminTab::Employees => {
                self.employees_seq += 1;
                self.employees_seq
            }
            AdminTab::Tasks => {
                self.tasks_seq += 1;
                self.tasks_seq
            }
        };
        FetchTicket { tab, seq }
    }

    /// Store a fetch result. Returns `false` (and changes nothing) when the
    /// ticket is stale or belongs to the other tab.
    pub fn apply(&mut self, ticket: FetchTicket, fetched: TabFetch) -> bool {
        if ticket.tab != fetched.tab() || ticket.seq != self.latest_seq(ticket.tab) {
            tracing::debug!(
                tab = ticket.tab.label(),
                seq = ticket.seq,
                "dropping stale tab fetch"
            );
            return false;
        }
        match fetched {
            TabFetch::Employees(result) => {
                self.employees = list_from(result.map(|r| r.employee), AdminTab::Employees);
            }
            TabFetch::Tasks(result) => {
                self.tasks = list_from(result.map(|r| r.tasks), AdminTab::Tasks);
            }
        }
        true
    }

    pub fn apply_employees(
        &mut self,
        ticket: FetchTicket,
        result: Result<EmployeesResponse, ApiError>,
    ) -> bool {
        self.apply(ticket, TabFetch::Employees(result))
    }

    pub fn apply_tasks(
        &mut self,
        ticket: FetchTicket,
        result: Result<TasksResponse, ApiError>,
    ) -> bool {
        self.apply(ticket, TabFetch::Tasks(result))
    }

    fn latest_seq(&self, tab: AdminTab) -> u64 {
        match tab {
            AdminTab::Employees => self.employees_seq,
            AdminTab::Tasks => self.tasks_seq,
        }
    }
}

fn list_from<T>(result: Result<Vec<T>, ApiError>, tab: AdminTab) -> ListState<T> {
    if let Err(e) = &result {
        tracing::warn!(tab = tab.label(), error = %e, "admin list fetch failed");
    }
    ListState::from_result(result)
}
