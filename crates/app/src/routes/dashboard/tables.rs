use dioxus::prelude::*;
use shared_types::{Employee, ListState, Task};
use shared_ui::{
    Alert, DataTable, DataTableCell, DataTableEmpty, DataTableRow, TableSkeleton, TaskStatusBadge,
};

pub const EMPLOYEE_COLUMNS: [&str; 3] = ["ID", "Name", "Email"];
pub const TASK_COLUMNS: [&str; 4] = ["ID", "Title", "Assigned To", "Status"];

fn columns(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

/// Employee list. A failed fetch renders as an empty table under a banner.
#[component]
pub fn EmployeesTable(state: ListState<Employee>) -> Element {
    if state.is_loading() {
        return rsx! { TableSkeleton {} };
    }

    rsx! {
        if let Some(reason) = state.error() {
            Alert { message: reason.to_string() }
        }
        DataTable { columns: columns(&EMPLOYEE_COLUMNS),
            if state.rows().is_empty() {
                DataTableEmpty { colspan: EMPLOYEE_COLUMNS.len(), message: "No employees found" }
            }
            for employee in state.rows() {
                DataTableRow { key: "{employee.employee_id}",
                    DataTableCell { "{employee.employee_id}" }
                    DataTableCell { "{employee.full_name}" }
                    DataTableCell { "{employee.email}" }
                }
            }
        }
    }
}

#[component]
pub fn TasksTable(state: ListState<Task>) -> Element {
    if state.is_loading() {
        return rsx! { TableSkeleton {} };
    }

    rsx! {
        if let Some(reason) = state.error() {
            Alert { message: reason.to_string() }
        }
        DataTable { columns: columns(&TASK_COLUMNS),
            if state.rows().is_empty() {
                DataTableEmpty { colspan: TASK_COLUMNS.len(), message: "No tasks found" }
            }
            for task in state.rows() {
                DataTableRow { key: "{task.id}",
                    DataTableCell { "{task.id}" }
                    DataTableCell { "{task.title}" }
                    DataTableCell { "{task.assigned_to_name}" }
                    DataTableCell {
                        TaskStatusBadge {
                            status: task.status.clone(),
                            completed: task.is_completed(),
                        }
                    }
                }
            }
        }
    }
}
