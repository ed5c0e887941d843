use serde::{Deserialize, Serialize};
use std::fmt;

/// Backend-assigned category that decides which dashboard a user sees.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Employee,
    Employer,
}

impl Role {
    /// Parse the backend's role string. Matching is exact; anything else
    /// (including `"Unknown"`, which the backend sends for unset roles) is `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Admin" => Some(Role::Admin),
            "Employee" => Some(Role::Employee),
            "Employer" => Some(Role::Employer),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Employee => "Employee",
            Role::Employer => "Employer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `GET auth/get_user_role`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RoleResponse {
    pub role: String,
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl RoleResponse {
    pub fn recognized_role(&self) -> Option<Role> {
        Role::parse(&self.role)
    }
}

/// An employee as listed by `GET auth/get_employees`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Employee {
    pub employee_id: i64,
    pub full_name: String,
    pub email: String,
}

/// Body of `GET auth/get_employees`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct EmployeesResponse {
    pub employee: Vec<Employee>,
}

/// Status string the backend uses for finished tasks.
pub const TASK_STATUS_COMPLETED: &str = "Completed";

/// A task as listed by `GET tasks/read_tasks`.
///
/// The backend's task schema makes most columns optional, so missing text
/// fields decode as empty strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub assigned_to_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub status: String,
}

/// Unassigned or untitled tasks come back with `null` columns.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Task {
    pub fn is_completed(&self) -> bool {
        self.status == TASK_STATUS_COMPLETED
    }
}

/// Body of `GET tasks/read_tasks`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TasksResponse {
    #[serde(alias = "task")]
    pub tasks: Vec<Task>,
}

/// Body of `POST auth/login`. The session itself travels in cookies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
