//! Typed wrappers over the transport, one per backend operation.
//!
//! None of these retry, cache or validate; errors are the caller's to handle.

pub mod endpoints {
    pub const LOGIN: &str = "auth/login";
    pub const REGISTER: &str = "auth/register";
    pub const LOGOUT: &str = "auth/logout";
    pub const USER_ROLE: &str = "auth/get_user_role";
    pub const EMPLOYEES: &str = "auth/get_employees";
    pub const TASKS: &str = "tasks/read_tasks";
}

mod user;
pub use user::*;

mod tasks;
pub use tasks::*;
