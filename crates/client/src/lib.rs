pub mod admin;
pub mod api;
pub mod config;
pub mod dashboard;
pub mod transport;

pub use transport::{ApiClient, RequestOptions};
