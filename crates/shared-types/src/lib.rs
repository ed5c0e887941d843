pub mod config;
pub mod error;
pub mod list_state;
pub mod models;
pub mod requests;

pub use config::*;
pub use error::*;
pub use list_state::*;
pub use models::*;
pub use requests::*;
