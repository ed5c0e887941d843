pub mod alert;
pub mod badge;
pub mod button;
pub mod card;
pub mod data_table;
pub mod form_field;
pub mod page_header;
pub mod skeleton;
pub mod tab_bar;

// Re-exports for convenience
pub use alert::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use data_table::*;
pub use form_field::*;
pub use page_header::*;
pub use skeleton::*;
pub use tab_bar::*;
