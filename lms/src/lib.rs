pub mod books;
pub mod core;
pub mod library;
pub mod loans;
pub mod members;
pub mod shell;
pub mod utils;

pub use crate::library::domain::service::Library;
