pub mod json_file_repository;
pub mod memory_repository;

use crate::core::repository::Repository;
use crate::library::dto::LibraryDocument;

pub trait LibraryRepository: Repository<LibraryDocument> {
    // human readable location, used in logs
    fn location(&self) -> String;
}
