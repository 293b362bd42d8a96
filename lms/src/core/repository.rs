use serde::{Deserialize, Serialize};
use crate::core::library::LibraryResult;

// Repository persists a whole document at once; there are no partial updates.
pub trait Repository<Document> {
    // replaces the stored document, returns number of bytes written
    fn store(&self, document: &Document) -> LibraryResult<usize>;

    // reads back the stored document
    fn fetch(&self) -> LibraryResult<Document>;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum RepositoryStore {
    JsonFile,
    Memory,
}
