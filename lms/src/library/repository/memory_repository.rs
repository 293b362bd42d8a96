use std::cell::RefCell;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;
use crate::library::dto::LibraryDocument;
use crate::library::repository::LibraryRepository;

// MemoryRepository keeps the serialized document in process, so the same
// json encoding is exercised without touching the file system.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    data: RefCell<Option<Vec<u8>>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Repository<LibraryDocument> for MemoryRepository {
    fn store(&self, document: &LibraryDocument) -> LibraryResult<usize> {
        let data = document.to_json()?;
        let len = data.len();
        *self.data.borrow_mut() = Some(data);
        Ok(len)
    }

    fn fetch(&self) -> LibraryResult<LibraryDocument> {
        match self.data.borrow().as_ref() {
            Some(data) => LibraryDocument::from_json(data),
            None => Err(LibraryError::storage("nothing stored in memory repository", Some("404".to_string()))),
        }
    }
}

impl LibraryRepository for MemoryRepository {
    fn location(&self) -> String {
        "memory".to_string()
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::LibraryError;
    use crate::core::repository::Repository;
    use crate::library::dto::LibraryDocument;
    use crate::library::repository::memory_repository::MemoryRepository;

    #[test]
    fn test_should_fail_before_store() {
        let repo = MemoryRepository::new();
        assert!(matches!(repo.fetch(), Err(LibraryError::Storage { .. })));
        repo.store(&LibraryDocument::default()).expect("should store");
        assert_eq!(LibraryDocument::default(), repo.fetch().expect("should fetch"));
    }
}
