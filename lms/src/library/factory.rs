use std::path::Path;
use crate::core::repository::RepositoryStore;
use crate::library::repository::LibraryRepository;
use crate::library::repository::json_file_repository::JsonFileRepository;
use crate::library::repository::memory_repository::MemoryRepository;

pub fn create_library_repository(store: RepositoryStore, path: &Path) -> Box<dyn LibraryRepository> {
    match store {
        RepositoryStore::JsonFile => {
            Box::new(JsonFileRepository::new(path))
        }
        RepositoryStore::Memory => {
            Box::new(MemoryRepository::new())
        }
    }
}
