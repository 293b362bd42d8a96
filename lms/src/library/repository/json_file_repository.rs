use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;
use crate::library::dto::LibraryDocument;
use crate::library::repository::LibraryRepository;

#[derive(Debug)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    // sibling file the document is written to before it replaces the target
    fn staging_path(&self) -> PathBuf {
        let mut name = self.path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl Repository<LibraryDocument> for JsonFileRepository {
    fn store(&self, document: &LibraryDocument) -> LibraryResult<usize> {
        let data = document.to_json()?;
        let staging = self.staging_path();
        if let Err(err) = fs::write(&staging, &data).and_then(|_| fs::rename(&staging, &self.path)) {
            let _ = fs::remove_file(&staging);
            return Err(err.into());
        }
        debug!(path = %self.path.display(), bytes = data.len(), "library document written");
        Ok(data.len())
    }

    fn fetch(&self) -> LibraryResult<LibraryDocument> {
        let data = fs::read(&self.path)?;
        debug!(path = %self.path.display(), bytes = data.len(), "library document read");
        LibraryDocument::from_json(&data)
    }
}

impl LibraryRepository for JsonFileRepository {
    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
