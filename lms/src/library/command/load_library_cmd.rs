use serde::Serialize;
use crate::core::command::{Command, CommandError};
use crate::library::domain::service::Library;
use crate::library::repository::LibraryRepository;

pub struct LoadLibraryCommand {
    repository: Box<dyn LibraryRepository>,
}

impl LoadLibraryCommand {
    pub fn new(repository: Box<dyn LibraryRepository>) -> Self {
        Self {
            repository,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoadLibraryCommandResponse {
    pub location: String,
    pub books: usize,
    pub members: usize,
    pub loans: usize,
}

impl Command<(), LoadLibraryCommandResponse> for LoadLibraryCommand {
    fn execute(&self, library: &mut Library, _req: ()) -> Result<LoadLibraryCommandResponse, CommandError> {
        library.load_from(self.repository.as_ref())?;
        Ok(LoadLibraryCommandResponse {
            location: self.repository.location(),
            books: library.books().len(),
            members: library.members().len(),
            loans: library.loans().len(),
        })
    }
}
