use serde::Serialize;
use crate::core::command::{Command, CommandError};
use crate::library::domain::service::Library;
use crate::library::repository::LibraryRepository;

pub struct SaveLibraryCommand {
    repository: Box<dyn LibraryRepository>,
}

impl SaveLibraryCommand {
    pub fn new(repository: Box<dyn LibraryRepository>) -> Self {
        Self {
            repository,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SaveLibraryCommandResponse {
    pub location: String,
    pub bytes: usize,
}

impl Command<(), SaveLibraryCommandResponse> for SaveLibraryCommand {
    fn execute(&self, library: &mut Library, _req: ()) -> Result<SaveLibraryCommandResponse, CommandError> {
        let bytes = library.save_to(self.repository.as_ref())?;
        Ok(SaveLibraryCommandResponse { location: self.repository.location(), bytes })
    }
}
