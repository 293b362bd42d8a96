use serde::{Deserialize, Serialize};
use crate::books::domain::Lendable;
use crate::books::dto::BookDto;
use crate::core::command::{Command, CommandError};
use crate::library::domain::service::Library;

#[derive(Debug, Default)]
pub struct ListBooksCommand {}

impl ListBooksCommand {
    pub fn new() -> Self {
        Self {}
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListBooksCommandRequest {
    #[serde(default)]
    pub available_only: bool,
}

#[derive(Debug, Serialize)]
pub struct ListBooksCommandResponse {
    pub books: Vec<BookDto>,
}

impl Command<ListBooksCommandRequest, ListBooksCommandResponse> for ListBooksCommand {
    fn execute(&self, library: &mut Library, req: ListBooksCommandRequest) -> Result<ListBooksCommandResponse, CommandError> {
        let books = library.books().values()
            .filter(|b| !req.available_only || b.is_available())
            .map(BookDto::from)
            .collect();
        Ok(ListBooksCommandResponse { books })
    }
}
