use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::core::command::{Command, CommandError};
use crate::core::library::{BookKind, LibraryError, LibraryResult};
use crate::library::domain::service::Library;

#[derive(Debug, Default)]
pub struct AddBookCommand {}

impl AddBookCommand {
    pub fn new() -> Self {
        Self {}
    }
}

#[derive(Debug, Deserialize)]
pub struct AddBookCommandRequest {
    pub kind: BookKind,
    pub book_id: String,
    pub title: String,
    pub author: String,
    pub available_copies: Option<u32>,
    pub file_size_mb: Option<f64>,
}

impl AddBookCommandRequest {
    pub fn physical(book_id: &str, title: &str, author: &str, available_copies: u32) -> Self {
        Self {
            kind: BookKind::PhysicalBook,
            book_id: book_id.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            available_copies: Some(available_copies),
            file_size_mb: None,
        }
    }

    pub fn ebook(book_id: &str, title: &str, author: &str, file_size_mb: f64) -> Self {
        Self {
            kind: BookKind::EBook,
            book_id: book_id.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            available_copies: None,
            file_size_mb: Some(file_size_mb),
        }
    }

    pub fn build_book(&self) -> LibraryResult<BookEntity> {
        if self.book_id.trim().is_empty() {
            return Err(LibraryError::validation("book id must not be empty", Some("400".to_string())));
        }
        match self.kind {
            BookKind::PhysicalBook => {
                let copies = self.available_copies.ok_or_else(|| LibraryError::validation(
                    format!("physical book {} needs available copies", self.book_id).as_str(), Some("400".to_string())))?;
                Ok(BookEntity::physical(self.book_id.as_str(), self.title.as_str(), self.author.as_str(), copies))
            }
            BookKind::EBook => {
                let size = self.file_size_mb.filter(|s| s.is_finite() && *s >= 0.0).ok_or_else(|| LibraryError::validation(
                    format!("ebook {} needs a non negative file size", self.book_id).as_str(), Some("400".to_string())))?;
                Ok(BookEntity::ebook(self.book_id.as_str(), self.title.as_str(), self.author.as_str(), size))
            }
        }
    }
}


#[derive(Debug, Serialize)]
pub struct AddBookCommandResponse {
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    fn execute(&self, library: &mut Library, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let book = req.build_book()?;
        let dto = BookDto::from(&book);
        library.add_book(book);
        Ok(AddBookCommandResponse::new(dto))
    }
}
