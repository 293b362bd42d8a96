use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::books::domain::model::{BookEntity, BookFormat};
use crate::core::domain::Identifiable;

// BookDto is the persisted and listed form of a book, tagged by its variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BookDto {
    PhysicalBook {
        id: String,
        title: String,
        author: String,
        available_copies: u32,
    },
    EBook {
        id: String,
        title: String,
        author: String,
        file_size_mb: f64,
        #[serde(default)]
        is_borrowed: bool,
    },
}

impl Identifiable for BookDto {
    fn id(&self) -> String {
        match self {
            BookDto::PhysicalBook { id, .. } => id.to_string(),
            BookDto::EBook { id, .. } => id.to_string(),
        }
    }
}

impl Display for BookDto {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            BookDto::PhysicalBook { id, title, author, available_copies } => {
                write!(f, "[{}] {} by {} ({} copies available)", id, title, author, available_copies)
            }
            BookDto::EBook { id, title, author, file_size_mb, is_borrowed } => {
                let state = if *is_borrowed { "borrowed" } else { "available" };
                write!(f, "[{}] {} by {} (ebook, {} MB, {})", id, title, author, file_size_mb, state)
            }
        }
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> BookDto {
        match other.format {
            BookFormat::Physical { available_copies } => BookDto::PhysicalBook {
                id: other.book_id.to_string(),
                title: other.title.to_string(),
                author: other.author.to_string(),
                available_copies,
            },
            BookFormat::Digital { file_size_mb, is_borrowed } => BookDto::EBook {
                id: other.book_id.to_string(),
                title: other.title.to_string(),
                author: other.author.to_string(),
                file_size_mb,
                is_borrowed,
            },
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> BookEntity {
        match other {
            BookDto::PhysicalBook { id, title, author, available_copies } => BookEntity {
                book_id: id.to_string(),
                title: title.to_string(),
                author: author.to_string(),
                format: BookFormat::Physical { available_copies: *available_copies },
            },
            BookDto::EBook { id, title, author, file_size_mb, is_borrowed } => BookEntity {
                book_id: id.to_string(),
                title: title.to_string(),
                author: author.to_string(),
                format: BookFormat::Digital { file_size_mb: *file_size_mb, is_borrowed: *is_borrowed },
            },
        }
    }
}
