use std::fmt;
use std::fmt::{Display, Formatter};
use crate::books::domain::Lendable;
use crate::core::domain::Identifiable;
use crate::core::library::{BookKind, LibraryError, LibraryResult};

// BookFormat carries the variant specific availability state of a book.
#[derive(Debug, PartialEq, Clone)]
pub enum BookFormat {
    // finite number of copies on the shelf
    Physical {
        available_copies: u32,
    },
    // a single lendable instance; file size is informational only
    Digital {
        file_size_mb: f64,
        is_borrowed: bool,
    },
}

// BookEntity abstracts a lendable book, identified by a catalog wide unique id.
#[derive(Debug, PartialEq, Clone)]
pub struct BookEntity {
    pub book_id: String,
    pub title: String,
    pub author: String,
    pub format: BookFormat,
}

impl BookEntity {
    pub fn physical(book_id: &str, title: &str, author: &str, available_copies: u32) -> Self {
        Self {
            book_id: book_id.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            format: BookFormat::Physical { available_copies },
        }
    }

    pub fn ebook(book_id: &str, title: &str, author: &str, file_size_mb: f64) -> Self {
        Self {
            book_id: book_id.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            format: BookFormat::Digital { file_size_mb, is_borrowed: false },
        }
    }

    pub fn available_copies(&self) -> Option<u32> {
        match self.format {
            BookFormat::Physical { available_copies } => Some(available_copies),
            BookFormat::Digital { .. } => None,
        }
    }

    pub fn file_size_mb(&self) -> Option<f64> {
        match self.format {
            BookFormat::Physical { .. } => None,
            BookFormat::Digital { file_size_mb, .. } => Some(file_size_mb),
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.book_id.to_string()
    }
}

impl Lendable for BookEntity {
    fn kind(&self) -> BookKind {
        match self.format {
            BookFormat::Physical { .. } => BookKind::PhysicalBook,
            BookFormat::Digital { .. } => BookKind::EBook,
        }
    }

    fn borrow(&mut self) -> LibraryResult<()> {
        match &mut self.format {
            BookFormat::Physical { available_copies } => {
                if *available_copies == 0 {
                    return Err(LibraryError::book_not_available(
                        format!("no physical copies of {} available", self.book_id).as_str()));
                }
                *available_copies -= 1;
            }
            BookFormat::Digital { is_borrowed, .. } => {
                if *is_borrowed {
                    return Err(LibraryError::book_not_available(
                        format!("ebook {} already borrowed", self.book_id).as_str()));
                }
                *is_borrowed = true;
            }
        }
        Ok(())
    }

    fn return_book(&mut self) {
        match &mut self.format {
            BookFormat::Physical { available_copies } => {
                *available_copies = available_copies.saturating_add(1);
            }
            BookFormat::Digital { is_borrowed, .. } => {
                *is_borrowed = false;
            }
        }
    }

    fn is_available(&self) -> bool {
        match self.format {
            BookFormat::Physical { available_copies } => available_copies > 0,
            BookFormat::Digital { is_borrowed, .. } => !is_borrowed,
        }
    }
}

impl Display for BookEntity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {}", self.title, self.author)
    }
}
