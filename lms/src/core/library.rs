use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq)]
pub enum LibraryError {
    // No copy left (physical) or the e-book is already lent out.
    BookNotAvailable {
        message: String,
    },
    BookNotFound {
        message: String,
    },
    MemberNotFound {
        message: String,
    },
    // The member already holds this book.
    DuplicateBorrow {
        message: String,
    },
    // The member does not hold this book.
    NotBorrowed {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Storage {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn book_not_available(message: &str) -> LibraryError {
        LibraryError::BookNotAvailable { message: message.to_string() }
    }

    pub fn book_not_found(message: &str) -> LibraryError {
        LibraryError::BookNotFound { message: message.to_string() }
    }

    pub fn member_not_found(message: &str) -> LibraryError {
        LibraryError::MemberNotFound { message: message.to_string() }
    }

    pub fn duplicate_borrow(message: &str) -> LibraryError {
        LibraryError::DuplicateBorrow { message: message.to_string() }
    }

    pub fn not_borrowed(message: &str) -> LibraryError {
        LibraryError::NotBorrowed { message: message.to_string() }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn storage(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Storage { message: message.to_string(), reason_code }
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::storage(
            format!("library file io {:?}", err).as_str(), Some(format!("{:?}", err.kind())))
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::BookNotAvailable { message } => {
                write!(f, "{}", message)
            }
            LibraryError::BookNotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::MemberNotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::DuplicateBorrow { message } => {
                write!(f, "{}", message)
            }
            LibraryError::NotBorrowed { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Storage { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for the library catalog.
pub type LibraryResult<T> = Result<T, LibraryError>;

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum BookKind {
    PhysicalBook,
    EBook,
}

impl TryFrom<String> for BookKind {
    type Error = LibraryError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.as_str() {
            "PhysicalBook" => Ok(BookKind::PhysicalBook),
            "EBook" => Ok(BookKind::EBook),
            _ => Err(LibraryError::validation(
                format!("unknown book kind {}", s).as_str(), Some("400".to_string()))),
        }
    }
}

impl Display for BookKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            BookKind::PhysicalBook => write!(f, "PhysicalBook"),
            BookKind::EBook => write!(f, "EBook"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::{BookKind, LibraryError};

    #[test]
    fn test_should_create_book_not_available_error() {
        assert!(matches!(LibraryError::book_not_available("test"), LibraryError::BookNotAvailable{ message: _ }));
    }

    #[test]
    fn test_should_create_book_not_found_error() {
        assert!(matches!(LibraryError::book_not_found("test"), LibraryError::BookNotFound{ message: _ }));
    }

    #[test]
    fn test_should_create_member_not_found_error() {
        assert!(matches!(LibraryError::member_not_found("test"), LibraryError::MemberNotFound{ message: _ }));
    }

    #[test]
    fn test_should_create_duplicate_borrow_error() {
        assert!(matches!(LibraryError::duplicate_borrow("test"), LibraryError::DuplicateBorrow{ message: _ }));
    }

    #[test]
    fn test_should_create_not_borrowed_error() {
        assert!(matches!(LibraryError::not_borrowed("test"), LibraryError::NotBorrowed{ message: _ }));
    }

    #[test]
    fn test_should_create_validation_error() {
        assert!(matches!(LibraryError::validation("test", None), LibraryError::Validation{ message: _, reason_code: _ }));
    }

    #[test]
    fn test_should_create_storage_error_from_io() {
        let err = LibraryError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"));
        assert!(matches!(err, LibraryError::Storage{ reason_code: Some(ref code), .. } if code == "NotFound"));
    }

    #[test]
    fn test_should_create_serialization_error_from_json() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(LibraryError::from(err), LibraryError::Serialization{ message: _ }));
    }

    #[test]
    fn test_should_format_book_kind() {
        for kind in vec![BookKind::PhysicalBook, BookKind::EBook] {
            let str = kind.to_string();
            let str_kind = BookKind::try_from(str).unwrap();
            assert_eq!(kind, str_kind);
        }
        assert!(BookKind::try_from("Scroll".to_string()).is_err());
    }
}
