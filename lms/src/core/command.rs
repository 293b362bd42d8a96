use std::fmt;
use std::fmt::{Display, Formatter};
use crate::core::library::LibraryError;
use crate::library::domain::service::Library;

#[derive(Debug, PartialEq)]
pub enum CommandError {
    NotAvailable {
        message: String,
    },
    BookNotFound {
        message: String,
    },
    MemberNotFound {
        message: String,
    },
    DuplicateBorrow {
        message: String,
    },
    NotBorrowed {
        message: String,
    },
    Serialization {
        message: String,
    },
    Storage {
        message: String,
        reason_code: Option<String>,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
}

// Command runs one request against the library passed in by the caller.
pub trait Command<Request, Response> {
    fn execute(&self, library: &mut Library, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        match other {
            LibraryError::BookNotAvailable { message } => {
                CommandError::NotAvailable { message }
            }
            LibraryError::BookNotFound { message } => {
                CommandError::BookNotFound { message }
            }
            LibraryError::MemberNotFound { message } => {
                CommandError::MemberNotFound { message }
            }
            LibraryError::DuplicateBorrow { message } => {
                CommandError::DuplicateBorrow { message }
            }
            LibraryError::NotBorrowed { message } => {
                CommandError::NotBorrowed { message }
            }
            LibraryError::Validation { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            LibraryError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            LibraryError::Storage { message, reason_code } => {
                CommandError::Storage { message, reason_code }
            }
        }
    }
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::NotAvailable { message } => write!(f, "book not available: {}", message),
            CommandError::BookNotFound { message } => write!(f, "book not found: {}", message),
            CommandError::MemberNotFound { message } => write!(f, "member not found: {}", message),
            CommandError::DuplicateBorrow { message } => write!(f, "already borrowed: {}", message),
            CommandError::NotBorrowed { message } => write!(f, "not borrowed: {}", message),
            CommandError::Serialization { message } => write!(f, "bad library data: {}", message),
            CommandError::Storage { message, .. } => write!(f, "storage failure: {}", message),
            CommandError::Validation { message, .. } => write!(f, "invalid input: {}", message),
        }
    }
}
