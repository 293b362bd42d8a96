use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::library::domain::service::Library;
use crate::loans::dto::LoanDto;

#[derive(Debug, Default)]
pub struct BorrowBookCommand {}

impl BorrowBookCommand {
    pub fn new() -> Self {
        Self {}
    }
}

#[derive(Debug, Deserialize)]
pub struct BorrowBookCommandRequest {
    member_id: String,
    book_id: String,
}

impl BorrowBookCommandRequest {
    pub fn new(member_id: &str, book_id: &str) -> Self {
        Self {
            member_id: member_id.to_string(),
            book_id: book_id.to_string(),
        }
    }
}


#[derive(Debug, Serialize)]
pub struct BorrowBookCommandResponse {
    pub loan: LoanDto,
}

impl BorrowBookCommandResponse {
    pub fn new(loan: LoanDto) -> Self {
        Self {
            loan,
        }
    }
}

impl Command<BorrowBookCommandRequest, BorrowBookCommandResponse> for BorrowBookCommand {
    fn execute(&self, library: &mut Library, req: BorrowBookCommandRequest) -> Result<BorrowBookCommandResponse, CommandError> {
        library.borrow_book(req.member_id.as_str(), req.book_id.as_str())
            .map_err(CommandError::from)
            .map(|loan| BorrowBookCommandResponse::new(LoanDto::from(&loan)))
    }
}
