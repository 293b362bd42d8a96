use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::library::domain::service::Library;
use crate::loans::dto::LoanDto;

#[derive(Debug, Default)]
pub struct ReturnBookCommand {}

impl ReturnBookCommand {
    pub fn new() -> Self {
        Self {}
    }
}

#[derive(Debug, Deserialize)]
pub struct ReturnBookCommandRequest {
    member_id: String,
    book_id: String,
}

impl ReturnBookCommandRequest {
    pub fn new(member_id: &str, book_id: &str) -> Self {
        Self {
            member_id: member_id.to_string(),
            book_id: book_id.to_string(),
        }
    }
}


#[derive(Debug, Serialize)]
pub struct ReturnBookCommandResponse {
    pub loan: LoanDto,
}

impl ReturnBookCommandResponse {
    pub fn new(loan: LoanDto) -> Self {
        Self {
            loan,
        }
    }
}

impl Command<ReturnBookCommandRequest, ReturnBookCommandResponse> for ReturnBookCommand {
    fn execute(&self, library: &mut Library, req: ReturnBookCommandRequest) -> Result<ReturnBookCommandResponse, CommandError> {
        library.return_book(req.member_id.as_str(), req.book_id.as_str())
            .map_err(CommandError::from)
            .map(|loan| ReturnBookCommandResponse::new(LoanDto::from(&loan)))
    }
}
