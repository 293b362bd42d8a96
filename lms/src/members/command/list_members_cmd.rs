use serde::Serialize;
use crate::core::command::{Command, CommandError};
use crate::library::domain::service::Library;
use crate::members::dto::MemberDto;

#[derive(Debug, Default)]
pub struct ListMembersCommand {}

impl ListMembersCommand {
    pub fn new() -> Self {
        Self {}
    }
}

#[derive(Debug, Serialize)]
pub struct ListMembersCommandResponse {
    pub members: Vec<MemberDto>,
}

impl Command<(), ListMembersCommandResponse> for ListMembersCommand {
    fn execute(&self, library: &mut Library, _req: ()) -> Result<ListMembersCommandResponse, CommandError> {
        Ok(ListMembersCommandResponse {
            members: library.members().values().map(MemberDto::from).collect(),
        })
    }
}
