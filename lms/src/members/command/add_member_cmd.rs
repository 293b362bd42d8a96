use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::core::library::LibraryError;
use crate::library::domain::service::Library;
use crate::members::domain::model::MemberEntity;
use crate::members::dto::MemberDto;

#[derive(Debug, Default)]
pub struct AddMemberCommand {}

impl AddMemberCommand {
    pub fn new() -> Self {
        Self {}
    }
}

#[derive(Debug, Deserialize)]
pub struct AddMemberCommandRequest {
    pub member_id: String,
    pub name: String,
}

impl AddMemberCommandRequest {
    pub fn new(member_id: &str, name: &str) -> Self {
        Self {
            member_id: member_id.to_string(),
            name: name.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AddMemberCommandResponse {
    pub member: MemberDto,
}

impl Command<AddMemberCommandRequest, AddMemberCommandResponse> for AddMemberCommand {
    fn execute(&self, library: &mut Library, req: AddMemberCommandRequest) -> Result<AddMemberCommandResponse, CommandError> {
        if req.member_id.trim().is_empty() {
            return Err(CommandError::from(
                LibraryError::validation("member id must not be empty", Some("400".to_string()))));
        }
        let member = MemberEntity::new(req.member_id.as_str(), req.name.as_str());
        let dto = MemberDto::from(&member);
        library.add_member(member);
        Ok(AddMemberCommandResponse { member: dto })
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::{Command, CommandError};
    use crate::library::domain::service::Library;
    use crate::members::command::add_member_cmd::{AddMemberCommand, AddMemberCommandRequest};

    #[test]
    fn test_should_run_add_member() {
        let mut library = Library::new();
        let res = AddMemberCommand::new().execute(&mut library, AddMemberCommandRequest::new("M1", "Alice"))
            .expect("should add member");
        assert_eq!("M1", res.member.member_id.as_str());
        assert!(library.member("M1").is_some());
    }

    #[test]
    fn test_should_reject_blank_id() {
        let mut library = Library::new();
        let res = AddMemberCommand::new().execute(&mut library, AddMemberCommandRequest::new(" ", "Alice"));
        assert!(matches!(res, Err(CommandError::Validation { .. })));
    }
}
