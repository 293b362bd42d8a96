pub mod add_member_cmd;
pub mod list_members_cmd;
