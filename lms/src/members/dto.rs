use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::members::domain::model::MemberEntity;

// MemberDto is the persisted and listed form of a member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberDto {
    pub member_id: String,
    pub name: String,
    #[serde(default)]
    pub borrowed_books: Vec<String>,
}

impl Identifiable for MemberDto {
    fn id(&self) -> String {
        self.member_id.to_string()
    }
}

impl Display for MemberDto {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} (ID: {}), {} borrowed", self.name, self.member_id, self.borrowed_books.len())
    }
}

impl From<&MemberEntity> for MemberDto {
    fn from(other: &MemberEntity) -> Self {
        Self {
            member_id: other.member_id.to_string(),
            name: other.name.to_string(),
            borrowed_books: other.borrowed_books().to_vec(),
        }
    }
}

// borrowed_books is not carried over, holdings are rebuilt from the loans
impl From<&MemberDto> for MemberEntity {
    fn from(other: &MemberDto) -> Self {
        MemberEntity::new(other.member_id.as_str(), other.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use crate::books::domain::model::BookEntity;
    use crate::members::domain::model::MemberEntity;
    use crate::members::dto::MemberDto;

    #[test]
    fn test_should_serialize_member() {
        let mut member = MemberEntity::new("M1", "Alice");
        let mut book = BookEntity::physical("B1", "title", "author", 1);
        member.borrow_book(&mut book).unwrap();
        let val = serde_json::to_value(MemberDto::from(&member)).unwrap();
        assert_eq!(json!({"member_id": "M1", "name": "Alice", "borrowed_books": ["B1"]}), val);
    }

    #[test]
    fn test_should_not_restore_holdings_from_dto() {
        let dto: MemberDto = serde_json::from_value(
            json!({"member_id": "M1", "name": "Alice", "borrowed_books": ["B1"]})).unwrap();
        let member = MemberEntity::from(&dto);
        assert!(member.borrowed_books().is_empty());
    }
}
