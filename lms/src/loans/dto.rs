use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::loans::domain::model::LoanEntity;
use crate::utils::date::serializer;

// LoanDto is the persisted form of an active loan
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct LoanDto {
    pub book_id: String,
    pub member_id: String,
    #[serde(with = "serializer")]
    pub date_borrowed: NaiveDateTime,
}

impl From<&LoanEntity> for LoanDto {
    fn from(other: &LoanEntity) -> LoanDto {
        LoanDto {
            book_id: other.book_id().to_string(),
            member_id: other.member_id().to_string(),
            date_borrowed: other.date_borrowed(),
        }
    }
}

impl From<&LoanDto> for LoanEntity {
    fn from(other: &LoanDto) -> LoanEntity {
        LoanEntity::borrowed_at(other.book_id.as_str(), other.member_id.as_str(), other.date_borrowed)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use crate::loans::domain::model::LoanEntity;
    use crate::loans::dto::LoanDto;

    #[test]
    fn test_should_read_stored_loan() {
        let dto: LoanDto = serde_json::from_value(json!({
            "book_id": "B1",
            "member_id": "M1",
            "date_borrowed": "2024-05-06T07:08:09.123456"
        })).unwrap();
        let loan = LoanEntity::from(&dto);
        assert!(loan.matches("B1", "M1"));
        assert_eq!("2024-05-06T07:08:09.123456", serde_json::to_value(LoanDto::from(&loan)).unwrap()["date_borrowed"]);
    }

    #[test]
    fn test_should_keep_exact_timestamp() {
        let loan = LoanEntity::new("B1", "M1");
        let json = serde_json::to_string(&LoanDto::from(&loan)).unwrap();
        let back: LoanDto = serde_json::from_str(&json).unwrap();
        assert_eq!(loan, LoanEntity::from(&back));
    }
}
