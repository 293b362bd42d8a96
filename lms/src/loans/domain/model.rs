use chrono::{NaiveDateTime, SubsecRound, Utc};

// LoanEntity is the immutable record of one borrow event. Two loans are equal
// only when book, member and timestamp all match.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct LoanEntity {
    book_id: String,
    member_id: String,
    date_borrowed: NaiveDateTime,
}

impl LoanEntity {
    // stamped in UTC with microsecond precision
    pub fn new(book_id: &str, member_id: &str) -> Self {
        Self::borrowed_at(book_id, member_id, Utc::now().naive_utc().trunc_subsecs(6))
    }

    pub fn borrowed_at(book_id: &str, member_id: &str, date_borrowed: NaiveDateTime) -> Self {
        Self {
            book_id: book_id.to_string(),
            member_id: member_id.to_string(),
            date_borrowed,
        }
    }

    pub fn book_id(&self) -> &str {
        &self.book_id
    }

    pub fn member_id(&self) -> &str {
        &self.member_id
    }

    pub fn date_borrowed(&self) -> NaiveDateTime {
        self.date_borrowed
    }

    // same book and member, timestamp ignored
    pub fn matches(&self, book_id: &str, member_id: &str) -> bool {
        self.book_id == book_id && self.member_id == member_id
    }
}
