use std::fmt;
use std::fmt::{Display, Formatter};
use crate::books::domain::Lendable;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};

// MemberEntity is a borrower. It refers to the books it holds by id only;
// the library owns the books themselves.
#[derive(Debug, PartialEq, Clone)]
pub struct MemberEntity {
    pub member_id: String,
    pub name: String,
    borrowed_books: Vec<String>,
}

impl MemberEntity {
    pub fn new(member_id: &str, name: &str) -> Self {
        Self {
            member_id: member_id.to_string(),
            name: name.to_string(),
            borrowed_books: vec![],
        }
    }

    pub fn borrowed_books(&self) -> &[String] {
        &self.borrowed_books
    }

    pub fn holds(&self, book_id: &str) -> bool {
        self.borrowed_books.iter().any(|id| id == book_id)
    }

    pub fn borrow_book(&mut self, book: &mut dyn Lendable) -> LibraryResult<()> {
        let book_id = book.id();
        if self.holds(&book_id) {
            return Err(LibraryError::duplicate_borrow(
                format!("book {} is already borrowed by member {}", book_id, self.member_id).as_str()));
        }
        book.borrow()?;
        self.borrowed_books.push(book_id);
        Ok(())
    }

    pub fn return_book(&mut self, book: &mut dyn Lendable) -> LibraryResult<()> {
        let book_id = book.id();
        let pos = self.borrowed_books.iter().position(|id| *id == book_id).ok_or_else(|| {
            LibraryError::not_borrowed(
                format!("book {} was not borrowed by member {}", book_id, self.member_id).as_str())
        })?;
        book.return_book();
        self.borrowed_books.remove(pos);
        Ok(())
    }

    // takes over what a replaced entry with the same id still holds
    pub(crate) fn adopt_borrowed(&mut self, old: MemberEntity) {
        for book_id in old.borrowed_books {
            self.restore_borrowed(&book_id);
        }
    }

    // used when rebuilding holdings from stored loans, no book state is touched
    pub(crate) fn restore_borrowed(&mut self, book_id: &str) -> bool {
        if self.holds(book_id) {
            return false;
        }
        self.borrowed_books.push(book_id.to_string());
        true
    }
}

impl Identifiable for MemberEntity {
    fn id(&self) -> String {
        self.member_id.to_string()
    }
}

impl Display for MemberEntity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} (ID: {})", self.name, self.member_id)
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::core::library::LibraryError;
    use crate::members::domain::model::MemberEntity;

    #[test]
    fn test_should_build_member() {
        let member = MemberEntity::new("M1", "Alice");
        assert_eq!("M1", member.member_id.as_str());
        assert!(member.borrowed_books().is_empty());
        assert_eq!("Alice (ID: M1)", member.to_string());
    }

    #[test]
    fn test_should_borrow_and_return() {
        let mut member = MemberEntity::new("M1", "Alice");
        let mut book = BookEntity::physical("B1", "title", "author", 2);
        member.borrow_book(&mut book).expect("should borrow");
        assert_eq!(vec!["B1".to_string()], member.borrowed_books());
        assert_eq!(Some(1), book.available_copies());

        member.return_book(&mut book).expect("should return");
        assert!(member.borrowed_books().is_empty());
        assert_eq!(Some(2), book.available_copies());
    }

    #[test]
    fn test_should_reject_duplicate_borrow() {
        let mut member = MemberEntity::new("M1", "Alice");
        let mut book = BookEntity::physical("B1", "title", "author", 5);
        member.borrow_book(&mut book).expect("should borrow");
        let res = member.borrow_book(&mut book);
        assert!(matches!(res, Err(LibraryError::DuplicateBorrow { .. })));
        assert_eq!(Some(4), book.available_copies());
        assert_eq!(1, member.borrowed_books().len());
    }

    #[test]
    fn test_should_propagate_not_available() {
        let mut member = MemberEntity::new("M1", "Alice");
        let mut book = BookEntity::ebook("E1", "title", "author", 1.0);
        let mut other = MemberEntity::new("M2", "Bob");
        other.borrow_book(&mut book).expect("should borrow");
        let res = member.borrow_book(&mut book);
        assert!(matches!(res, Err(LibraryError::BookNotAvailable { .. })));
        assert!(member.borrowed_books().is_empty());
    }

    #[test]
    fn test_should_reject_return_of_unheld_book() {
        let mut member = MemberEntity::new("M1", "Alice");
        let mut book = BookEntity::physical("B1", "title", "author", 1);
        let res = member.return_book(&mut book);
        assert!(matches!(res, Err(LibraryError::NotBorrowed { .. })));
        assert_eq!(Some(1), book.available_copies());
    }

    #[test]
    fn test_should_adopt_borrowed_books() {
        let mut old = MemberEntity::new("M1", "Alice");
        let mut book = BookEntity::physical("B1", "title", "author", 1);
        old.borrow_book(&mut book).unwrap();
        let mut member = MemberEntity::new("M1", "Alicia");
        member.adopt_borrowed(old);
        assert!(member.holds("B1"));
        assert!(matches!(member.borrow_book(&mut book), Err(LibraryError::DuplicateBorrow { .. })));
    }

    #[test]
    fn test_should_restore_borrowed_once() {
        let mut member = MemberEntity::new("M1", "Alice");
        assert!(member.restore_borrowed("B1"));
        assert!(!member.restore_borrowed("B1"));
        assert!(member.holds("B1"));
    }
}
