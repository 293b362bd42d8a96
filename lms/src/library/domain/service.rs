use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info, warn};
use crate::books::domain::Lendable;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};
use crate::library::dto::LibraryDocument;
use crate::library::repository::LibraryRepository;
use crate::library::repository::json_file_repository::JsonFileRepository;
use crate::loans::domain::model::LoanEntity;
use crate::loans::dto::LoanDto;
use crate::members::domain::model::MemberEntity;
use crate::members::dto::MemberDto;

/// Library owns every book, member and active loan and is the only place
/// where a borrow or return is coordinated.
///
/// Members and loans refer to books and members by id. Every operation
/// either succeeds or leaves the library exactly as it was.
#[derive(Debug, Default)]
pub struct Library {
    books: BTreeMap<String, BookEntity>,
    members: BTreeMap<String, MemberEntity>,
    loans: Vec<LoanEntity>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn books(&self) -> &BTreeMap<String, BookEntity> {
        &self.books
    }

    pub fn members(&self) -> &BTreeMap<String, MemberEntity> {
        &self.members
    }

    // active loans in borrow order
    pub fn loans(&self) -> &[LoanEntity] {
        &self.loans
    }

    pub fn book(&self, book_id: &str) -> Option<&BookEntity> {
        self.books.get(book_id)
    }

    pub fn member(&self, member_id: &str) -> Option<&MemberEntity> {
        self.members.get(member_id)
    }

    // inserts or replaces by id
    pub fn add_book(&mut self, book: BookEntity) {
        let book_id = book.id();
        let kind = book.kind();
        if self.books.insert(book_id.clone(), book).is_some() {
            debug!(book_id = book_id.as_str(), %kind, "replaced existing book");
        } else {
            debug!(book_id = book_id.as_str(), %kind, "book added");
        }
    }

    // replaces id and name; books the old member still holds stay with the new one
    pub fn add_member(&mut self, mut member: MemberEntity) {
        if let Some(old) = self.members.remove(&member.member_id) {
            if !old.borrowed_books().is_empty() {
                debug!(member_id = old.member_id.as_str(), held = old.borrowed_books().len(),
                    "replaced member keeps borrowed books");
            }
            member.adopt_borrowed(old);
        }
        self.members.insert(member.id(), member);
    }

    pub fn borrow_book(&mut self, member_id: &str, book_id: &str) -> LibraryResult<LoanEntity> {
        let member = self.members.get_mut(member_id).ok_or_else(|| {
            LibraryError::member_not_found(format!("member {} not found", member_id).as_str())
        })?;
        let book = self.books.get_mut(book_id).ok_or_else(|| {
            LibraryError::book_not_found(format!("book {} not found", book_id).as_str())
        })?;
        member.borrow_book(book)?;

        let loan = LoanEntity::new(book_id, member_id);
        self.loans.push(loan.clone());
        info!(member_id, book_id, "book borrowed");
        Ok(loan)
    }

    // closes and returns the first loan of this pair
    pub fn return_book(&mut self, member_id: &str, book_id: &str) -> LibraryResult<LoanEntity> {
        let member = self.members.get_mut(member_id).ok_or_else(|| {
            LibraryError::member_not_found(format!("member {} not found", member_id).as_str())
        })?;
        let book = self.books.get_mut(book_id).ok_or_else(|| {
            LibraryError::book_not_found(format!("book {} not found", book_id).as_str())
        })?;
        let pos = self.loans.iter().position(|l| l.matches(book_id, member_id)).ok_or_else(|| {
            LibraryError::not_borrowed(
                format!("book {} was not borrowed by member {}", book_id, member_id).as_str())
        })?;
        member.return_book(book)?;

        let loan = self.loans.remove(pos);
        info!(member_id, book_id, "book returned");
        Ok(loan)
    }

    pub fn snapshot(&self) -> LibraryDocument {
        LibraryDocument {
            books: self.books.values().map(BookDto::from).collect(),
            members: self.members.values().map(MemberDto::from).collect(),
            loans: self.loans.iter().map(LoanDto::from).collect(),
        }
    }

    /// Replaces the whole state with the given document.
    ///
    /// Loans are the source of truth for what each member holds; the stored
    /// `borrowed_books` of a member is only compared against them. A loan
    /// naming an unknown book or member, or a second active loan for the
    /// same pair, fails with `Validation` and the library is left unchanged.
    pub fn restore(&mut self, document: &LibraryDocument) -> LibraryResult<()> {
        let mut books = BTreeMap::new();
        for dto in &document.books {
            let book = BookEntity::from(dto);
            books.insert(book.id(), book);
        }

        let mut members = BTreeMap::new();
        for dto in &document.members {
            let member = MemberEntity::from(dto);
            members.insert(member.id(), member);
        }

        let mut loans = Vec::with_capacity(document.loans.len());
        for dto in &document.loans {
            if !books.contains_key(&dto.book_id) {
                return Err(LibraryError::validation(
                    format!("loan references unknown book {}", dto.book_id).as_str(), None));
            }
            let member = members.get_mut(&dto.member_id).ok_or_else(|| {
                LibraryError::validation(
                    format!("loan references unknown member {}", dto.member_id).as_str(), None)
            })?;
            if !member.restore_borrowed(&dto.book_id) {
                return Err(LibraryError::validation(
                    format!("duplicate loan of book {} to member {}", dto.book_id, dto.member_id).as_str(), None));
            }
            loans.push(LoanEntity::from(dto));
        }

        for dto in &document.members {
            if let Some(member) = members.get(&dto.member_id) {
                let mut stored = dto.borrowed_books.clone();
                let mut rebuilt = member.borrowed_books().to_vec();
                stored.sort();
                rebuilt.sort();
                if stored != rebuilt {
                    warn!(member_id = dto.member_id.as_str(), ?stored, ?rebuilt,
                        "stored borrowed books disagree with loans, using loans");
                }
            }
        }

        self.books = books;
        self.members = members;
        self.loans = loans;
        Ok(())
    }

    pub fn save_to(&self, repository: &dyn LibraryRepository) -> LibraryResult<usize> {
        let written = repository.store(&self.snapshot())?;
        info!(location = repository.location().as_str(), books = self.books.len(),
            members = self.members.len(), loans = self.loans.len(), "library saved");
        Ok(written)
    }

    pub fn load_from(&mut self, repository: &dyn LibraryRepository) -> LibraryResult<()> {
        let document = repository.fetch()?;
        self.restore(&document)?;
        info!(location = repository.location().as_str(), books = self.books.len(),
            members = self.members.len(), loans = self.loans.len(), "library loaded");
        Ok(())
    }

    pub fn save(&self, path: &Path) -> LibraryResult<usize> {
        self.save_to(&JsonFileRepository::new(path))
    }

    pub fn load(&mut self, path: &Path) -> LibraryResult<()> {
        self.load_from(&JsonFileRepository::new(path))
    }
}
