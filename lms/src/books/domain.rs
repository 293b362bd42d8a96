use crate::core::domain::Identifiable;
use crate::core::library::{BookKind, LibraryResult};

pub mod model;

// Lendable is the capability every book variant offers to members.
pub trait Lendable: Identifiable {
    fn kind(&self) -> BookKind;

    // fails with BookNotAvailable and leaves the book untouched when nothing is left to lend
    fn borrow(&mut self) -> LibraryResult<()>;

    // infallible: a physical copy count saturates, a returned e-book stays available
    fn return_book(&mut self);

    fn is_available(&self) -> bool;
}
