use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;
use crate::loans::dto::LoanDto;
use crate::members::dto::MemberDto;

// LibraryDocument is the whole persisted state of a library.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LibraryDocument {
    #[serde(default)]
    pub books: Vec<BookDto>,
    #[serde(default)]
    pub members: Vec<MemberDto>,
    #[serde(default)]
    pub loans: Vec<LoanDto>,
}

impl LibraryDocument {
    // pretty printed with a four space indent
    pub fn to_json(&self) -> LibraryResult<Vec<u8>> {
        let mut buf = Vec::new();
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        self.serialize(&mut ser)?;
        Ok(buf)
    }

    pub fn from_json(data: &[u8]) -> LibraryResult<LibraryDocument> {
        Ok(serde_json::from_slice(data)?)
    }
}
