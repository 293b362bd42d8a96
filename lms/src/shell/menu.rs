use std::io;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::debug;
use crate::books::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::books::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
use crate::core::command::{Command, CommandError};
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;
use crate::library::command::load_library_cmd::LoadLibraryCommand;
use crate::library::command::save_library_cmd::SaveLibraryCommand;
use crate::library::domain::service::Library;
use crate::library::factory::create_library_repository;
use crate::loans::command::borrow_book_cmd::{BorrowBookCommand, BorrowBookCommandRequest};
use crate::loans::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
use crate::members::command::add_member_cmd::{AddMemberCommand, AddMemberCommandRequest};
use crate::members::command::list_members_cmd::ListMembersCommand;

const MENU: &str = "
==== Smart Library Management System ====
1. Add physical book
2. Add eBook
3. Add member
4. Borrow book
5. Return book
6. List books
7. List members
8. Save library
9. Load library
0. Exit";

// Outcome of one menu choice that did not fail with a command error.
enum Step {
    Continue,
    InvalidInput,
    Exit,
}

/// Shell drives the numbered text menu over any line source, printing results
/// and command errors to `output`.
pub struct Shell<R, W> {
    data_file: PathBuf,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(config: &Configuration, input: R, output: W) -> Self {
        Self {
            data_file: config.data_file.clone(),
            input,
            output,
        }
    }

    // returns on "0" or when input runs out
    pub fn run(&mut self, library: &mut Library) -> io::Result<()> {
        loop {
            writeln!(self.output, "{}", MENU)?;
            let Some(choice) = self.prompt("Choose an option: ")? else {
                return Ok(());
            };
            debug!(choice = choice.as_str(), "menu choice");
            match self.dispatch(library, choice.as_str()) {
                Ok(Step::Continue) => {}
                Ok(Step::InvalidInput) => {
                    writeln!(self.output, "Invalid input type. Please enter correct values.")?;
                }
                Ok(Step::Exit) => {
                    writeln!(self.output, "Goodbye!")?;
                    return Ok(());
                }
                Err(ShellError::Command(err)) => {
                    writeln!(self.output, "Error: {}", err)?;
                }
                Err(ShellError::Eof) => return Ok(()),
                Err(ShellError::Io(err)) => return Err(err),
            }
        }
    }

    fn dispatch(&mut self, library: &mut Library, choice: &str) -> Result<Step, ShellError> {
        match choice {
            "1" => {
                let (book_id, title, author) = self.book_fields()?;
                let Ok(copies) = self.field("Available copies: ")?.parse::<u32>() else {
                    return Ok(Step::InvalidInput);
                };
                AddBookCommand::new().execute(library, AddBookCommandRequest::physical(&book_id, &title, &author, copies))?;
                self.say("Physical book added successfully.")?;
            }
            "2" => {
                let (book_id, title, author) = self.book_fields()?;
                let Ok(size) = self.field("File size (MB): ")?.parse::<f64>() else {
                    return Ok(Step::InvalidInput);
                };
                AddBookCommand::new().execute(library, AddBookCommandRequest::ebook(&book_id, &title, &author, size))?;
                self.say("EBook added successfully.")?;
            }
            "3" => {
                let member_id = self.field("Member ID: ")?;
                let name = self.field("Member name: ")?;
                AddMemberCommand::new().execute(library, AddMemberCommandRequest::new(&member_id, &name))?;
                self.say("Member added successfully.")?;
            }
            "4" => {
                let member_id = self.field("Member ID: ")?;
                let book_id = self.field("Book ID: ")?;
                BorrowBookCommand::new().execute(library, BorrowBookCommandRequest::new(&member_id, &book_id))?;
                self.say("Book borrowed successfully.")?;
            }
            "5" => {
                let member_id = self.field("Member ID: ")?;
                let book_id = self.field("Book ID: ")?;
                ReturnBookCommand::new().execute(library, ReturnBookCommandRequest::new(&member_id, &book_id))?;
                self.say("Book returned successfully.")?;
            }
            "6" => {
                let res = ListBooksCommand::new().execute(library, ListBooksCommandRequest::default())?;
                if res.books.is_empty() {
                    self.say("No books in library.")?;
                }
                for book in res.books {
                    self.say(&book.to_string())?;
                }
            }
            "7" => {
                let res = ListMembersCommand::new().execute(library, ())?;
                if res.members.is_empty() {
                    self.say("No members registered.")?;
                }
                for member in res.members {
                    self.say(&member.to_string())?;
                }
            }
            "8" => {
                let repository = create_library_repository(RepositoryStore::JsonFile, &self.data_file);
                let res = SaveLibraryCommand::new(repository).execute(library, ())?;
                self.say(&format!("Library saved to {}", res.location))?;
            }
            "9" => {
                let repository = create_library_repository(RepositoryStore::JsonFile, &self.data_file);
                let res = LoadLibraryCommand::new(repository).execute(library, ())?;
                self.say(&format!("Library loaded from {}", res.location))?;
            }
            "0" => return Ok(Step::Exit),
            _ => self.say("Invalid choice. Please try again.")?,
        }
        Ok(Step::Continue)
    }

    fn book_fields(&mut self) -> Result<(String, String, String), ShellError> {
        let book_id = self.field("Book ID: ")?;
        let title = self.field("Title: ")?;
        let author = self.field("Author: ")?;
        Ok((book_id, title, author))
    }

    fn field(&mut self, label: &str) -> Result<String, ShellError> {
        self.prompt(label)?.ok_or(ShellError::Eof)
    }

    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{}", line)
    }
}

enum ShellError {
    Command(CommandError),
    Io(io::Error),
    Eof,
}

impl From<CommandError> for ShellError {
    fn from(err: CommandError) -> Self {
        ShellError::Command(err)
    }
}

impl From<io::Error> for ShellError {
    fn from(err: io::Error) -> Self {
        ShellError::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use crate::core::domain::Configuration;
    use crate::library::domain::service::Library;
    use crate::shell::menu::Shell;

    fn run_script(config: &Configuration, library: &mut Library, script: &str) -> String {
        let mut out = Vec::new();
        Shell::new(config, Cursor::new(script.as_bytes().to_vec()), &mut out)
            .run(library).expect("should run shell");
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_should_borrow_and_return_through_menu() {
        let config = Configuration::new("unused.json");
        let mut library = Library::new();
        let out = run_script(&config, &mut library,
            "1\nB1\nPython OOP\nAuthor\n1\n3\nM1\nTest User\n4\nM1\nB1\n4\nM1\nB1\n5\nM1\nB1\n6\n0\n");
        assert!(out.contains("Physical book added successfully."));
        assert!(out.contains("Book borrowed successfully."));
        assert!(out.contains("Error: already borrowed: book B1 is already borrowed by member M1"));
        assert!(out.contains("Book returned successfully."));
        assert!(out.contains("[B1] Python OOP by Author (1 copies available)"));
        assert!(out.ends_with("Goodbye!\n"));
        assert!(library.loans().is_empty());
    }

    #[test]
    fn test_should_reject_bad_numbers_and_choices() {
        let config = Configuration::new("unused.json");
        let mut library = Library::new();
        let out = run_script(&config, &mut library, "1\nB1\nt\na\nmany\n2\nE1\nt\na\nbig\nx\n6\n7\n");
        assert_eq!(2, out.matches("Invalid input type. Please enter correct values.").count());
        assert!(out.contains("Invalid choice. Please try again."));
        assert!(out.contains("No books in library."));
        assert!(out.contains("No members registered."));
        assert!(library.books().is_empty());
    }

    #[test]
    fn test_should_report_unknown_ids() {
        let config = Configuration::new("unused.json");
        let mut library = Library::new();
        let out = run_script(&config, &mut library, "3\nM1\nAlice\n4\nM1\nINVALID\n5\nM9\nB1\n");
        assert!(out.contains("Error: book not found: book INVALID not found"));
        assert!(out.contains("Error: member not found: member M9 not found"));
    }

    #[test]
    fn test_should_save_and_load_through_menu() {
        let path = std::env::temp_dir().join(format!("lms-shell-{}.json", std::process::id()));
        let config = Configuration::new(path.to_str().unwrap());
        let mut library = Library::new();
        let out = run_script(&config, &mut library, "2\nE1\nRust\nFerris\n2.5\n8\n");
        assert!(out.contains("Library saved to"));

        let mut loaded = Library::new();
        let out = run_script(&config, &mut loaded, "9\n6\n0\n");
        assert!(out.contains("Library loaded from"));
        assert!(out.contains("[E1] Rust by Ferris (ebook, 2.5 MB, available)"));
        let _ = std::fs::remove_file(&path);
    }
}
