//! Orchestrator that turns raw input into catalog calls

use crate::book::Book;
use crate::interface::LibraryInterface;
use patterns_log::Logger;
use std::rc::Rc;

/// Front end for a book collection.
///
/// Knows only the [`LibraryInterface`] contract; the concrete collection is
/// chosen by whoever builds the manager.
///
/// # Example
///
/// ```
/// use library_catalog::{Library, LibraryManager};
/// use patterns_log::MemoryLogger;
/// use std::rc::Rc;
///
/// let log = Rc::new(MemoryLogger::new());
/// let mut manager = LibraryManager::new(Library::new(log.clone()), log.clone());
///
/// manager.add_book("Dune", "Herbert", "1965");
/// manager.show_books();
///
/// assert_eq!(
///     log.messages(),
///     vec![
///         "Book 'Dune' added",
///         "Books in library:",
///         "Title: Dune, Author: Herbert, Year: 1965",
///     ]
/// );
/// ```
pub struct LibraryManager<L> {
    library: L,
    log: Rc<dyn Logger>,
}

impl<L: LibraryInterface> LibraryManager<L> {
    pub fn new(library: L, log: Rc<dyn Logger>) -> Self {
        Self { library, log }
    }

    /// Build a book from raw strings and hand it to the collection
    pub fn add_book(&mut self, title: &str, author: &str, year: &str) {
        self.library.add_book(Book::new(title, author, year));
    }

    /// Forward a removal; the outcome is already logged by the collection
    pub fn remove_book(&mut self, title: &str) -> bool {
        self.library.remove_book(title)
    }

    /// Log a header and one line per book, or a notice if there are none
    pub fn show_books(&self) {
        let books = self.library.get_books();
        if books.is_empty() {
            self.log.info("Library is empty");
            return;
        }

        self.log.info("Books in library:");
        for book in &books {
            self.log.info(&book.to_string());
        }
    }

    pub fn library(&self) -> &L {
        &self.library
    }

    /// Give the collection back, ending the manager
    pub fn into_inner(self) -> L {
        self.library
    }
}
