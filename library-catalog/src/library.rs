//! In-memory book collection

use crate::book::Book;
use crate::interface::LibraryInterface;
use itertools::Itertools;
use patterns_log::Logger;
use std::rc::Rc;

/// Ordered collection of books, unique by title
///
/// Every mutation writes one line to the injected logger.
pub struct Library {
    books: Vec<Book>,
    log: Rc<dyn Logger>,
}

impl Library {
    /// Create an empty library that reports to `log`
    pub fn new(log: Rc<dyn Logger>) -> Self {
        Self {
            books: Vec::new(),
            log,
        }
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl LibraryInterface for Library {
    fn add_book(&mut self, book: Book) {
        if self.books.contains(&book) {
            self.log.info(&format!("Book '{}' already exists", book.title()));
        } else {
            self.log.info(&format!("Book '{}' added", book.title()));
            self.books.push(book);
        }
    }

    fn remove_book(&mut self, title: &str) -> bool {
        let position = self
            .books
            .iter()
            .find_position(|b| b.has_title(title))
            .map(|(index, _)| index);

        match position {
            Some(index) => {
                self.books.remove(index);
                self.log.info(&format!("Book '{}' removed", title));
                true
            }
            None => {
                self.log.info(&format!("Book '{}' not found", title));
                false
            }
        }
    }

    fn get_books(&self) -> Vec<Book> {
        self.books.clone()
    }
}
