//! Capability contract for book collections

use crate::book::Book;

/// Everything a catalog front end may ask of a book collection.
///
/// [`LibraryManager`](crate::LibraryManager) is written against this trait
/// only, so any implementation can stand in for [`Library`](crate::Library).
pub trait LibraryInterface {
    /// Add a book unless one with the same title is already present
    fn add_book(&mut self, book: Book);

    /// Remove the first book with this title
    ///
    /// # Returns
    /// * `true` - A book was removed
    /// * `false` - No book had this title
    fn remove_book(&mut self, title: &str) -> bool;

    /// Copy of the current books, in insertion order
    fn get_books(&self) -> Vec<Book>;
}

impl<T: LibraryInterface + ?Sized> LibraryInterface for &mut T {
    fn add_book(&mut self, book: Book) {
        (**self).add_book(book);
    }

    fn remove_book(&mut self, title: &str) -> bool {
        (**self).remove_book(title)
    }

    fn get_books(&self) -> Vec<Book> {
        (**self).get_books()
    }
}

impl<T: LibraryInterface + ?Sized> LibraryInterface for Box<T> {
    fn add_book(&mut self, book: Book) {
        (**self).add_book(book);
    }

    fn remove_book(&mut self, title: &str) -> bool {
        (**self).remove_book(title)
    }

    fn get_books(&self) -> Vec<Book> {
        (**self).get_books()
    }
}
