//! Library Catalog
//!
//! A book catalog split along object-oriented design principles:
//!
//! - [`Book`] only describes a book and how it prints
//! - [`LibraryInterface`] is the narrow contract for a book collection
//! - [`Library`] is one implementation; any other can replace it
//! - [`LibraryManager`] depends on the contract, never on [`Library`]
//!
//! [`Session`] wraps a manager in the interactive `add` / `remove` / `show`
//! / `exit` loop.
//!
//! # Quick Example
//!
//! ```
//! use library_catalog::{Library, LibraryManager};
//! use patterns_log::MemoryLogger;
//! use std::rc::Rc;
//!
//! let log = Rc::new(MemoryLogger::new());
//! let mut manager = LibraryManager::new(Library::new(log.clone()), log.clone());
//!
//! manager.add_book("Dune", "Herbert", "1965");
//! manager.add_book("Dune", "X", "1999");
//! assert!(!manager.remove_book("Nonexistent"));
//!
//! assert_eq!(manager.library().len(), 1);
//! ```

mod book;
mod command;
mod error;
mod interface;
mod library;
mod manager;
mod session;

// Re-export public API
pub use book::Book;
pub use command::Command;
pub use error::CatalogError;
pub use interface::LibraryInterface;
pub use library::Library;
pub use manager::LibraryManager;
pub use session::{
    AUTHOR_PROMPT, COMMAND_PROMPT, Flow, REMOVE_PROMPT, Session, TITLE_PROMPT, YEAR_PROMPT,
};
