//! Book value type

use std::fmt;
use std::hash::{Hash, Hasher};

/// A catalog entry.
///
/// Two books are the same book when their titles match, whatever their
/// author or year. `year` is free text and is never validated.
///
/// ```
/// use library_catalog::Book;
///
/// let first = Book::new("Dune", "Herbert", "1965");
/// let second = Book::new("Dune", "Someone Else", "1999");
///
/// assert_eq!(first, second);
/// assert_eq!(first.to_string(), "Title: Dune, Author: Herbert, Year: 1965");
/// ```
#[derive(Debug, Clone)]
pub struct Book {
    title: String,
    author: String,
    year: String,
}

impl Book {
    pub fn new(title: impl Into<String>, author: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year: year.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn year(&self) -> &str {
        &self.year
    }

    /// Title-only identity check used for de-duplication
    pub fn has_title(&self, title: &str) -> bool {
        self.title == title
    }
}

impl PartialEq for Book {
    fn eq(&self, other: &Self) -> bool {
        self.has_title(&other.title)
    }
}

impl Eq for Book {}

// Must agree with PartialEq: hash the title alone
impl Hash for Book {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.title.hash(state);
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Title: {}, Author: {}, Year: {}",
            self.title, self.author, self.year
        )
    }
}
