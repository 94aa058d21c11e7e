//! Read-eval loop driving a [`LibraryManager`]

use crate::command::Command;
use crate::error::CatalogError;
use crate::interface::LibraryInterface;
use crate::manager::LibraryManager;
use patterns_log::Logger;
use std::io::{BufRead, Write};
use std::rc::Rc;

pub const COMMAND_PROMPT: &str = "Enter command (add, remove, show, exit): ";
pub const TITLE_PROMPT: &str = "Enter book title: ";
pub const AUTHOR_PROMPT: &str = "Enter book author: ";
pub const YEAR_PROMPT: &str = "Enter book year: ";
pub const REMOVE_PROMPT: &str = "Enter book title to remove: ";

/// What the loop does after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Interactive catalog session over any reader/writer pair
///
/// Prompts go to `output`; answers are read line by line from `input` and
/// trimmed. Catalog notices go to the logger, not to `output`.
///
/// # Example
///
/// ```
/// use library_catalog::{Library, LibraryManager, Session};
/// use patterns_log::MemoryLogger;
/// use std::rc::Rc;
///
/// let log = Rc::new(MemoryLogger::new());
/// let manager = LibraryManager::new(Library::new(log.clone()), log.clone());
/// let input = "add\nDune\nHerbert\n1965\nshow\nexit\n".as_bytes();
///
/// let mut session = Session::new(input, Vec::new(), manager, log.clone());
/// session.run().unwrap();
///
/// assert!(log.messages().contains(&"Title: Dune, Author: Herbert, Year: 1965".to_string()));
/// ```
pub struct Session<R, W, L> {
    input: R,
    output: W,
    manager: LibraryManager<L>,
    log: Rc<dyn Logger>,
}

impl<R: BufRead, W: Write, L: LibraryInterface> Session<R, W, L> {
    pub fn new(input: R, output: W, manager: LibraryManager<L>, log: Rc<dyn Logger>) -> Self {
        Self {
            input,
            output,
            manager,
            log,
        }
    }

    /// Run until `exit` or end of input
    ///
    /// End of input at the command prompt ends the session like `exit`.
    /// End of input in the middle of `add` or `remove` is an error, since the
    /// command cannot be completed.
    pub fn run(&mut self) -> Result<(), CatalogError> {
        loop {
            let Some(line) = self.prompt(COMMAND_PROMPT)? else {
                self.log.debug("Input closed, ending session");
                return Ok(());
            };
            if self.execute(Command::parse(&line))? == Flow::Exit {
                return Ok(());
            }
        }
    }

    /// Carry out one command, reading any answers it needs
    pub fn execute(&mut self, command: Command) -> Result<Flow, CatalogError> {
        self.log.debug(&format!("Executing command '{}'", command));
        match command {
            Command::Add => {
                let title = self.require(TITLE_PROMPT)?;
                let author = self.require(AUTHOR_PROMPT)?;
                let year = self.require(YEAR_PROMPT)?;
                self.manager.add_book(&title, &author, &year);
            }
            Command::Remove => {
                let title = self.require(REMOVE_PROMPT)?;
                self.manager.remove_book(&title);
            }
            Command::Show => self.manager.show_books(),
            Command::Exit => return Ok(Flow::Exit),
            Command::Unknown(_) => self.log.info("Invalid command. Please try again."),
        }
        Ok(Flow::Continue)
    }

    pub fn manager(&self) -> &LibraryManager<L> {
        &self.manager
    }

    /// End the session, returning the manager and the prompt writer
    pub fn into_parts(self) -> (LibraryManager<L>, W) {
        (self.manager, self.output)
    }

    /// Write `prompt` and read one trimmed line; `None` at end of input
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>, CatalogError> {
        self.output.write_all(prompt.as_bytes())?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn require(&mut self, prompt: &str) -> Result<String, CatalogError> {
        self.prompt(prompt)?.ok_or_else(|| CatalogError::InputClosed {
            prompt: prompt.trim_end().to_string(),
        })
    }
}
