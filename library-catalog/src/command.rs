//! Command words accepted by the interactive session

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// One line typed at the command prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add,
    Remove,
    Show,
    Exit,
    /// Anything else, kept trimmed and lowercased
    Unknown(String),
}

impl Command {
    /// Classify a raw input line. Surrounding whitespace and case are ignored.
    pub fn parse(line: &str) -> Self {
        let word = line.trim().to_lowercase();
        match word.as_str() {
            "add" => Command::Add,
            "remove" => Command::Remove,
            "show" => Command::Show,
            "exit" => Command::Exit,
            _ => Command::Unknown(word),
        }
    }
}

impl FromStr for Command {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Command::parse(s))
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Add => f.write_str("add"),
            Command::Remove => f.write_str("remove"),
            Command::Show => f.write_str("show"),
            Command::Exit => f.write_str("exit"),
            Command::Unknown(word) => f.write_str(word),
        }
    }
}
