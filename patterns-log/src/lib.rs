//! Logging capability shared by the pattern demos
//!
//! Components never reach for a global logger. Instead they receive a
//! [`Logger`] from their caller and emit one line per call:
//!
//! ```
//! use patterns_log::{Level, Logger, MemoryLogger};
//!
//! let log = MemoryLogger::new();
//! log.info("Book 'Dune' added");
//!
//! assert_eq!(log.records(), vec![(Level::Info, "Book 'Dune' added".to_string())]);
//! ```
//!
//! The binary uses [`TracingLogger`], which forwards every line to a
//! `tracing` event so the installed subscriber decides formatting and
//! filtering.

mod level;
mod memory;
mod tracing_logger;

pub use level::Level;
pub use memory::MemoryLogger;
pub use tracing_logger::TracingLogger;

/// Sink for formatted log lines.
///
/// Implementors must not fail: a sink that cannot write drops the line.
pub trait Logger {
    /// Write one line at the given severity
    fn log(&self, level: Level, message: &str);

    fn debug(&self, message: &str) {
        self.log(Level::Debug, message);
    }

    fn info(&self, message: &str) {
        self.log(Level::Info, message);
    }
}

impl<T: Logger + ?Sized> Logger for &T {
    fn log(&self, level: Level, message: &str) {
        (**self).log(level, message);
    }
}

impl<T: Logger + ?Sized> Logger for std::rc::Rc<T> {
    fn log(&self, level: Level, message: &str) {
        (**self).log(level, message);
    }
}
