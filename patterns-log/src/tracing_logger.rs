//! Logger backed by `tracing` events

use crate::{Level, Logger};

/// Forwards each line to the current `tracing` subscriber
///
/// Filtering and formatting are left to whatever subscriber the binary
/// installs. Without one, lines are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, level: Level, message: &str) {
        // tracing macros need a const level, so dispatch by hand
        match level {
            Level::Debug => tracing::debug!("{}", message),
            Level::Info => tracing::info!("{}", message),
            Level::Warn => tracing::warn!("{}", message),
            Level::Error => tracing::error!("{}", message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_without_subscriber_is_silent() {
        TracingLogger.info("no subscriber installed");
        TracingLogger.log(Level::Error, "still nothing");
    }
}
