//! Error types for the catalog session

use thiserror::Error;

/// Error type for the interactive session
///
/// Catalog operations themselves never fail; only the input/output the
/// session runs over can.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Reading a line or writing a prompt failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input ended while a command was still waiting for an answer
    #[error("Input closed while waiting for: {prompt}")]
    InputClosed { prompt: String },
}
