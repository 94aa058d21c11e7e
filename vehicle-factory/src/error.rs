//! Error types for the vehicle factory library

use thiserror::Error;

/// Error type for registration failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// Attempted to register a second factory for a region code
    #[error("Duplicate factory registration for region '{0}'")]
    DuplicateRegion(String),
}

/// Error type for factory lookups
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FactoryError {
    /// No factory is registered for the region code
    #[error("No factory registered for region '{0}'")]
    UnknownRegion(String),
}
