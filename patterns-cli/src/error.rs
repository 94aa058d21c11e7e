//! Error types for the CLI

use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Factory registration error
    #[error("Registration error: {0}")]
    Registration(#[from] vehicle_factory::RegistrationError),

    /// Factory lookup error
    #[error("Factory error: {0}")]
    Factory(#[from] vehicle_factory::FactoryError),

    /// Catalog session error
    #[error("Catalog error: {0}")]
    Catalog(#[from] library_catalog::CatalogError),
}
