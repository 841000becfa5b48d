use thiserror::Error;

/// Errors raised while parsing catalog parameters or configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Unknown product category: {0}")]
    UnknownCategory(String),

    #[error("Unknown sort mode: {0}")]
    UnknownSortMode(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
