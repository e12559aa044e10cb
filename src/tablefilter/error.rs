use thiserror::Error;

/// Errors from loading records, configuration and screen lookup.
///
/// The filtering engine itself has no error paths.
#[derive(Error, Debug)]
pub enum TableFilterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Source error: {0}")]
    Source(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Unknown screen: {0}")]
    UnknownScreen(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, TableFilterError>;
