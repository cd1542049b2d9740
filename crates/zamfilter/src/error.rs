use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZamError {
    #[error("Row {row}: missing data-{attribute} attribute")]
    MissingAttribute { row: String, attribute: &'static str },

    #[error("Row {row}: invalid data-{attribute} value {value:?}")]
    InvalidAttribute {
        row: String,
        attribute: &'static str,
        value: String,
    },

    #[error("Unknown filter: {0}")]
    UnknownFilter(String),

    #[error("Filter {filter} does not support {operation}")]
    UnsupportedOperation {
        filter: &'static str,
        operation: &'static str,
    },

    #[error("Row not found: {0}")]
    RowNotFound(String),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] confique::Error),
}

pub type Result<T> = std::result::Result<T, ZamError>;
