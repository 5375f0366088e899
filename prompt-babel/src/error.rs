//! Error types for format conversions

use prompt_parser::ParseError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// The format cannot do the requested direction
    #[error("Operation not supported: {0}")]
    NotSupported(String),
    /// Input could not be read into nodes
    #[error("Parse error: {0}")]
    ParseError(String),
    /// Nodes could not be written out
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<ParseError> for FormatError {
    fn from(err: ParseError) -> Self {
        FormatError::ParseError(err.to_string())
    }
}
