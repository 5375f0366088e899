//! Format trait definition
//!
//! This module defines the core Format trait that all format implementations must implement.
//! The trait provides a uniform interface for parsing and serializing node sequences.

use crate::error::FormatError;
use prompt_parser::PromptNode;

/// Trait for prompt formats
///
/// Implementors provide conversion between a string representation and a node sequence.
/// Formats can support parsing, serialization, or both.
///
/// # Examples
///
/// ```ignore
/// struct MyFormat;
///
/// impl Format for MyFormat {
///     fn name(&self) -> &str {
///         "my-format"
///     }
///
///     fn supports_serialization(&self) -> bool {
///         true
///     }
///
///     fn serialize(&self, nodes: &[PromptNode]) -> Result<String, FormatError> {
///         Ok(format!("{} nodes", nodes.len()))
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "prompt", "json", "treeviz")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format, without the leading dot
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether this format supports parsing (source → nodes)
    fn supports_parsing(&self) -> bool {
        false
    }

    /// Whether this format supports serialization (nodes → source)
    fn supports_serialization(&self) -> bool {
        false
    }

    /// Parse source text into nodes
    ///
    /// Default implementation returns NotSupported error.
    fn parse(&self, _source: &str) -> Result<Vec<PromptNode>, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support parsing",
            self.name()
        )))
    }

    /// Serialize nodes into source text
    ///
    /// Default implementation returns NotSupported error.
    fn serialize(&self, _nodes: &[PromptNode]) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }
}
