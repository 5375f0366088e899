//! Error types for prompt parsing

use super::node::NodeKind;

/// Why a single fragment could not be classified into a node.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FragmentError {
    /// A bracketed form's structure matches none of the recognized shapes
    #[error("invalid {kind} format: {fragment:?}")]
    InvalidFormat { kind: NodeKind, fragment: String },
    /// The weight of a `(phrase:weight)` form is not a number
    #[error("invalid weight: {text:?}")]
    InvalidWeight { text: String },
    /// The switch-point of a scheduled form is not a number
    #[error("invalid number in {kind}: {text:?}")]
    InvalidNumber { kind: NodeKind, text: String },
}

impl FragmentError {
    /// The node kind the fragment was classified as before extraction failed.
    pub fn kind(&self) -> NodeKind {
        match self {
            FragmentError::InvalidFormat { kind, .. } | FragmentError::InvalidNumber { kind, .. } => {
                *kind
            }
            FragmentError::InvalidWeight { .. } => NodeKind::Weighted,
        }
    }
}

/// A failed parse, pointing at the offending fragment.
///
/// Parsing stops at the first fragment that fails; no partial node sequence is kept.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("error parsing node {fragment:?} (fragment {index}): {source}")]
pub struct ParseError {
    /// Zero-based position of the fragment among the comma-separated fragments
    pub index: usize,
    /// The trimmed fragment text
    pub fragment: String,
    #[source]
    pub source: FragmentError,
}

impl ParseError {
    pub fn new(index: usize, fragment: impl Into<String>, source: FragmentError) -> Self {
        Self {
            index,
            fragment: fragment.into(),
            source,
        }
    }

    pub fn cause(&self) -> &FragmentError {
        &self.source
    }
}
