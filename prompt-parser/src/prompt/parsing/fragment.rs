//! Fragment classification
//!
//! Decides which extractor handles a trimmed fragment from its outer delimiters only.

use super::extraction::{bracketed, extra_networks, parenthesized};
use crate::prompt::ast::{FragmentError, PromptNode};

/// The outer delimiter family of a fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentForm {
    /// `<...>`
    Angle,
    /// `(...)`
    Round,
    /// `[...]`
    Square,
    Plain,
}

/// Classify a trimmed fragment by its first and last characters.
pub fn classify(fragment: &str) -> FragmentForm {
    if is_enclosed(fragment, '<', '>') {
        FragmentForm::Angle
    } else if is_enclosed(fragment, '(', ')') {
        FragmentForm::Round
    } else if is_enclosed(fragment, '[', ']') {
        FragmentForm::Square
    } else {
        FragmentForm::Plain
    }
}

/// Parse one trimmed fragment into a node.
pub fn parse_fragment(fragment: &str) -> Result<PromptNode, FragmentError> {
    match classify(fragment) {
        FragmentForm::Angle => extra_networks::parse_extra_networks(fragment),
        FragmentForm::Round => parenthesized::parse_parenthesized(fragment),
        FragmentForm::Square => bracketed::parse_bracketed(fragment),
        FragmentForm::Plain => Ok(PromptNode::plain(fragment)),
    }
}

pub(crate) fn is_enclosed(text: &str, open: char, close: char) -> bool {
    text.starts_with(open) && text.ends_with(close)
}
