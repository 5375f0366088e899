//! Parenthesized forms: weighted and positive emphasis
//!
//!     (text:weight)   weighted, any `:` between the outer parentheses selects this form
//!     ((text))        positive, depth is the number of enclosing pairs
//!
//!     Only the outermost pair is inspected for the weighted form, so `((a:0.5))` splits
//!     into the phrase `(a` and the weight `0.5)`, which is not a number.

use super::{parse_number, strip_nested, strip_pair};
use crate::prompt::ast::{FragmentError, NodeKind, PromptNode};

pub fn parse_parenthesized(fragment: &str) -> Result<PromptNode, FragmentError> {
    let content = strip_pair(fragment, '(', ')').ok_or_else(|| FragmentError::InvalidFormat {
        kind: NodeKind::Positive,
        fragment: fragment.to_string(),
    })?;

    if content.contains(':') {
        parse_weighted(content)
    } else {
        Ok(parse_positive(content))
    }
}

/// `content` is the fragment with its outer parentheses already removed.
fn parse_weighted(content: &str) -> Result<PromptNode, FragmentError> {
    let (phrase, weight) = content
        .split_once(':')
        .ok_or_else(|| FragmentError::InvalidFormat {
            kind: NodeKind::Weighted,
            fragment: format!("({content})"),
        })?;

    let weight = parse_number(weight).ok_or_else(|| FragmentError::InvalidWeight {
        text: weight.to_string(),
    })?;
    Ok(PromptNode::weighted(phrase, weight))
}

/// `content` is already one pair deep.
fn parse_positive(content: &str) -> PromptNode {
    let (inner, extra) = strip_nested(content, '(', ')');
    PromptNode::positive(extra + 1, inner)
}
