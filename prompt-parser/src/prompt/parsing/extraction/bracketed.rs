//! Square bracket forms
//!
//!     A `[...]` fragment is one of six forms. The checks run against the full bracketed
//!     text, in this order, and the first match wins:
//!
//!         1. contains `|`              alternate          [red|green|blue]
//!         2. exactly two `:`           scheduled_full     [highlight:dark:0.9]
//!         3. `:` right after `[`       scheduled_to       [:dark:0.9]
//!         4. contains `::`             scheduled_from     [highlight::0.9]
//!         5. contains `:`              scheduled_to       [dark:0.9]
//!         6. otherwise                 negative           [[blurry]]
//!
//!     The order matters more than it looks. `[:dark:0.9]` and `[highlight::0.9]` both have
//!     two colons, so they are read by rule 2 as a full schedule with an empty side. The text
//!     still renders back unchanged, which is what round-tripping relies on.

use super::{parse_number, strip_nested, strip_pair};
use crate::prompt::ast::{FragmentError, NodeKind, PromptNode};

pub fn parse_bracketed(fragment: &str) -> Result<PromptNode, FragmentError> {
    let content = strip_pair(fragment, '[', ']').ok_or_else(|| FragmentError::InvalidFormat {
        kind: NodeKind::Negative,
        fragment: fragment.to_string(),
    })?;

    if fragment.contains('|') {
        Ok(parse_alternate(content))
    } else if fragment.matches(':').count() == 2 {
        parse_scheduled_full(fragment, content)
    } else if content.starts_with(':') {
        parse_scheduled_to(fragment, content)
    } else if fragment.contains("::") {
        parse_scheduled_from(fragment, content)
    } else if fragment.contains(':') {
        parse_scheduled_to(fragment, content)
    } else {
        Ok(parse_negative(fragment))
    }
}

fn parse_alternate(content: &str) -> PromptNode {
    PromptNode::alternate(content.split('|').map(str::trim))
}

fn parse_scheduled_full(fragment: &str, content: &str) -> Result<PromptNode, FragmentError> {
    let parts: Vec<&str> = content.splitn(3, ':').collect();
    let [from, to, at] = parts[..] else {
        return Err(invalid_format(NodeKind::ScheduledFull, fragment));
    };
    let at = number(NodeKind::ScheduledFull, at)?;
    Ok(PromptNode::scheduled_full(from.trim(), to.trim(), at))
}

fn parse_scheduled_from(fragment: &str, content: &str) -> Result<PromptNode, FragmentError> {
    let (from, at) = content
        .split_once("::")
        .ok_or_else(|| invalid_format(NodeKind::ScheduledFrom, fragment))?;
    let at = number(NodeKind::ScheduledFrom, at)?;
    Ok(PromptNode::scheduled_from(from.trim(), at))
}

/// Accepts `to:at` and `:to:at`.
fn parse_scheduled_to(fragment: &str, content: &str) -> Result<PromptNode, FragmentError> {
    let parts: Vec<&str> = content.splitn(3, ':').collect();
    let (to, at) = match parts[..] {
        [to, at] => (to, at),
        ["", to, at] => (to, at),
        _ => return Err(invalid_format(NodeKind::ScheduledTo, fragment)),
    };
    let at = number(NodeKind::ScheduledTo, at)?;
    Ok(PromptNode::scheduled_to(to.trim(), at))
}

fn parse_negative(fragment: &str) -> PromptNode {
    let (inner, depth) = strip_nested(fragment, '[', ']');
    PromptNode::negative(depth, inner.trim())
}

fn number(kind: NodeKind, text: &str) -> Result<f64, FragmentError> {
    parse_number(text).ok_or_else(|| FragmentError::InvalidNumber {
        kind,
        text: text.to_string(),
    })
}

fn invalid_format(kind: NodeKind, fragment: &str) -> FragmentError {
    FragmentError::InvalidFormat {
        kind,
        fragment: fragment.to_string(),
    }
}
