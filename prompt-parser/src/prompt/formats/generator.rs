//! Generator for the prompt notation
//!
//! This module converts parsed nodes back into prompt text.
//!
//! It is the exact inverse of the parser for every node sequence the parser can produce:
//! rendering a sequence and parsing the result gives text that renders to the same string.
//! That makes it useful for:
//!
//! - Round-trip testing (source -> nodes -> source)
//! - Canonicalizing hand-written prompts (spacing after commas, number formatting)
//! - Building prompts programmatically from nodes
//!
//! Numbers are written in their shortest round-trip decimal form: `0.7`, `1.25`, `1`.

use crate::prompt::ast::{Plain, PromptNode};

/// Separator between top-level fragments
pub const FRAGMENT_SEPARATOR: &str = ", ";

/// Trait for converting a node to its prompt text
pub trait ToPromptString {
    fn to_prompt_string(&self) -> String;
}

impl ToPromptString for Plain {
    fn to_prompt_string(&self) -> String {
        self.text.clone()
    }
}

impl ToPromptString for PromptNode {
    fn to_prompt_string(&self) -> String {
        match self {
            PromptNode::Plain(plain) => plain.to_prompt_string(),
            PromptNode::ExtraNetworks { network, args } => {
                format!("<{}:{}>", network, args.to_prompt_string())
            }
            PromptNode::Positive { depth, content } => {
                wrap(&content.to_prompt_string(), "(", ")", *depth)
            }
            PromptNode::Negative { depth, content } => {
                wrap(&content.to_prompt_string(), "[", "]", *depth)
            }
            PromptNode::Weighted { weight, content } => {
                format!("({}:{})", content.to_prompt_string(), format_number(*weight))
            }
            PromptNode::Alternate { options } => {
                let options: Vec<String> = options.iter().map(Plain::to_prompt_string).collect();
                format!("[{}]", options.join("|"))
            }
            PromptNode::ScheduledFull { at, from, to } => format!(
                "[{}:{}:{}]",
                from.to_prompt_string(),
                to.to_prompt_string(),
                format_number(*at)
            ),
            PromptNode::ScheduledFrom { at, from } => {
                format!("[{}::{}]", from.to_prompt_string(), format_number(*at))
            }
            PromptNode::ScheduledTo { at, to } => {
                format!("[:{}:{}]", to.to_prompt_string(), format_number(*at))
            }
        }
    }
}

/// Render a node sequence as prompt text, fragments joined with `", "`.
pub fn generate(nodes: &[PromptNode]) -> String {
    nodes
        .iter()
        .map(ToPromptString::to_prompt_string)
        .collect::<Vec<_>>()
        .join(FRAGMENT_SEPARATOR)
}

/// Shortest decimal text that parses back to the same `f64`.
///
/// Never uses scientific notation and drops trailing zeros (`1.0` is written `1`).
pub fn format_number(value: f64) -> String {
    value.to_string()
}

fn wrap(content: &str, open: &str, close: &str, depth: usize) -> String {
    format!("{}{}{}", open.repeat(depth), content, close.repeat(depth))
}
