//! The prompt notation as a format
//!
//! Parsing accepts the text of a prompt file: line breaks are treated like spaces so a long
//! prompt can be wrapped across lines, then the core parser takes over. Serializing writes
//! the canonical single-line form.

use crate::error::FormatError;
use crate::format::Format;
use prompt_parser::{generate, parse, PromptNode};

pub struct PromptFormat;

/// Join the lines of a prompt file into a single prompt line.
fn unwrap_lines(source: &str) -> String {
    source.lines().collect::<Vec<_>>().join(" ")
}

impl Format for PromptFormat {
    fn name(&self) -> &str {
        "prompt"
    }

    fn description(&self) -> &str {
        "Weighted prompt notation (canonical text)"
    }

    fn file_extensions(&self) -> &[&str] {
        &["prompt", "txt"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Vec<PromptNode>, FormatError> {
        Ok(parse(&unwrap_lines(source))?)
    }

    fn serialize(&self, nodes: &[PromptNode]) -> Result<String, FormatError> {
        Ok(generate(nodes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ignores_line_breaks() {
        let nodes = PromptFormat
            .parse("masterpiece,\n(fog:0.7),\r\n[red|blue]\n")
            .unwrap();
        assert_eq!(
            nodes,
            vec![
                PromptNode::plain("masterpiece"),
                PromptNode::weighted("fog", 0.7),
                PromptNode::alternate(["red", "blue"]),
            ]
        );
    }

    #[test]
    fn test_parse_error_is_reported() {
        match PromptFormat.parse("<badformat>") {
            Err(FormatError::ParseError(msg)) => assert!(msg.contains("<badformat>")),
            other => panic!("Expected ParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_file_is_empty_prompt() {
        assert_eq!(PromptFormat.parse("\n\n").unwrap(), vec![]);
        assert_eq!(PromptFormat.serialize(&[]).unwrap(), "");
    }
}
