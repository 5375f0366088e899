//! JSON format
//!
//! A prompt is a JSON array of nodes, each tagged with its kind:
//!
//! ```text
//! [
//!   { "type": "plain", "text": "masterpiece" },
//!   { "type": "weighted", "weight": 0.7, "content": { "text": "fog" } }
//! ]
//! ```

use crate::error::FormatError;
use crate::format::Format;
use prompt_parser::prompt::formats::ToPromptString;
use prompt_parser::PromptNode;

#[derive(Debug, Clone)]
pub struct JsonFormat {
    pub pretty: bool,
}

impl JsonFormat {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl Default for JsonFormat {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "JSON array of tagged nodes"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Vec<PromptNode>, FormatError> {
        serde_json::from_str(source).map_err(|e| FormatError::ParseError(e.to_string()))
    }

    fn serialize(&self, nodes: &[PromptNode]) -> Result<String, FormatError> {
        // JSON has no literal for inf or NaN, serde_json would write null
        if let Some(node) = nodes
            .iter()
            .find(|node| node.number().is_some_and(|n| !n.is_finite()))
        {
            return Err(FormatError::SerializationError(format!(
                "{} has a number JSON cannot represent: {}",
                node.kind(),
                node.to_prompt_string()
            )));
        }
        let result = if self.pretty {
            serde_json::to_string_pretty(nodes)
        } else {
            serde_json::to_string(nodes)
        };
        result.map_err(|e| FormatError::SerializationError(e.to_string()))
    }
}
