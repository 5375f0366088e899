//! YAML format
//!
//! Same shape as the JSON format, a sequence of nodes tagged with `type`.

use crate::error::FormatError;
use crate::format::Format;
use prompt_parser::PromptNode;

pub struct YamlFormat;

impl Format for YamlFormat {
    fn name(&self) -> &str {
        "yaml"
    }

    fn description(&self) -> &str {
        "YAML sequence of tagged nodes"
    }

    fn file_extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Vec<PromptNode>, FormatError> {
        serde_yaml::from_str(source).map_err(|e| FormatError::ParseError(e.to_string()))
    }

    fn serialize(&self, nodes: &[PromptNode]) -> Result<String, FormatError> {
        serde_yaml::to_string(nodes).map_err(|e| FormatError::SerializationError(e.to_string()))
    }
}
