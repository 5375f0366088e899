//! Treeviz format, backed by the treeviz renderer in prompt-parser

use crate::error::FormatError;
use crate::format::Format;
use prompt_parser::prompt::formats::treeviz::{to_treeviz_str_with_params, DEFAULT_MAX_LABEL};
use prompt_parser::PromptNode;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct TreevizFormat {
    /// Label width in characters before truncation
    pub max_label: usize,
}

impl TreevizFormat {
    pub fn new(max_label: usize) -> Self {
        Self { max_label }
    }
}

impl Default for TreevizFormat {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LABEL)
    }
}

impl Format for TreevizFormat {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn description(&self) -> &str {
        "Visual tree representation with Unicode icons"
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, nodes: &[PromptNode]) -> Result<String, FormatError> {
        let mut params = HashMap::new();
        params.insert("max-label".to_string(), self.max_label.to_string());
        Ok(to_treeviz_str_with_params(nodes, &params))
    }
}
