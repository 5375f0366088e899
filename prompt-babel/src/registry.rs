//! Format registry for format discovery and selection
//!
//! This module provides a centralized registry for all available formats.
//! Formats can be registered and retrieved by name or file extension.

use crate::error::FormatError;
use crate::format::Format;
use prompt_parser::PromptNode;
use std::collections::HashMap;

/// Registry of prompt formats
///
/// # Examples
///
/// ```ignore
/// let registry = FormatRegistry::with_defaults();
/// let nodes = registry.parse("masterpiece, (fog:0.7)", "prompt")?;
/// let json = registry.serialize(&nodes, "json")?;
/// ```
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format
    ///
    /// If a format with the same name already exists, it will be replaced.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    /// Get a format by name
    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Find the format that claims a file extension (case-insensitive, no leading dot)
    pub fn format_for_extension(&self, extension: &str) -> Option<&dyn Format> {
        let extension = extension.to_ascii_lowercase();
        let mut names = self.list_formats();
        // Sorted so overlapping claims resolve the same way every time
        names.retain(|name| {
            self.formats[name]
                .file_extensions()
                .iter()
                .any(|ext| *ext == extension)
        });
        names.first().map(|name| self.formats[name].as_ref())
    }

    /// Parse source text using the specified format
    pub fn parse(&self, source: &str, format: &str) -> Result<Vec<PromptNode>, FormatError> {
        let fmt = self.get(format)?;
        if !fmt.supports_parsing() {
            return Err(FormatError::NotSupported(format!(
                "Format '{}' does not support parsing",
                format
            )));
        }
        fmt.parse(source)
    }

    /// Serialize nodes using the specified format
    pub fn serialize(&self, nodes: &[PromptNode], format: &str) -> Result<String, FormatError> {
        let fmt = self.get(format)?;
        if !fmt.supports_serialization() {
            return Err(FormatError::NotSupported(format!(
                "Format '{}' does not support serialization",
                format
            )));
        }
        fmt.serialize(nodes)
    }

    /// Parse with one format and serialize with another
    pub fn convert(&self, source: &str, from: &str, to: &str) -> Result<String, FormatError> {
        let nodes = self.parse(source, from)?;
        self.serialize(&nodes, to)
    }

    /// Create a registry with default formats
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(crate::formats::prompt::PromptFormat);
        registry.register(crate::formats::json::JsonFormat::default());
        registry.register(crate::formats::yaml::YamlFormat);
        registry.register(crate::formats::tag::TagFormat);
        registry.register(crate::formats::treeviz::TreevizFormat::default());

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestFormat;
    impl Format for TestFormat {
        fn name(&self) -> &str {
            "test"
        }
        fn description(&self) -> &str {
            "Test format"
        }
        fn file_extensions(&self) -> &[&str] {
            &["test", "txt"]
        }
        fn supports_parsing(&self) -> bool {
            true
        }
        fn supports_serialization(&self) -> bool {
            true
        }
        fn parse(&self, _source: &str) -> Result<Vec<PromptNode>, FormatError> {
            Ok(vec![PromptNode::plain("test")])
        }
        fn serialize(&self, _nodes: &[PromptNode]) -> Result<String, FormatError> {
            Ok("test output".to_string())
        }
    }

    #[test]
    fn test_registry_creation() {
        let registry = FormatRegistry::new();
        assert_eq!(registry.formats.len(), 0);
    }

    #[test]
    fn test_registry_register() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormat);

        assert!(registry.has("test"));
        assert_eq!(registry.list_formats(), vec!["test"]);
    }

    #[test]
    fn test_registry_get_nonexistent() {
        let registry = FormatRegistry::new();
        match registry.get("nonexistent") {
            Err(FormatError::FormatNotFound(name)) => assert_eq!(name, "nonexistent"),
            _ => panic!("Expected FormatNotFound error"),
        }
    }

    #[test]
    fn test_registry_parse_and_serialize() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormat);

        let nodes = registry.parse("input", "test").unwrap();
        assert_eq!(nodes, vec![PromptNode::plain("test")]);
        assert_eq!(registry.serialize(&nodes, "test").unwrap(), "test output");
    }

    #[test]
    fn test_registry_format_for_extension() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormat);

        assert_eq!(
            registry.format_for_extension("TXT").map(|f| f.name()),
            Some("test")
        );
        assert!(registry.format_for_extension("json").is_none());
    }

    #[test]
    fn test_defaults() {
        let registry = FormatRegistry::with_defaults();
        assert_eq!(
            registry.list_formats(),
            vec!["json", "prompt", "tag", "treeviz", "yaml"]
        );
        assert!(registry.has("yaml"));
        assert!(!registry.has("markdown"));
        assert_eq!(
            registry.format_for_extension("yml").map(|f| f.name()),
            Some("yaml")
        );
    }

    #[test]
    fn test_serialize_only_format_rejects_parsing() {
        let registry = FormatRegistry::with_defaults();
        match registry.parse("anything", "treeviz") {
            Err(FormatError::NotSupported(msg)) => assert!(msg.contains("treeviz")),
            other => panic!("Expected NotSupported, got {:?}", other),
        }
    }

    #[test]
    fn test_convert_prompt_to_prompt_canonicalizes() {
        let registry = FormatRegistry::with_defaults();
        let output = registry
            .convert("masterpiece ,(fog:0.70)", "prompt", "prompt")
            .unwrap();
        assert_eq!(output, "masterpiece, (fog:0.7)");
    }
}
