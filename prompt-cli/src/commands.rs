//! Command implementations for the prompt CLI
//!
//! Every command returns the text to print or an error message. Printing and exit codes
//! are left to `main.rs`.

use prompt_babel::formats::json::JsonFormat;
use prompt_babel::formats::treeviz::TreevizFormat;
use prompt_babel::FormatRegistry;
use prompt_config::{Loader, PromptConfig};
use std::io::Read;
use std::path::Path;

/// Path argument that reads the source from stdin
pub const STDIN_PATH: &str = "-";

/// Configuration and formats shared by all commands
pub struct Session {
    pub config: PromptConfig,
    pub registry: FormatRegistry,
}

impl Session {
    /// Load the defaults, layering `config_path` on top when given.
    pub fn load(config_path: Option<&str>) -> Result<Self, String> {
        let mut loader = Loader::new();
        if let Some(path) = config_path {
            loader = loader.with_file(path);
        }
        let config = loader
            .build()
            .map_err(|e| format!("Invalid configuration: {}", e))?;
        Ok(Self::with_config(config))
    }

    /// Build the default registry with formats tuned by `config`.
    pub fn with_config(config: PromptConfig) -> Self {
        let mut registry = FormatRegistry::with_defaults();
        registry.register(JsonFormat::new(config.formats.json.pretty));
        registry.register(TreevizFormat::new(config.formats.treeviz.max_label));
        Self { config, registry }
    }

    /// Pick the input format: explicit flag, then file extension, then the configured default.
    pub fn source_format(&self, path: &str, explicit: Option<&str>) -> String {
        if let Some(name) = explicit {
            return name.to_string();
        }
        Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| self.registry.format_for_extension(ext))
            .filter(|format| format.supports_parsing())
            .map(|format| format.name().to_string())
            .unwrap_or_else(|| self.config.convert.from.clone())
    }

    pub fn convert(
        &self,
        path: &str,
        from: Option<&str>,
        to: Option<&str>,
    ) -> Result<String, String> {
        let source = read_source(path)?;
        let from = self.source_format(path, from);
        let to = to.unwrap_or(&self.config.convert.to);
        self.registry
            .convert(&source, &from, to)
            .map_err(|e| e.to_string())
    }

    /// Rewrite a prompt in canonical form.
    pub fn format(&self, path: &str, from: Option<&str>) -> Result<String, String> {
        self.convert(path, from, Some("prompt"))
    }

    pub fn inspect(&self, path: &str, from: Option<&str>) -> Result<String, String> {
        self.convert(path, from, Some("treeviz"))
    }

    /// Parse only, reporting the fragment count.
    pub fn check(&self, path: &str, from: Option<&str>) -> Result<String, String> {
        let source = read_source(path)?;
        let from = self.source_format(path, from);
        let nodes = self
            .registry
            .parse(&source, &from)
            .map_err(|e| e.to_string())?;
        let noun = if nodes.len() == 1 {
            "fragment"
        } else {
            "fragments"
        };
        Ok(format!("ok: {} {}", nodes.len(), noun))
    }

    pub fn list_formats(&self) -> String {
        let mut output = String::from("Available formats:\n");
        for name in self.registry.list_formats() {
            let Ok(format) = self.registry.get(&name) else {
                continue;
            };
            let mut modes = Vec::new();
            if format.supports_parsing() {
                modes.push("parse");
            }
            if format.supports_serialization() {
                modes.push("serialize");
            }
            output.push_str(&format!(
                "\n  {} [{}]\n    {}\n",
                name,
                modes.join(", "),
                format.description()
            ));
        }
        output
    }
}

/// Read a whole file, or stdin for [`STDIN_PATH`].
pub fn read_source(path: &str) -> Result<String, String> {
    if path == STDIN_PATH {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .map_err(|e| format!("Error reading stdin: {}", e))?;
        return Ok(source);
    }
    std::fs::read_to_string(path).map_err(|e| format!("Error reading file {}: {}", path, e))
}
