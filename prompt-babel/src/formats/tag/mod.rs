//! XML-like tag serialization
//!
//! Serializes node snapshots to an XML-like format.
//!
//! ## Format
//!
//! - Node type → tag name (snake-case)
//! - Attributes → XML attributes, sorted by name
//! - Label → text content (canonical prompt text for nodes, raw text for leaves)
//! - Children → nested tags
//!
//! ## Example
//!
//! ```text
//! <prompt>
//!   <plain>masterpiece</plain>
//!   <weighted weight="0.7">(fog:0.7)
//!     <plain>fog</plain>
//!   </weighted>
//! </prompt>
//! ```

use crate::error::FormatError;
use crate::format::Format;
use prompt_parser::prompt::ast::{snapshot_from_nodes, NodeSnapshot};
use prompt_parser::PromptNode;

struct TagSerializer {
    output: String,
    indent_level: usize,
}

impl TagSerializer {
    fn new() -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
        }
    }

    fn indent(&self) -> String {
        "  ".repeat(self.indent_level)
    }

    fn push_indent(&mut self, s: &str) {
        self.output.push_str(&self.indent());
        self.output.push_str(s);
    }

    fn serialize_snapshot(&mut self, snapshot: &NodeSnapshot) {
        let tag = to_tag_name(&snapshot.node_type);
        let attributes: String = snapshot
            .attributes
            .iter()
            .map(|(key, value)| format!(" {}=\"{}\"", key, escape_xml(value)))
            .collect();

        self.push_indent(&format!("<{}{}>", tag, attributes));
        self.output.push_str(&escape_xml(&snapshot.label));

        if snapshot.children.is_empty() {
            self.output.push_str(&format!("</{}>", tag));
            self.output.push('\n');
        } else {
            self.output.push('\n');
            self.indent_level += 1;
            for child in &snapshot.children {
                self.serialize_snapshot(child);
            }
            self.indent_level -= 1;
            self.push_indent(&format!("</{}>", tag));
            self.output.push('\n');
        }
    }
}

/// Convert a node type name to a tag name (e.g., "ExtraNetworks" → "extra_networks")
fn to_tag_name(node_type: &str) -> String {
    let mut tag = String::new();
    for (i, c) in node_type.chars().enumerate() {
        if i > 0 && c.is_uppercase() {
            tag.push('_');
        }
        tag.extend(c.to_lowercase());
    }
    tag
}

/// Serialize a prompt to tag format
pub fn serialize_nodes(nodes: &[PromptNode]) -> String {
    let snapshot = snapshot_from_nodes(nodes);

    // The root carries no useful label, only its children are written
    let mut serializer = TagSerializer::new();
    serializer.indent_level = 1;
    for child in &snapshot.children {
        serializer.serialize_snapshot(child);
    }

    format!("<prompt>\n{}</prompt>", serializer.output)
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\"', "&quot;")
        .replace('\'', "&apos;")
}

pub struct TagFormat;

impl Format for TagFormat {
    fn name(&self) -> &str {
        "tag"
    }

    fn description(&self) -> &str {
        "XML-like tag format with hierarchical structure"
    }

    fn file_extensions(&self) -> &[&str] {
        &["tag", "xml"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, nodes: &[PromptNode]) -> Result<String, FormatError> {
        Ok(serialize_nodes(nodes))
    }
}
