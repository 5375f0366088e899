//! Node snapshot - a normalized intermediate representation of a parsed prompt
//!
//! This module provides a canonical, format-agnostic tree view of a node sequence
//! suitable for presentation formats (treeviz, tag, ...).
//!
//! The snapshot captures node types, labels, attributes and children, allowing each
//! serializer to focus solely on presentation without reimplementing traversal logic.
//! All serializers should consume the output of [snapshot_from_nodes] rather than
//! matching on [PromptNode] themselves.

use super::node::{NodeKind, Plain, PromptNode};
use crate::prompt::formats::generator::{format_number, ToPromptString};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Node type of the synthetic root wrapping a whole prompt
pub const ROOT_NODE_TYPE: &str = "Prompt";

/// A snapshot of a prompt node in a normalized, serializable form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeSnapshot {
    /// The type of node (e.g., "Weighted", "Alternate", "Plain")
    pub node_type: String,

    /// The primary label: canonical source text for nodes, raw text for leaves
    pub label: String,

    /// Payload values specific to the node type (depth, weight, at, network)
    pub attributes: BTreeMap<String, String>,

    /// Child nodes in the tree
    pub children: Vec<NodeSnapshot>,
}

impl NodeSnapshot {
    pub fn new(node_type: String, label: String) -> Self {
        Self {
            node_type,
            label,
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, key: &str, value: String) -> Self {
        self.attributes.insert(key.to_string(), value);
        self
    }

    pub fn with_child(mut self, child: NodeSnapshot) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: Vec<NodeSnapshot>) -> Self {
        self.children.extend(children);
        self
    }
}

/// Snapshot of a whole prompt, rooted at a `Prompt` node whose label is the fragment count.
pub fn snapshot_from_nodes(nodes: &[PromptNode]) -> NodeSnapshot {
    let label = match nodes.len() {
        1 => "1 fragment".to_string(),
        n => format!("{n} fragments"),
    };
    NodeSnapshot::new(ROOT_NODE_TYPE.to_string(), label)
        .with_children(nodes.iter().map(snapshot_node).collect())
}

/// Snapshot of a single node and its plain leaves.
pub fn snapshot_node(node: &PromptNode) -> NodeSnapshot {
    let kind = node.kind();
    let base = NodeSnapshot::new(kind.node_type().to_string(), node.to_prompt_string());

    match node {
        // A top-level plain node is its own leaf
        PromptNode::Plain(_) => base,
        PromptNode::ExtraNetworks { network, args } => base
            .with_attribute("network", network.clone())
            .with_child(snapshot_plain(args)),
        PromptNode::Positive { depth, content } | PromptNode::Negative { depth, content } => base
            .with_attribute("depth", depth.to_string())
            .with_child(snapshot_plain(content)),
        PromptNode::Weighted { weight, content } => base
            .with_attribute("weight", format_number(*weight))
            .with_child(snapshot_plain(content)),
        PromptNode::Alternate { options } => {
            base.with_children(options.iter().map(snapshot_plain).collect())
        }
        PromptNode::ScheduledFull { at, from, to } => base
            .with_attribute("at", format_number(*at))
            .with_child(snapshot_plain(from))
            .with_child(snapshot_plain(to)),
        PromptNode::ScheduledFrom { at, from } => base
            .with_attribute("at", format_number(*at))
            .with_child(snapshot_plain(from)),
        PromptNode::ScheduledTo { at, to } => base
            .with_attribute("at", format_number(*at))
            .with_child(snapshot_plain(to)),
    }
}

fn snapshot_plain(plain: &Plain) -> NodeSnapshot {
    NodeSnapshot::new(NodeKind::Plain.node_type().to_string(), plain.text.clone())
}
