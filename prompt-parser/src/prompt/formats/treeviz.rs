//! Treeviz formatter for parsed prompts
//!
//! Treeviz is a visual representation of the node tree, one line per node, which makes it
//! quick to check how a prompt was split and classified.
//!
//! It encodes nesting with box-drawing connectors, 2 columns per level:
//! <prefix><connector> <icon><space><label> (label truncated, 30 characters by default)
//!
//! Example:
//!
//!   ⧉ 3 fragments
//!   ├─ ◦ masterpiece
//!   ├─ ⚖ (fog:0.7)
//!   │ └─ ◦ fog
//!   └─ ⇄ [red|blue]
//!     ├─ ◦ red
//!     └─ ◦ blue
//!
//! Icons
//!     Prompt: ⧉
//!     Plain: ◦
//!     ExtraNetworks: ⊕
//!     Positive: ▲
//!     Negative: ▼
//!     Weighted: ⚖
//!     Alternate: ⇄
//!     ScheduledFull: ⇆
//!     ScheduledFrom: ⇤
//!     ScheduledTo: ⇥

use crate::prompt::ast::{snapshot_from_nodes, NodeSnapshot, PromptNode};
use std::collections::HashMap;

pub const DEFAULT_MAX_LABEL: usize = 30;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

fn get_icon(node_type: &str) -> &'static str {
    match node_type {
        "Prompt" => "⧉",
        "Plain" => "◦",
        "ExtraNetworks" => "⊕",
        "Positive" => "▲",
        "Negative" => "▼",
        "Weighted" => "⚖",
        "Alternate" => "⇄",
        "ScheduledFull" => "⇆",
        "ScheduledFrom" => "⇤",
        "ScheduledTo" => "⇥",
        _ => "○",
    }
}

fn format_snapshot(
    snapshot: &NodeSnapshot,
    prefix: &str,
    is_last: bool,
    max_label: usize,
) -> String {
    let connector = if is_last { "└─" } else { "├─" };
    let mut output = format!(
        "{}{} {} {}\n",
        prefix,
        connector,
        get_icon(&snapshot.node_type),
        truncate(&snapshot.label, max_label)
    );

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    let child_count = snapshot.children.len();
    for (i, child) in snapshot.children.iter().enumerate() {
        output.push_str(&format_snapshot(
            child,
            &child_prefix,
            i == child_count - 1,
            max_label,
        ));
    }

    output
}

fn format_root_snapshot(snapshot: &NodeSnapshot, max_label: usize) -> String {
    let mut output = format!(
        "{} {}\n",
        get_icon(&snapshot.node_type),
        truncate(&snapshot.label, max_label)
    );

    let child_count = snapshot.children.len();
    for (i, child) in snapshot.children.iter().enumerate() {
        output.push_str(&format_snapshot(child, "", i == child_count - 1, max_label));
    }

    output
}

pub fn to_treeviz_str(nodes: &[PromptNode]) -> String {
    to_treeviz_str_with_params(nodes, &HashMap::new())
}

/// Supported params: `max-label` (label width in characters before truncation).
pub fn to_treeviz_str_with_params(nodes: &[PromptNode], params: &HashMap<String, String>) -> String {
    let max_label = params
        .get("max-label")
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_MAX_LABEL);

    let snapshot = snapshot_from_nodes(nodes);
    format_root_snapshot(&snapshot, max_label)
}
