//! Prompt nodes
//!
//!     One variant per form of the notation:
//!
//!         plain             masterpiece
//!         extra_networks    <lora:Zelda_v1:0.5>
//!         positive          ((good anatomy))
//!         negative          [[blurry]]
//!         weighted          (fog:0.7)
//!         alternate         [red|green|blue]
//!         scheduled_full    [highlight:dark:0.9]
//!         scheduled_from    [highlight::0.9]
//!         scheduled_to      [:dark:0.9]
//!
//!     Nodes are plain values: built once by the parser, compared structurally, never
//!     mutated afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A leaf phrase held by a composite node. Its text is never re-parsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Plain {
    pub text: String,
}

impl Plain {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl From<&str> for Plain {
    fn from(text: &str) -> Self {
        Plain::new(text)
    }
}

impl From<String> for Plain {
    fn from(text: String) -> Self {
        Plain { text }
    }
}

/// A single top-level fragment of a prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PromptNode {
    Plain(Plain),
    /// Inline reference to an auxiliary model. `args` holds `name:arg` verbatim.
    ExtraNetworks { network: String, args: Plain },
    Positive { depth: usize, content: Plain },
    Negative { depth: usize, content: Plain },
    Weighted { weight: f64, content: Plain },
    Alternate { options: Vec<Plain> },
    ScheduledFull { at: f64, from: Plain, to: Plain },
    ScheduledFrom { at: f64, from: Plain },
    ScheduledTo { at: f64, to: Plain },
}

impl PromptNode {
    pub fn plain(text: impl Into<String>) -> Self {
        PromptNode::Plain(Plain::new(text))
    }

    pub fn extra_networks(network: impl Into<String>, args: impl Into<String>) -> Self {
        PromptNode::ExtraNetworks {
            network: network.into(),
            args: Plain::new(args),
        }
    }

    pub fn positive(depth: usize, content: impl Into<String>) -> Self {
        PromptNode::Positive {
            depth,
            content: Plain::new(content),
        }
    }

    pub fn negative(depth: usize, content: impl Into<String>) -> Self {
        PromptNode::Negative {
            depth,
            content: Plain::new(content),
        }
    }

    pub fn weighted(content: impl Into<String>, weight: f64) -> Self {
        PromptNode::Weighted {
            weight,
            content: Plain::new(content),
        }
    }

    pub fn alternate<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PromptNode::Alternate {
            options: options.into_iter().map(Plain::new).collect(),
        }
    }

    pub fn scheduled_full(from: impl Into<String>, to: impl Into<String>, at: f64) -> Self {
        PromptNode::ScheduledFull {
            at,
            from: Plain::new(from),
            to: Plain::new(to),
        }
    }

    pub fn scheduled_from(from: impl Into<String>, at: f64) -> Self {
        PromptNode::ScheduledFrom {
            at,
            from: Plain::new(from),
        }
    }

    pub fn scheduled_to(to: impl Into<String>, at: f64) -> Self {
        PromptNode::ScheduledTo {
            at,
            to: Plain::new(to),
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            PromptNode::Plain(_) => NodeKind::Plain,
            PromptNode::ExtraNetworks { .. } => NodeKind::ExtraNetworks,
            PromptNode::Positive { .. } => NodeKind::Positive,
            PromptNode::Negative { .. } => NodeKind::Negative,
            PromptNode::Weighted { .. } => NodeKind::Weighted,
            PromptNode::Alternate { .. } => NodeKind::Alternate,
            PromptNode::ScheduledFull { .. } => NodeKind::ScheduledFull,
            PromptNode::ScheduledFrom { .. } => NodeKind::ScheduledFrom,
            PromptNode::ScheduledTo { .. } => NodeKind::ScheduledTo,
        }
    }

    /// The plain leaves of this node, in source order. A plain node is its own leaf.
    pub fn children(&self) -> Vec<&Plain> {
        match self {
            PromptNode::Plain(plain) => vec![plain],
            PromptNode::ExtraNetworks { args, .. } => vec![args],
            PromptNode::Positive { content, .. }
            | PromptNode::Negative { content, .. }
            | PromptNode::Weighted { content, .. } => vec![content],
            PromptNode::Alternate { options } => options.iter().collect(),
            PromptNode::ScheduledFull { from, to, .. } => vec![from, to],
            PromptNode::ScheduledFrom { from, .. } => vec![from],
            PromptNode::ScheduledTo { to, .. } => vec![to],
        }
    }

    pub fn as_plain(&self) -> Option<&Plain> {
        match self {
            PromptNode::Plain(plain) => Some(plain),
            _ => None,
        }
    }

    /// Emphasis depth for positive and negative nodes.
    pub fn depth(&self) -> Option<usize> {
        match self {
            PromptNode::Positive { depth, .. } | PromptNode::Negative { depth, .. } => Some(*depth),
            _ => None,
        }
    }

    /// The weight of a weighted node, or the switch-point of a scheduled one.
    pub fn number(&self) -> Option<f64> {
        match self {
            PromptNode::Weighted { weight, .. } => Some(*weight),
            PromptNode::ScheduledFull { at, .. }
            | PromptNode::ScheduledFrom { at, .. }
            | PromptNode::ScheduledTo { at, .. } => Some(*at),
            _ => None,
        }
    }
}

/// The kind of a [PromptNode], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Plain,
    ExtraNetworks,
    Positive,
    Negative,
    Weighted,
    Alternate,
    ScheduledFull,
    ScheduledFrom,
    ScheduledTo,
}

impl NodeKind {
    pub const ALL: [NodeKind; 9] = [
        NodeKind::Plain,
        NodeKind::ExtraNetworks,
        NodeKind::Positive,
        NodeKind::Negative,
        NodeKind::Weighted,
        NodeKind::Alternate,
        NodeKind::ScheduledFull,
        NodeKind::ScheduledFrom,
        NodeKind::ScheduledTo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Plain => "plain",
            NodeKind::ExtraNetworks => "extra_networks",
            NodeKind::Positive => "positive",
            NodeKind::Negative => "negative",
            NodeKind::Weighted => "weighted",
            NodeKind::Alternate => "alternate",
            NodeKind::ScheduledFull => "scheduled_full",
            NodeKind::ScheduledFrom => "scheduled_from",
            NodeKind::ScheduledTo => "scheduled_to",
        }
    }

    /// CamelCase name used by snapshots (e.g. "ExtraNetworks").
    pub fn node_type(&self) -> &'static str {
        match self {
            NodeKind::Plain => "Plain",
            NodeKind::ExtraNetworks => "ExtraNetworks",
            NodeKind::Positive => "Positive",
            NodeKind::Negative => "Negative",
            NodeKind::Weighted => "Weighted",
            NodeKind::Alternate => "Alternate",
            NodeKind::ScheduledFull => "ScheduledFull",
            NodeKind::ScheduledFrom => "ScheduledFrom",
            NodeKind::ScheduledTo => "ScheduledTo",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
