//! Extra network extraction
//!
//! `<kind:args>` references an auxiliary model (a LoRA, a hypernetwork). Only the kind is
//! split off; `args` (usually `name:multiplier`) is kept verbatim as the plain child.

use super::strip_pair;
use crate::prompt::ast::{FragmentError, NodeKind, PromptNode};

pub fn parse_extra_networks(fragment: &str) -> Result<PromptNode, FragmentError> {
    let invalid = || FragmentError::InvalidFormat {
        kind: NodeKind::ExtraNetworks,
        fragment: fragment.to_string(),
    };

    let content = strip_pair(fragment, '<', '>').ok_or_else(invalid)?;
    let (network, args) = content.split_once(':').ok_or_else(invalid)?;
    Ok(PromptNode::extra_networks(network, args))
}
