//! Testing utilities for prompt parsing
//!
//!     Prompts in the wild are messy, and a test against a made-up string that is slightly
//!     off teaches the parser the wrong thing. Whole-prompt tests should load one of the
//!     curated files under `samples/` through [Samples] instead of inlining prompt text.
//!     Inline strings are fine for single-fragment unit tests next to the extractors.
//!
//!     ```rust,ignore
//!     use prompt_parser::prompt::testing::{assert_kinds, assert_round_trip, Samples};
//!
//!     let source = Samples::kitchensink();
//!     assert_round_trip(&source);
//!     ```
//!
//!     The sample files are:
//!
//!         - kitchensink: every common form, in canonical text
//!         - loras: many extra network references mixed with plain tags
//!         - schedules: alternation, the scheduled forms and nested negatives
//!         - messy: valid but non-canonical spacing and number formatting

use crate::prompt::ast::{NodeKind, PromptNode};
use crate::prompt::formats::generate;
use crate::prompt::parsing::parse;
use std::fs;
use std::path::PathBuf;

/// Access to the curated sample prompts shipped with the crate.
pub struct Samples;

impl Samples {
    pub fn path(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("samples")
            .join(format!("{name}.prompt"))
    }

    /// Load a sample by name, without its trailing newline.
    pub fn source(name: &str) -> String {
        let path = Self::path(name);
        let source = fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("failed to read sample {}: {}", path.display(), e));
        source.trim_end_matches(['\n', '\r']).to_string()
    }

    /// Load and parse a sample; panics if the sample does not parse.
    pub fn parse(name: &str) -> Vec<PromptNode> {
        let source = Self::source(name);
        parse(&source).unwrap_or_else(|e| panic!("sample {name} failed to parse: {e}"))
    }

    pub fn kitchensink() -> String {
        Self::source("kitchensink")
    }

    pub fn loras() -> String {
        Self::source("loras")
    }

    pub fn schedules() -> String {
        Self::source("schedules")
    }

    pub fn messy() -> String {
        Self::source("messy")
    }
}

/// Assert that `source` is canonical: it parses and renders back unchanged.
pub fn assert_round_trip(source: &str) {
    let nodes = parse(source).unwrap_or_else(|e| panic!("failed to parse {source:?}: {e}"));
    assert_eq!(generate(&nodes), source, "round trip changed the prompt");
}

/// Assert that `source` parses and renders as `expected`.
pub fn assert_canonical(source: &str, expected: &str) {
    let nodes = parse(source).unwrap_or_else(|e| panic!("failed to parse {source:?}: {e}"));
    assert_eq!(generate(&nodes), expected);
}

/// Assert the kinds of a node sequence, in order.
pub fn assert_kinds(nodes: &[PromptNode], expected: &[NodeKind]) {
    let kinds: Vec<NodeKind> = nodes.iter().map(PromptNode::kind).collect();
    assert_eq!(kinds, expected, "node kinds differ");
}
