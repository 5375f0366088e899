//! # prompt-parser
//!
//! A parser and generator for the weighted prompt notation used to drive
//! text-to-image models.
//!
//! File Layout
//!
//!     The crate mirrors the two directions of the notation:
//!
//!     src/prompt
//!       ├── ast        Node types, errors and the normalized snapshot
//!       ├── parsing    Text to nodes (fragment splitting + per-form extraction)
//!       ├── formats    Nodes to text (the generator, treeviz)
//!       └── testing    Fixture loading and round-trip assertions for tests
//!
//!     Both directions share one grammar, and the generator is the exact inverse of the
//!     parser for any node sequence the parser can produce. That contract is what the
//!     round-trip tests in `tests/` hold us to.
//!
//!     For the notation itself, see the [parsing module](prompt::parsing).

pub mod prompt;

pub use prompt::ast::{FragmentError, NodeKind, ParseError, Plain, PromptNode};
pub use prompt::formats::generate;
pub use prompt::parsing::parse;
