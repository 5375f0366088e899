//! AST definitions for the prompt notation
//!
//!     A parsed prompt is a flat, ordered sequence of [PromptNode]s, one per top-level
//!     fragment. There is no document root: the sequence itself is the prompt.
//!
//! Nesting
//!
//!     The notation is one level deep. Every composite node (weighted, positive, scheduled,
//!     ...) holds its phrases as [Plain] leaves carrying raw text, and the parser never looks
//!     inside that text again. `((a))` is emphasis of depth 2 around `a`; `[(a)|b]` is an
//!     alternation whose first option is the literal text `(a)`.
//!
//!     This is enforced by the types: composite variants take `Plain` fields rather than
//!     nested `PromptNode`s, so the child count of each kind and the leaf-only children rule
//!     hold at compile time. See [node] for the variants.
//!
//!     The [snapshot] module flattens a node sequence into a normalized tree consumed by
//!     the presentation formats (treeviz, tag).

pub mod error;
pub mod node;
pub mod snapshot;

pub use error::{FragmentError, ParseError};
pub use node::{NodeKind, Plain, PromptNode};
pub use snapshot::{snapshot_from_nodes, snapshot_node, NodeSnapshot};
