//! Parsing module for the prompt notation
//!
//!     Parsing is two steps, both deliberately shallow:
//!         1. Splitting: the prompt is cut on every `,` into fragments, and each fragment
//!            is trimmed. See [split_fragments].
//!         2. Classification: each fragment is classified by its outer delimiters and handed
//!            to the matching extractor. See [fragment] and [extraction].
//!
//! The Notation
//!
//!     masterpiece, (fog:0.7), ((good anatomy)), [real photo], <lora:Zelda_v1:0.5>
//!
//!     Fragments are classified by their first and last characters:
//!
//!         <kind:args>       extra network
//!         (text:weight)     weighted (any `:` inside the parentheses)
//!         ((text))          positive emphasis, depth = pairs of parentheses
//!         [...]             one of the square bracket forms, see [extraction::bracketed]
//!         anything else     plain text
//!
//! Known Limitations
//!
//!     Splitting is not bracket aware. `[red, green|blue]` is two fragments, `[red` and
//!     `green|blue]`, each classified on its own (both end up plain). Escaped delimiters are
//!     not supported either.
//!
//!     Content inside brackets is never parsed again: `[(a)|b]` holds the literal option
//!     `(a)`, and `((a:0.5))` is classified as weighted on its outer pair only.

pub mod extraction;
pub mod fragment;

use crate::prompt::ast::{ParseError, PromptNode};

pub use fragment::parse_fragment;

/// Parse a prompt into its top-level nodes.
///
/// A prompt that is empty or only whitespace yields no nodes. Otherwise there is exactly one
/// node per comma-separated fragment, empty fragments included (as empty plain nodes). The
/// first fragment that fails aborts the whole parse.
pub fn parse(source: &str) -> Result<Vec<PromptNode>, ParseError> {
    split_fragments(source)
        .into_iter()
        .enumerate()
        .map(|(index, fragment)| {
            parse_fragment(fragment).map_err(|cause| ParseError::new(index, fragment, cause))
        })
        .collect()
}

/// Split a prompt on every comma and trim each fragment.
pub fn split_fragments(source: &str) -> Vec<&str> {
    if source.trim().is_empty() {
        return Vec::new();
    }
    source.split(',').map(str::trim).collect()
}
