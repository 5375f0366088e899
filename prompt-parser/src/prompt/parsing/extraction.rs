//! Per-form data extraction
//!
//!     Once a fragment is classified, one extractor pulls the payload and the plain
//!     children out of it. Extractors work on the trimmed fragment text, strip exactly the
//!     delimiters their form owns and never descend into the children.
//!
//!         extra_networks   <kind:args>
//!         parenthesized    weighted and positive
//!         bracketed        alternate, scheduled (full / from / to) and negative
//!
//!     Numbers (weights and switch-points) are read with [parse_number].

pub mod bracketed;
pub mod extra_networks;
pub mod parenthesized;

use std::str::FromStr;

/// Strip one leading `open` and one trailing `close`, if both are present.
pub(crate) fn strip_pair(text: &str, open: char, close: char) -> Option<&str> {
    text.strip_prefix(open)?.strip_suffix(close)
}

/// Strip `open`/`close` pairs as long as both ends carry them.
///
/// Returns the innermost text and the number of pairs removed.
pub(crate) fn strip_nested(mut text: &str, open: char, close: char) -> (&str, usize) {
    let mut depth = 0;
    while let Some(inner) = strip_pair(text, open, close) {
        text = inner;
        depth += 1;
    }
    (text, depth)
}

/// Read a weight or switch-point. The text is taken as is: surrounding whitespace is an error.
pub fn parse_number(text: &str) -> Option<f64> {
    f64::from_str(text).ok()
}
