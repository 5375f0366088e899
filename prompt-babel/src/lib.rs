//! Multi-format interoperability for parsed prompts
//!
//!     This crate provides a uniform interface for converting node sequences to and from
//!     other representations.
//!
//! Architecture
//!
//!     - Format trait: Uniform interface for all formats (parsing and/or serialization)
//!     - FormatRegistry: Centralized discovery and selection of formats
//!     - Format implementations: one module per format under `formats/`
//!
//!     This is a pure lib: it powers prompt-cli but is shell agnostic, so nothing here
//!     prints, reads env vars or touches files.
//!
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── formats
//!     │   ├── prompt              # The notation itself (parse + serialize)
//!     │   ├── json                # serde_json (parse + serialize)
//!     │   ├── yaml                # serde_yaml (parse + serialize)
//!     │   ├── tag                 # XML-like snapshot dump (serialize)
//!     │   └── treeviz             # One line per node (serialize)
//!     └── lib.rs
//!
//! The Prompt Format
//!
//!     The prompt notation is implemented as a format too, see ./formats/prompt/mod.rs, so
//!     that converting between any two formats goes through the same two registry calls.
//!     JSON and YAML carry the node sequence losslessly, so prompt -> json -> prompt gives
//!     back the canonical prompt text.

pub mod error;
pub mod format;
pub mod formats;
pub mod registry;

pub use error::FormatError;
pub use format::Format;
pub use registry::FormatRegistry;
