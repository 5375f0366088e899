//! Output formats for parsed prompts
//!
//! - Node sequences back to prompt text (generator)
//! - Node sequences to a visual tree (treeviz)

pub mod generator;
pub mod treeviz;

pub use generator::{format_number, generate, ToPromptString};
pub use treeviz::{to_treeviz_str, to_treeviz_str_with_params};
