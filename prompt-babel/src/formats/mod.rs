//! Format implementations
//!
//! This module contains all format implementations that convert between
//! node sequences and various text representations.

pub mod json;
pub mod prompt;
pub mod tag;
pub mod treeviz;
pub mod yaml;

pub use json::JsonFormat;
pub use prompt::PromptFormat;
pub use tag::TagFormat;
pub use treeviz::TreevizFormat;
pub use yaml::YamlFormat;
