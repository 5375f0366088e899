//! Main module for prompt library functionality

pub mod ast;
pub mod formats;
pub mod parsing;
pub mod testing;
