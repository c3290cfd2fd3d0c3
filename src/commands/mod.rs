//! Command implementations for Playprep CLI

pub mod check;
pub mod completions;
pub mod version;
