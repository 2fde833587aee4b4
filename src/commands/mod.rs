//! Command implementations for ghopen CLI

pub mod check;
pub mod completions;
pub mod url;
pub mod version;
