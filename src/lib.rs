//! Recursive directory copy with file name and extension filters.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utility;
