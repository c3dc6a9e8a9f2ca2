//! Subcommand implementations.

pub mod get;
pub mod set;
