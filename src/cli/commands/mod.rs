//! CLI command handlers for `famgraph`.
//!
//! Each subcommand lives in its own submodule.

pub mod config;
pub mod convert;
