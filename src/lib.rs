//! Shared library for `famgraph`
//! Converts genealogy CSV exports into Graphviz family-tree documents and renders them.

pub mod core;
pub mod logger;

pub use core::{config, get_version};
