//! Core module: record parsing, graph emission, rendering and the conversion pipeline

pub mod config;
pub mod graph;
pub mod models;
pub mod pipeline;
pub mod records;
pub mod render;

/// Returns the current version of the `famgraph` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
