//! Data models for `famgraph`

pub mod marriage;
pub mod person;

pub use marriage::{MarriagePair, MarriageRegistry};
pub use person::{Field, PersonRecord};
