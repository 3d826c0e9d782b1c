//! Family graph construction: field resolution, deduplicated marriages and DOT output

pub mod document;
pub mod emitter;
pub mod palette;
pub mod resolver;

pub use document::{GraphDocument, NodeStatement, Statement};
pub use emitter::GraphEmitter;
pub use palette::{GenerationPalette, DEFAULT_PALETTE};
pub use resolver::{FieldResolver, ResolvedPerson};
