//! Environment documents and their building blocks
//!
//! Documents are decoded into [`Environment`] values, which are merged by the
//! resolver using the policies in [`merge`].

mod decode;
mod environment;
pub mod loader;
pub mod merge;

// Re-export main types
pub use environment::{CommandTable, Environment, TargetLayers, TargetSpec};
pub use loader::CatalogLoader;
pub use merge::MergePolicy;
