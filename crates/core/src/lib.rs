//! hostenv - resolve layered host environments into execution descriptors
//!
//! This crate provides functionality to:
//! - Load environment documents (TOML or JSON) into a read-only [`Catalog`]
//! - Resolve an environment through its parent chain with fill-only merges
//! - Specialize a resolved environment for individual targets
//! - Expand descriptors into per-host [`Invocation`]s for an executor
pub mod catalog;
pub mod config;
pub mod error;
pub mod plan;
pub mod resolve;

// Re-export commonly used types and functions
pub use catalog::{Catalog, DEFAULT_ENVIRONMENT};
pub use config::{CatalogLoader, CommandTable, Environment, MergePolicy, TargetLayers, TargetSpec};
pub use error::{Error, Result};
pub use plan::{Channel, CommandKind, Invocation};
pub use resolve::{
    ResolvedEnv, Specialization, TargetMode, resolve_environment, resolve_parents, specialize,
};
