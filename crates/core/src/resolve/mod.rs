//! Environment resolution
//!
//! Turns a catalog entry into fully merged descriptors:
//! parents are walked first, then ancestors are folded in with fill-only
//! merges, and finally requested targets are layered on with override merges.

pub mod environment;
pub mod parents;
pub mod target;


pub use environment::{ResolvedEnv, resolve_environment};
pub use parents::resolve_parents;
pub use target::{Specialization, TargetMode, specialize};
