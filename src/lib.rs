//! Test host for cross-crate integration tests; see `tests/`.
pub use hostenv_core::*;
