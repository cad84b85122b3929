//! Parent-chain walking with cycle detection

use tracing::debug;

use crate::catalog::{Catalog, DEFAULT_ENVIRONMENT};
use crate::error::{Error, Result};

/// Ordered ancestors of `name`, nearest first.
///
/// The environment itself is not part of the result. When the explicit chain
/// ends and a `default` environment exists that was not already visited, it is
/// appended as the last ancestor.
pub fn resolve_parents(catalog: &Catalog, name: &str) -> Result<Vec<String>> {
    let mut current = catalog
        .get(name)
        .ok_or_else(|| Error::UnknownEnvironment(name.to_string()))?;
    let mut visited = vec![name.to_string()];

    while let Some(parent) = current.parent_name() {
        if visited.iter().any(|seen| seen == parent) {
            visited.push(parent.to_string());
            return Err(Error::CircularReference { path: visited });
        }

        current = catalog
            .get(parent)
            .ok_or_else(|| Error::UnknownParent(parent.to_string()))?;
        visited.push(parent.to_string());
    }

    if catalog.contains(DEFAULT_ENVIRONMENT) && !visited.iter().any(|n| n == DEFAULT_ENVIRONMENT) {
        visited.push(DEFAULT_ENVIRONMENT.to_string());
    }

    // Drop the starting environment
    visited.remove(0);
    debug!("Parents of {}: {:?}", name, visited);
    Ok(visited)
}
