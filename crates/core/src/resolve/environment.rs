use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

use super::parents::resolve_parents;
use crate::catalog::Catalog;
use crate::config::{TargetLayers, TargetSpec};
use crate::error::{Error, Result};

/// A fully merged environment, optionally specialized for one target
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedEnv {
    /// Environment name as requested
    pub name: String,
    /// Target this descriptor was specialized for
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Ancestors that were folded in, nearest first
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ancestors: Vec<String>,
    pub defaults: TargetSpec,
    pub local: TargetSpec,
    pub remote: TargetSpec,
    /// Targets declared by the environment itself; empty once specialized
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub targets: BTreeMap<String, TargetLayers>,
}

impl ResolvedEnv {
    /// Label used to tag output produced for this descriptor
    pub fn label(&self) -> String {
        match &self.target {
            Some(target) => format!("{}|{}", self.name, target),
            None => self.name.clone(),
        }
    }

    fn propagate_defaults(&mut self) {
        self.remote.fill_from(&self.defaults);
        self.local.fill_from(&self.defaults);
    }
}

/// Resolve `name` against the catalog, folding in its whole parent chain.
pub fn resolve_environment(catalog: &Catalog, name: &str) -> Result<ResolvedEnv> {
    let env = catalog
        .get(name)
        .ok_or_else(|| Error::UnknownEnvironment(name.to_string()))?;

    let mut resolved = ResolvedEnv {
        name: name.to_string(),
        target: None,
        ancestors: Vec::new(),
        defaults: env.defaults.clone(),
        local: env.local.clone(),
        remote: env.remote.clone(),
        targets: env.targets.clone(),
    };

    // Own defaults apply to both channels before anything is inherited
    resolved.propagate_defaults();

    let ancestors = resolve_parents(catalog, name)?;
    if !ancestors.is_empty() {
        debug!("Found \"{}\" parents: {:?}", name, ancestors);
    }

    for ancestor in &ancestors {
        let parent = catalog
            .get(ancestor)
            .ok_or_else(|| Error::UnknownParent(ancestor.clone()))?;

        resolved.defaults.fill_from(&parent.defaults);
        resolved.local.fill_from(&parent.local);
        resolved.remote.fill_from(&parent.remote);
    }

    // Inherited defaults may have filled fields the channels still lack
    resolved.propagate_defaults();
    resolved.ancestors = ancestors;

    Ok(resolved)
}
