//! Read-only set of named environments
//!
//! A catalog is built once (usually by [`CatalogLoader`](crate::config::CatalogLoader))
//! and then passed by reference to every resolution call.

use std::collections::BTreeMap;
use std::path::Path;

use crate::config::Environment;
use crate::error::{Error, Result};

/// Environment every other environment implicitly inherits from
pub const DEFAULT_ENVIRONMENT: &str = "default";

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    environments: BTreeMap<String, Environment>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_environments<I, S>(environments: I) -> Self
    where
        I: IntoIterator<Item = (S, Environment)>,
        S: Into<String>,
    {
        Self {
            environments: environments
                .into_iter()
                .map(|(name, env)| (name.into(), env))
                .collect(),
        }
    }

    /// Parse a TOML document whose top-level tables are environments
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Self::from_toml_document(source, Path::new("<inline>"))
    }

    /// Parse a JSON document whose top-level keys are environments
    pub fn from_json_str(source: &str) -> Result<Self> {
        Self::from_json_document(source, Path::new("<inline>"))
    }

    pub(crate) fn from_toml_document(source: &str, path: &Path) -> Result<Self> {
        let environments: BTreeMap<String, Environment> =
            toml::from_str(source).map_err(|e| Error::ParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        Ok(Self { environments })
    }

    pub(crate) fn from_json_document(source: &str, path: &Path) -> Result<Self> {
        let environments: BTreeMap<String, Environment> =
            serde_json::from_str(source).map_err(|e| Error::ParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        Ok(Self { environments })
    }

    /// Add or replace an environment, returning the previous definition
    pub fn insert(&mut self, name: impl Into<String>, env: Environment) -> Option<Environment> {
        self.environments.insert(name.into(), env)
    }

    pub fn get(&self, name: &str) -> Option<&Environment> {
        self.environments.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.environments.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.environments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.environments.is_empty()
    }

    /// All environments, including hidden ones and `default`
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Environment)> {
        self.environments.iter().map(|(name, env)| (name.as_str(), env))
    }

    /// Names offered to users: everything except `default` and hidden environments
    pub fn list_environments(&self) -> Vec<String> {
        self.iter()
            .filter(|(name, env)| !env.hidden && *name != DEFAULT_ENVIRONMENT)
            .map(|(name, _)| name.to_string())
            .collect()
    }

    /// Target names declared directly by `name`
    pub fn list_targets(&self, name: &str) -> Result<Vec<String>> {
        let env = self
            .get(name)
            .ok_or_else(|| Error::UnknownEnvironment(name.to_string()))?;
        Ok(env.targets.keys().cloned().collect())
    }
}

impl IntoIterator for Catalog {
    type Item = (String, Environment);
    type IntoIter = std::collections::btree_map::IntoIter<String, Environment>;

    fn into_iter(self) -> Self::IntoIter {
        self.environments.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TargetLayers;

    #[test]
    fn test_list_environments_skips_default_and_hidden() {
        let catalog = Catalog::from_environments([
            ("default", Environment::default()),
            ("web", Environment::default().hidden()),
            ("api", Environment::default()),
        ]);

        assert_eq!(catalog.list_environments(), vec!["api"]);
    }

    #[test]
    fn test_list_targets() {
        let catalog = Catalog::from_environments([(
            "web",
            Environment::default()
                .with_target("api", TargetLayers::default())
                .with_target("worker", TargetLayers::default()),
        )]);

        assert_eq!(catalog.list_targets("web").unwrap(), vec!["api", "worker"]);
    }

    #[test]
    fn test_list_targets_unknown_environment() {
        let catalog = Catalog::new();
        let err = catalog.list_targets("nope").unwrap_err();
        assert!(matches!(err, Error::UnknownEnvironment(name) if name == "nope"));
    }

    #[test]
    fn test_from_toml_str() {
        let catalog = Catalog::from_toml_str(
            r#"
            [default.remote]
            user = "root"

            [staging]
            hidden = true
            parent = "default"
            "#,
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("default").unwrap().remote.user, "root");
        assert!(catalog.list_environments().is_empty());
    }

    #[test]
    fn test_from_json_str_reports_parse_errors() {
        let err = Catalog::from_json_str(r#"{"web": {"hidden": "yes"}}"#).unwrap_err();
        assert!(matches!(err, Error::ParseError { .. }));
    }
}
