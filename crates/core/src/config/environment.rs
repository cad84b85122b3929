use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::decode::{string_or_list, string_or_map};

/// Named commands, keyed by label
pub type CommandTable = BTreeMap<String, String>;

/// A named environment as written in a document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub struct Environment {
    /// Name of the environment this one inherits from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,

    /// Hidden environments are left out of listings
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub hidden: bool,

    /// Merged into both `local` and `remote`
    #[serde(default)]
    pub defaults: TargetSpec,

    #[serde(default)]
    pub local: TargetSpec,

    #[serde(default)]
    pub remote: TargetSpec,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub targets: BTreeMap<String, TargetLayers>,
}

impl Environment {
    /// Parent name, treating an empty string as no parent
    pub fn parent_name(&self) -> Option<&str> {
        self.parent.as_deref().filter(|name| !name.is_empty())
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub fn with_target(mut self, name: impl Into<String>, target: TargetLayers) -> Self {
        self.targets.insert(name.into(), target);
        self
    }
}

/// The three specs a target declares inside an environment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub struct TargetLayers {
    #[serde(default, skip_serializing_if = "TargetSpec::is_empty")]
    pub defaults: TargetSpec,

    #[serde(default, skip_serializing_if = "TargetSpec::is_empty")]
    pub local: TargetSpec,

    #[serde(default, skip_serializing_if = "TargetSpec::is_empty")]
    pub remote: TargetSpec,
}

/// Execution parameters for one channel. Empty values mean "unset".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub struct TargetSpec {
    #[serde(
        default,
        deserialize_with = "string_or_list",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub hosts: Vec<String>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub user: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub branch: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub path: String,

    #[serde(
        default,
        deserialize_with = "string_or_map",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub log: CommandTable,

    #[serde(
        default,
        deserialize_with = "string_or_map",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub cmd: CommandTable,

    #[serde(
        default,
        deserialize_with = "string_or_map",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub cat: CommandTable,
}

impl TargetSpec {
    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
            && self.user.is_empty()
            && self.branch.is_empty()
            && self.url.is_empty()
            && self.path.is_empty()
            && self.log.is_empty()
            && self.cmd.is_empty()
            && self.cat.is_empty()
    }
}
