//! Target specialization
//!
//! Each requested target gets its own deep copy of the resolved environment,
//! with the target's settings override-merged on top.

use tracing::debug;

use super::environment::ResolvedEnv;
use crate::error::{Error, Result};

/// How unknown target names are treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TargetMode {
    /// Every requested name must be a declared target
    Strict,
    /// Names are only taken as targets when at least one of them is declared.
    /// Otherwise they are handed back to the caller as ordinary arguments.
    #[default]
    BestEffort,
}

/// Outcome of [`specialize`]
#[derive(Debug, Clone, PartialEq)]
pub struct Specialization {
    /// One descriptor per target, or the unspecialized environment
    pub descriptors: Vec<ResolvedEnv>,
    /// Whether the requested names were used as targets
    pub consumed: bool,
}

impl Specialization {
    fn unspecialized(env: &ResolvedEnv) -> Self {
        Self {
            descriptors: vec![env.clone()],
            consumed: false,
        }
    }
}

/// Specialize `env` for each of `names`.
///
/// `env` itself is never modified. An environment without targets, or an
/// empty name list, yields `env` as the single descriptor.
pub fn specialize<S: AsRef<str>>(
    env: &ResolvedEnv,
    names: &[S],
    mode: TargetMode,
) -> Result<Specialization> {
    if env.targets.is_empty() || names.is_empty() {
        return Ok(Specialization::unspecialized(env));
    }

    let unknown: Vec<&str> = names
        .iter()
        .map(AsRef::as_ref)
        .filter(|name| !env.targets.contains_key(*name))
        .collect();

    if let Some(first) = unknown.first() {
        let treat_as_arguments = mode == TargetMode::BestEffort && unknown.len() == names.len();
        if !treat_as_arguments {
            return Err(Error::UnknownTarget {
                target: first.to_string(),
                environment: env.name.clone(),
            });
        }
        debug!(
            "{:?} are not targets of \"{}\", treating them as arguments",
            unknown, env.name
        );
        return Ok(Specialization::unspecialized(env));
    }

    let descriptors = names
        .iter()
        .map(|name| specialize_one(env, name.as_ref()))
        .collect::<Result<Vec<_>>>()?;

    Ok(Specialization {
        descriptors,
        consumed: true,
    })
}

fn specialize_one(env: &ResolvedEnv, name: &str) -> Result<ResolvedEnv> {
    let mut descriptor = env.clone();

    let mut layers = descriptor
        .targets
        .remove(name)
        .ok_or_else(|| Error::UnknownTarget {
            target: name.to_string(),
            environment: env.name.clone(),
        })?;
    // A specialized descriptor carries no unapplied targets
    descriptor.targets.clear();

    layers.local.fill_from(&layers.defaults);
    layers.remote.fill_from(&layers.defaults);

    // Target settings win over the environment's
    descriptor.defaults.override_from(&layers.defaults);
    descriptor.local.override_from(&layers.local);
    descriptor.remote.override_from(&layers.remote);

    descriptor.target = Some(name.to_string());
    debug!("Specialized \"{}\" for target \"{}\"", env.name, name);

    Ok(descriptor)
}
