//! Locating and loading the environment catalog

use anyhow::{Context, Result};
use hostenv_core::{Catalog, CatalogLoader};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable naming the catalog path
pub const CONFIG_ENV_VAR: &str = "HOSTENV_CONFIG";

/// Used when neither `--config` nor `HOSTENV_CONFIG` is given
pub const DEFAULT_CONFIG_PATH: &str = "./envs";

/// `--config` first, then `HOSTENV_CONFIG`, then `./envs`
pub fn resolve_config_path(flag: Option<&Path>) -> PathBuf {
    pick_config_path(flag, std::env::var(CONFIG_ENV_VAR).ok())
}

fn pick_config_path(flag: Option<&Path>, from_env: Option<String>) -> PathBuf {
    if let Some(path) = flag {
        return path.to_path_buf();
    }
    match from_env {
        Some(value) if !value.is_empty() => PathBuf::from(value),
        _ => PathBuf::from(DEFAULT_CONFIG_PATH),
    }
}

pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let catalog = CatalogLoader::load_from_path(path)
        .with_context(|| format!("Failed to load environments from {}", path.display()))?;
    debug!("Catalog has {} environments", catalog.len());
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_wins() {
        let path = pick_config_path(Some(Path::new("/etc/hostenv")), Some("/other".into()));
        assert_eq!(path, PathBuf::from("/etc/hostenv"));
    }

    #[test]
    fn test_env_var_used_without_flag() {
        let path = pick_config_path(None, Some("/srv/envs".into()));
        assert_eq!(path, PathBuf::from("/srv/envs"));
    }

    #[test]
    fn test_falls_back_to_envs_dir() {
        assert_eq!(pick_config_path(None, None), PathBuf::from("./envs"));
        assert_eq!(pick_config_path(None, Some(String::new())), PathBuf::from("./envs"));
    }
}
