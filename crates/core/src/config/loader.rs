//! Catalog loader
//!
//! Reads environment documents from a single file or from every supported
//! file directly inside a directory. TOML and JSON documents are accepted.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::catalog::Catalog;
use crate::error::{Error, Result};

/// Document formats understood by the loader
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DocumentFormat {
    Toml,
    Json,
}

impl DocumentFormat {
    fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "toml" => Some(DocumentFormat::Toml),
            "json" => Some(DocumentFormat::Json),
            _ => None,
        }
    }
}

/// Builds a [`Catalog`] from documents on disk
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load a catalog from a document or a directory of documents
    pub fn load_from_path(path: &Path) -> Result<Catalog> {
        debug!("Loading environments from: {:?}", path);

        if path.is_dir() {
            return Self::load_directory(path);
        }

        let format = DocumentFormat::from_path(path).ok_or_else(|| {
            Error::ConfigError(format!(
                "unsupported document type: {} (expected .toml or .json)",
                path.display()
            ))
        })?;
        Self::load_document(path, format)
    }

    fn load_directory(dir: &Path) -> Result<Catalog> {
        let mut catalog = Catalog::new();
        let mut origins: BTreeMap<String, PathBuf> = BTreeMap::new();
        let mut documents = 0;

        let walker = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name();

        for entry in walker {
            let entry = entry.map_err(io::Error::from)?;
            let path = entry.path();
            if !entry.file_type().is_file() {
                continue;
            }
            let Some(format) = DocumentFormat::from_path(path) else {
                debug!("Skipping non-document file: {:?}", path);
                continue;
            };

            documents += 1;
            for (name, env) in Self::load_document(path, format)? {
                if let Some(first) = origins.get(&name) {
                    return Err(Error::ConfigError(format!(
                        "environment \"{}\" is defined in both {} and {}",
                        name,
                        first.display(),
                        path.display()
                    )));
                }
                origins.insert(name.clone(), path.to_path_buf());
                catalog.insert(name, env);
            }
        }

        debug!(
            "Loaded {} environments from {} documents",
            catalog.len(),
            documents
        );
        Ok(catalog)
    }

    fn load_document(path: &Path, format: DocumentFormat) -> Result<Catalog> {
        let contents = std::fs::read_to_string(path)?;
        let catalog = match format {
            DocumentFormat::Toml => Catalog::from_toml_document(&contents, path)?,
            DocumentFormat::Json => Catalog::from_json_document(&contents, path)?,
        };
        debug!("Found {} environments in {:?}", catalog.len(), path);
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_single_toml_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("envs.toml");
        fs::write(&path, "[web.remote]\nhosts = \"web1\"\n").unwrap();

        let catalog = CatalogLoader::load_from_path(&path).unwrap();
        assert_eq!(catalog.get("web").unwrap().remote.hosts, vec!["web1"]);
    }

    #[test]
    fn test_load_directory_mixes_formats() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("base.toml"),
            "[default.remote]\nuser = \"root\"\n",
        )
        .unwrap();
        fs::write(
            temp_dir.path().join("web.json"),
            r#"{"web": {"remote": {"hosts": ["web1", "web2"]}}}"#,
        )
        .unwrap();
        fs::write(temp_dir.path().join("README.md"), "# notes").unwrap();

        let catalog = CatalogLoader::load_from_path(temp_dir.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.contains("default"));
        assert!(catalog.contains("web"));
    }

    #[cfg(unix)]
    #[test]
    fn test_load_directory_follows_symlinked_documents() {
        let shared = TempDir::new().unwrap();
        let target = shared.path().join("prod-envs.toml");
        fs::write(&target, "[prod.remote]\nhosts = \"prod1\"\n").unwrap();

        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.toml"), "[web]\n").unwrap();
        std::os::unix::fs::symlink(&target, temp_dir.path().join("prod.toml")).unwrap();

        let catalog = CatalogLoader::load_from_path(temp_dir.path()).unwrap();
        assert!(catalog.contains("web"));
        assert_eq!(catalog.get("prod").unwrap().remote.hosts, vec!["prod1"]);
    }

    #[test]
    fn test_duplicate_environment_across_documents() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.toml"), "[web]\n").unwrap();
        fs::write(temp_dir.path().join("b.toml"), "[web]\nhidden = true\n").unwrap();

        let err = CatalogLoader::load_from_path(temp_dir.path()).unwrap_err();
        match err {
            Error::ConfigError(message) => {
                assert!(message.contains("\"web\""));
                assert!(message.contains("a.toml"));
                assert!(message.contains("b.toml"));
            }
            other => panic!("Expected ConfigError, got {other:?}"),
        }
    }

    #[test]
    fn test_unsupported_file_extension() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("envs.yaml");
        fs::write(&path, "web: {}\n").unwrap();

        let err = CatalogLoader::load_from_path(&path).unwrap_err();
        assert!(matches!(err, Error::ConfigError(_)));
    }

    #[test]
    fn test_missing_path_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = CatalogLoader::load_from_path(&temp_dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, Error::IoError(_)));
    }

    #[test]
    fn test_parse_error_names_the_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.toml");
        fs::write(&path, "[web\n").unwrap();

        let err = CatalogLoader::load_from_path(&path).unwrap_err();
        assert!(err.to_string().contains("broken.toml"));
    }
}
