use anyhow::{Context, Result};
use hostenv_core::ResolvedEnv;

use crate::cli::OutputFormat;

/// Render descriptors for stdout.
///
/// JSON output is a single array. TOML output is one document per
/// descriptor, each headed by a comment with the descriptor's label.
pub fn render_descriptors(descriptors: &[ResolvedEnv], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(descriptors).context("Failed to serialize descriptors")
        }
        OutputFormat::Toml => {
            let mut out = String::new();
            for descriptor in descriptors {
                if !out.is_empty() {
                    out.push('\n');
                }
                out.push_str(&format!("# {}\n", descriptor.label()));
                let body = toml::to_string(descriptor).with_context(|| {
                    format!("Failed to serialize descriptor {}", descriptor.label())
                })?;
                out.push_str(&body);
            }
            Ok(out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hostenv_core::{Catalog, TargetMode, resolve_environment, specialize};

    fn descriptors() -> Vec<ResolvedEnv> {
        let catalog = Catalog::from_toml_str(
            r#"
            [default.remote]
            user = "root"

            [web.remote]
            hosts = ["web1"]

            [web.targets.api.remote]
            branch = "main"
            "#,
        )
        .unwrap();
        let web = resolve_environment(&catalog, "web").unwrap();
        specialize(&web, &["api"], TargetMode::Strict)
            .unwrap()
            .descriptors
    }

    #[test]
    fn test_render_json() {
        let out = render_descriptors(&descriptors(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value[0]["name"], "web");
        assert_eq!(value[0]["target"], "api");
        assert_eq!(value[0]["remote"]["user"], "root");
        assert_eq!(value[0]["remote"]["branch"], "main");
        assert_eq!(value[0]["ancestors"][0], "default");
    }

    #[test]
    fn test_render_toml() {
        let out = render_descriptors(&descriptors(), OutputFormat::Toml).unwrap();

        assert!(out.starts_with("# web|api\n"));
        assert!(out.contains("name = \"web\""));
        assert!(out.contains("user = \"root\""));
        assert!(out.contains("branch = \"main\""));
        assert!(!out.contains("[targets"));
    }

    #[test]
    fn test_render_toml_skips_empty_target_layers() {
        let catalog = Catalog::from_toml_str(
            r#"
            [web.targets.api.remote]
            branch = "main"
            "#,
        )
        .unwrap();
        let web = resolve_environment(&catalog, "web").unwrap();

        let out = render_descriptors(&[web], OutputFormat::Toml).unwrap();
        assert!(out.contains("[targets.api.remote]"));
        assert!(!out.contains("[targets.api.defaults]"));
        assert!(!out.contains("[targets.api.local]"));
    }
}
