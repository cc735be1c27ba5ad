//! `weft init`: write a commented `weft.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::config::{CONFIG_FILE, FlattenConfig, PagesConfig, ResolveConfig, SourceConfig};
use crate::log;

/// Generate weft.toml content with comments
pub fn generate_config_template() -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "# weft configuration file (v{})\n\n",
        env!("CARGO_PKG_VERSION")
    ));

    out.push_str(&ResolveConfig::template_with_header());
    out.push('\n');

    out.push_str(&FlattenConfig::template_with_header());
    out.push('\n');

    out.push_str(&PagesConfig::template_with_header());
    out.push('\n');

    out.push_str(&SourceConfig::template_with_header());

    out
}

/// Write the template into `dir`, or print it when `dry_run` is set.
///
/// An existing weft.toml is never overwritten.
pub fn run_init(dir: Option<&Path>, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", generate_config_template());
        return Ok(());
    }

    let root = match dir {
        Some(dir) => dir.to_path_buf(),
        None => std::env::current_dir().context("Failed to get current working directory")?,
    };
    let path = root.join(CONFIG_FILE);
    write_config(&path)?;

    log!("init"; "wrote {}", path.display());
    Ok(())
}

fn write_config(path: &Path) -> Result<()> {
    if path.exists() {
        bail!("'{}' already exists, refusing to overwrite", path.display());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory '{}'", parent.display()))?;
    }
    fs::write(path, generate_config_template())
        .with_context(|| format!("Failed to write config file '{}'", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WeftConfig;
    use tempfile::TempDir;

    #[test]
    fn test_template_contains_all_sections() {
        let template = generate_config_template();
        for section in ["[resolve]", "[flatten]", "[pages]", "[source]"] {
            assert!(template.contains(section), "missing {section}");
        }
    }

    #[test]
    fn test_template_parses_to_defaults() {
        let config = WeftConfig::from_str(&generate_config_template()).unwrap();
        let defaults = WeftConfig::default();

        assert_eq!(config.resolve.max_depth, defaults.resolve.max_depth);
        assert_eq!(config.flatten.enable, defaults.flatten.enable);
        assert_eq!(config.pages.source, defaults.pages.source);
        assert_eq!(config.pages.site_id, defaults.pages.site_id);
        assert!(config.source.input.is_none());
    }

    #[test]
    fn test_init_writes_config() {
        let dir = TempDir::new().unwrap();
        run_init(Some(dir.path()), false).unwrap();

        let written = fs::read_to_string(dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(written, generate_config_template());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "# mine").unwrap();

        assert!(run_init(Some(dir.path()), false).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "# mine");
    }
}
