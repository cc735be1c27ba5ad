//! Common utilities shared across CLI commands.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::config::WeftConfig;
use crate::content::{ContentObject, decode_objects};
use crate::pipeline::{Pipeline, PipelineOutput};
use crate::utils::plural_count;
use crate::{debug, log};

/// Pick the input file: the CLI argument, else `[source] input`.
///
/// `None` (or an explicit `-`) means stdin.
pub fn input_path<'a>(arg: Option<&'a Path>, config: &'a WeftConfig) -> Option<&'a Path> {
    match arg {
        Some(path) if path.as_os_str() == "-" => None,
        Some(path) => Some(path),
        None => config.source.input.as_deref(),
    }
}

/// Pick the output file: the CLI argument, else `[source] output`.
pub fn output_path<'a>(arg: Option<&'a Path>, config: &'a WeftConfig) -> Option<&'a Path> {
    match arg {
        Some(path) if path.as_os_str() == "-" => None,
        Some(path) => Some(path),
        None => config.source.output.as_deref(),
    }
}

/// Read an object set from a file or stdin.
pub fn read_objects(input: Option<&Path>) -> Result<Vec<ContentObject>> {
    let (name, text) = match input {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file '{}'", path.display()))?;
            (path.display().to_string(), text)
        }
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read objects from stdin")?;
            ("stdin".to_string(), text)
        }
    };

    let objects =
        decode_objects(&text).with_context(|| format!("Failed to decode objects from {name}"))?;
    debug!("input"; "read {} from {}", plural_count(objects.len(), "object"), name);
    Ok(objects)
}

/// Read the input and run the configured pipeline over it.
pub fn run_pipeline(input: Option<&Path>, config: &WeftConfig) -> Result<PipelineOutput> {
    let objects = read_objects(input)?;
    Ok(Pipeline::from_config(config).run(objects))
}

/// Serialize `value` as JSON to a file or stdout.
pub fn write_json<T: Serialize + ?Sized>(value: &T, output: Option<&Path>, pretty: bool) -> Result<()> {
    let formatted = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create '{}'", parent.display()))?;
            }
            let mut file = fs::File::create(path)
                .with_context(|| format!("Failed to create output file '{}'", path.display()))?;
            writeln!(file, "{}", formatted)?;
            log!("output"; "wrote {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", formatted)?;
            stdout.flush()?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_input_path_precedence() {
        let mut config = WeftConfig::default();
        config.source.input = Some(PathBuf::from("/site/objects.json"));

        assert_eq!(
            input_path(Some(Path::new("cli.json")), &config),
            Some(Path::new("cli.json"))
        );
        assert_eq!(input_path(Some(Path::new("-")), &config), None);
        assert_eq!(
            input_path(None, &config),
            Some(Path::new("/site/objects.json"))
        );
        assert_eq!(input_path(None, &WeftConfig::default()), None);
    }

    #[test]
    fn test_read_objects_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("objects.json");
        fs::write(&path, r#"[{"__metadata":{"id":"a.json"},"name":"A"}]"#).unwrap();

        let objects = read_objects(Some(&path)).unwrap();
        assert_eq!(objects.len(), 1);
        assert_eq!(objects[0].id(), "a.json");
    }

    #[test]
    fn test_read_objects_reports_bad_input() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("objects.json");
        fs::write(&path, r#"{"not":"an array"}"#).unwrap();

        let err = read_objects(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("JSON array"));
    }

    #[test]
    fn test_read_objects_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = read_objects(Some(&dir.path().join("missing.json"))).unwrap_err();
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn test_write_json_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out/nested/result.json");

        write_json(&json!([{ "a": 1 }]), Some(&path), false).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, "[{\"a\":1}]\n");
    }
}
