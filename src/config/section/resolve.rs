//! `[resolve]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [resolve]
//! field_names = ["author", "category"]   # empty: every field
//! max_depth = 2                          # substitutions chained per branch
//! self_references = "inline"             # inline | skip (experimental)
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;
use crate::transform::resolve::{DEFAULT_MAX_DEPTH, ResolveOptions, SelfReferences};

/// Reference resolution settings.
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "resolve")]
pub struct ResolveConfig {
    /// Fields that may hold references to other objects.
    /// An empty list makes every field eligible.
    pub field_names: Vec<String>,

    /// Maximum substitutions chained along one branch.
    #[config(inline_doc = "must be at least 1")]
    pub max_depth: usize,

    /// What to do with a reference to an object already being inlined.
    /// - `inline`: inline it again, bounded by `max_depth`
    /// - `skip`: leave the reference string in place
    #[config(status = experimental)]
    pub self_references: SelfReferences,
}

impl Default for ResolveConfig {
    fn default() -> Self {
        Self {
            field_names: Vec::new(),
            max_depth: DEFAULT_MAX_DEPTH,
            self_references: SelfReferences::default(),
        }
    }
}

impl ResolveConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.max_depth == 0 {
            diag.error_with_hint(
                Self::FIELDS.max_depth,
                "must be at least 1",
                "use 1 to inline direct references only",
            );
        }

        if self.field_names.iter().any(|name| name.trim().is_empty()) {
            diag.error(Self::FIELDS.field_names, "field names must not be empty");
        }
    }

    pub fn to_options(&self) -> ResolveOptions {
        ResolveOptions::new()
            .with_field_names(self.field_names.iter().cloned())
            .with_max_depth(self.max_depth)
            .with_self_references(self.self_references)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_resolve_config() {
        let config = test_parse_config(
            "[resolve]\nfield_names = [\"author\"]\nmax_depth = 3\nself_references = \"skip\"",
        );

        assert_eq!(config.resolve.field_names, vec!["author"]);
        assert_eq!(config.resolve.max_depth, 3);
        assert_eq!(config.resolve.self_references, SelfReferences::Skip);
    }

    #[test]
    fn test_resolve_config_defaults() {
        let config = test_parse_config("");

        assert!(config.resolve.field_names.is_empty());
        assert_eq!(config.resolve.max_depth, 2);
        assert_eq!(config.resolve.self_references, SelfReferences::Inline);
    }

    #[test]
    fn test_zero_depth_rejected() {
        let config = test_parse_config("[resolve]\nmax_depth = 0");
        let mut diag = ConfigDiagnostics::new();
        config.resolve.validate(&mut diag);

        assert_eq!(diag.errors().len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "resolve.max_depth");
    }

    #[test]
    fn test_blank_field_name_rejected() {
        let config = test_parse_config("[resolve]\nfield_names = [\"author\", \" \"]");
        let mut diag = ConfigDiagnostics::new();
        config.resolve.validate(&mut diag);

        assert_eq!(diag.errors().len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "resolve.field_names");
    }

    #[test]
    fn test_self_references_is_experimental() {
        let config = test_parse_config("[resolve]\nself_references = \"skip\"");
        let mut diag = ConfigDiagnostics::new();
        config.resolve.validate_field_status(&mut diag);

        assert!(diag.errors().is_empty());
        assert_eq!(diag.hints().len(), 1);
    }

    #[test]
    fn test_to_options() {
        let config = test_parse_config("[resolve]\nfield_names = [\"author\", \"tags\"]\nmax_depth = 1");
        let options = config.resolve.to_options();

        assert_eq!(options.max_depth, 1);
        assert!(options.field_names.contains("author"));
        assert!(options.field_names.contains("tags"));
    }

    #[test]
    fn test_template_lists_fields() {
        let template = ResolveConfig::template_with_header();

        assert!(template.contains("[resolve]"));
        assert!(template.contains("field_names = []"));
        assert!(template.contains("max_depth = 2"));
        assert!(template.contains("# self_references"));
    }
}
