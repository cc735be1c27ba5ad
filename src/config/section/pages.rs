//! `[pages]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [pages]
//! source = "pages"                       # sourceName of page objects
//! site_id = "content/data/config.json"   # object passed to every page as `site`
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;

/// Page assembly settings.
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "pages")]
pub struct PagesConfig {
    /// Objects from this source become pages.
    pub source: String,

    /// Id of the site-wide data object.
    pub site_id: String,
}

impl Default for PagesConfig {
    fn default() -> Self {
        Self {
            source: "pages".into(),
            site_id: "content/data/config.json".into(),
        }
    }
}

impl PagesConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.source.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.source,
                "must not be empty",
                "set it to the sourceName of your page objects, e.g. \"pages\"",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_pages_config_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.pages.source, "pages");
        assert_eq!(config.pages.site_id, "content/data/config.json");
    }

    #[test]
    fn test_pages_config_partial_override() {
        let config = test_parse_config("[pages]\nsource = \"posts\"");
        assert_eq!(config.pages.source, "posts");
        assert_eq!(config.pages.site_id, "content/data/config.json");
    }

    #[test]
    fn test_empty_source_rejected() {
        let config = test_parse_config("[pages]\nsource = \"\"");
        let mut diag = ConfigDiagnostics::new();
        config.pages.validate(&mut diag);
        assert_eq!(diag.errors()[0].field.as_str(), "pages.source");
    }
}
