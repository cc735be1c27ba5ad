//! `[flatten]` section configuration.
//!
//! ```toml
//! [flatten]
//! enable = true    # lift frontmatter fields to the top level
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};

/// Frontmatter flattening settings.
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "flatten")]
pub struct FlattenConfig {
    /// Lift `frontmatter` fields to the top level and move the body
    /// to `markdown_content` before resolving.
    pub enable: bool,
}

impl Default for FlattenConfig {
    fn default() -> Self {
        Self { enable: true }
    }
}
