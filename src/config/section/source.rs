//! `[source]` section configuration.
//!
//! ```toml
//! [source]
//! input = "build/objects.json"   # read when no INPUT argument is given
//! output = "build/resolved.json" # written when no --output is given
//! ```
//!
//! Relative paths are resolved against the directory holding `weft.toml`;
//! a leading `~` expands to the home directory.

use std::path::{Path, PathBuf};

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::util::expand_path;

/// Default input and output files.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "source")]
pub struct SourceConfig {
    /// Object set to read. Unset means stdin.
    pub input: Option<PathBuf>,

    /// File to write results to. Unset means stdout.
    pub output: Option<PathBuf>,
}

impl SourceConfig {
    /// Make configured paths absolute relative to `root`.
    pub fn normalize(&mut self, root: &Path) {
        for path in [&mut self.input, &mut self.output].into_iter().flatten() {
            *path = expand_path(path, root);
        }
    }
}
