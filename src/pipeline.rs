//! The content pipeline: flatten, then resolve.
//!
//! ```text
//! objects ──► flatten_frontmatter ──► resolve_references ──► PipelineOutput
//!             (if [flatten] enable)   (fresh ObjectIndex)
//! ```

use crate::config::WeftConfig;
use crate::content::ContentObject;
use crate::debug;
use crate::transform::{ResolveOptions, ResolveReport, flatten_frontmatter, resolve_references};
use crate::utils::plural_count;

/// A configured pipeline run over in-memory object sets.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    flatten: bool,
    options: ResolveOptions,
}

/// Result of one pipeline run.
#[derive(Debug)]
pub struct PipelineOutput {
    /// Transformed objects, in input order.
    pub objects: Vec<ContentObject>,
    pub report: ResolveReport,
}

impl Pipeline {
    pub fn new(flatten: bool, options: ResolveOptions) -> Self {
        Self { flatten, options }
    }

    pub fn from_config(config: &WeftConfig) -> Self {
        Self::new(config.flatten.enable, config.resolve.to_options())
    }

    pub fn run(&self, objects: Vec<ContentObject>) -> PipelineOutput {
        let objects = if self.flatten {
            flatten_frontmatter(objects)
        } else {
            objects
        };

        let (objects, report) = resolve_references(objects, &self.options);
        debug!(
            "resolve";
            "{}, {}, {}",
            plural_count(objects.len(), "object"),
            plural_count(report.substitutions(), "substitution"),
            plural_count(report.issues().len(), "issue")
        );

        PipelineOutput { objects, report }
    }
}
