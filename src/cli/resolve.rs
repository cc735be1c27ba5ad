//! `weft resolve`: flatten and resolve an object set.

use anyhow::{Result, bail};

use super::args::IoArgs;
use super::check::print_issues;
use super::common::{input_path, output_path, run_pipeline, write_json};
use crate::config::WeftConfig;
use crate::log;
use crate::transform::IssueKind;
use crate::utils::plural_count;

/// Execute resolve command
///
/// With `strict`, any broken reference aborts the command before output
/// is written.
pub fn run_resolve(io: &IoArgs, strict: bool, config: &WeftConfig) -> Result<()> {
    let output = run_pipeline(input_path(io.input.as_deref(), config), config)?;
    let report = &output.report;

    if strict && report.has_broken() {
        print_issues(report);
        bail!(
            "found {}",
            plural_count(report.count(IssueKind::Broken), "broken reference")
        );
    }

    log!(
        "resolve";
        "{}, {}",
        plural_count(output.objects.len(), "object"),
        plural_count(report.substitutions(), "substitution")
    );
    if !report.is_clean() {
        log!(
            "resolve";
            "{} left unresolved, run `weft check` for details",
            plural_count(report.issues().len(), "reference")
        );
    }

    write_json(&output.objects, output_path(io.output.as_deref(), config), io.pretty)
}
