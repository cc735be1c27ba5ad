//! `weft check`: report references the resolver left in place.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Result, bail};
use owo_colors::OwoColorize;

use super::common::{input_path, run_pipeline};
use crate::config::WeftConfig;
use crate::logger::{summary_success, summary_warning};
use crate::transform::{IssueKind, ReferenceIssue, ResolveReport};
use crate::utils::{plural_count, plural_s};

/// Execute check command
///
/// Broken references fail the command unless `warn_only` is set.
/// Depth-limited and cyclic references are always informational.
pub fn run_check(input: Option<&Path>, warn_only: bool, config: &WeftConfig) -> Result<()> {
    let output = run_pipeline(input_path(input, config), config)?;
    let report = &output.report;

    if report.is_clean() {
        summary_success(&format!(
            "no reference issues in {}",
            plural_count(output.objects.len(), "object")
        ));
        return Ok(());
    }

    print_issues(report);
    eprintln!();

    let broken = report.count(IssueKind::Broken);
    let summary = summary_line(report);
    if broken > 0 && !warn_only {
        bail!("found {summary}");
    }
    summary_warning(&format!("found {summary}"));
    Ok(())
}

/// Print issues grouped by kind, then by object.
pub fn print_issues(report: &ResolveReport) {
    for kind in [IssueKind::Broken, IssueKind::DepthLimited, IssueKind::Cyclic] {
        let grouped = group_by_object(report.issues_of(kind));
        if grouped.is_empty() {
            continue;
        }

        let count: usize = grouped.values().map(Vec::len).sum();
        let heading = format!("{kind}s");
        let detail = format!(
            "({} object{}, {} reference{})",
            grouped.len(),
            plural_s(grouped.len()),
            count,
            plural_s(count)
        );
        eprintln!();
        match kind {
            IssueKind::Broken => eprintln!("{} {}", heading.red().bold(), detail.dimmed()),
            _ => eprintln!("{} {}", heading.yellow().bold(), detail.dimmed()),
        }

        for (object_id, issues) in grouped {
            eprintln!("{}{}{}", "[".dimmed(), object_id.cyan(), "]".dimmed());
            for issue in issues {
                eprintln!("{} {} {}", "→".red(), issue.target, format!("at {}", issue.path).dimmed());
            }
        }
    }
}

fn group_by_object<'a>(
    issues: impl Iterator<Item = &'a ReferenceIssue>,
) -> BTreeMap<&'a str, Vec<&'a ReferenceIssue>> {
    let mut grouped: BTreeMap<&str, Vec<&ReferenceIssue>> = BTreeMap::new();
    for issue in issues {
        grouped.entry(issue.object_id.as_str()).or_default().push(issue);
    }
    grouped
}

/// "2 broken references, 1 cyclic reference"
fn summary_line(report: &ResolveReport) -> String {
    [IssueKind::Broken, IssueKind::DepthLimited, IssueKind::Cyclic]
        .into_iter()
        .filter_map(|kind| {
            let count = report.count(kind);
            (count > 0).then(|| plural_count(count, kind.label()))
        })
        .collect::<Vec<_>>()
        .join(", ")
}
