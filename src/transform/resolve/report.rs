//! Diagnostics collected while resolving references.
//!
//! Resolution never fails: anything that looks like a reference but cannot
//! be substituted is left in place and recorded here, so callers can decide
//! whether to surface it.

use std::fmt;

use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::content::KeyPath;

/// Why a reference-looking string was left alone (or inlined with a warning).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// Has a content extension but matches no object id.
    Broken,
    /// Matches an object but the substitution chain is already full.
    DepthLimited,
    /// Points at an object already on the current chain (or at itself).
    Cyclic,
}

impl IssueKind {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Broken => "broken reference",
            Self::DepthLimited => "depth-limited reference",
            Self::Cyclic => "cyclic reference",
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single reference that was not (or not cleanly) resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferenceIssue {
    /// Id of the top-level object being resolved.
    pub object_id: String,
    /// Location of the string inside that object.
    pub path: KeyPath,
    /// The reference string itself.
    pub target: String,
    pub kind: IssueKind,
}

impl fmt::Display for ReferenceIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} `{}` at {}",
            self.object_id, self.kind, self.target, self.path
        )
    }
}

/// Outcome of one resolution pass.
#[derive(Debug, Default)]
pub struct ResolveReport {
    substitutions: usize,
    referenced: FxHashSet<String>,
    issues: Vec<ReferenceIssue>,
}

impl ResolveReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub(super) fn substituted(&mut self, id: &str) {
        self.substitutions += 1;
        if !self.referenced.contains(id) {
            self.referenced.insert(id.to_string());
        }
    }

    pub(super) fn issue(&mut self, object_id: &str, path: &KeyPath, target: &str, kind: IssueKind) {
        self.issues.push(ReferenceIssue {
            object_id: object_id.to_string(),
            path: path.clone(),
            target: target.to_string(),
            kind,
        });
    }

    /// Number of substitutions performed, nested ones included.
    #[inline]
    pub fn substitutions(&self) -> usize {
        self.substitutions
    }

    /// Whether the object with `id` was inlined anywhere.
    #[inline]
    pub fn is_referenced(&self, id: &str) -> bool {
        self.referenced.contains(id)
    }

    #[inline]
    pub fn issues(&self) -> &[ReferenceIssue] {
        &self.issues
    }

    pub fn issues_of(&self, kind: IssueKind) -> impl Iterator<Item = &ReferenceIssue> {
        self.issues.iter().filter(move |issue| issue.kind == kind)
    }

    pub fn count(&self, kind: IssueKind) -> usize {
        self.issues_of(kind).count()
    }

    #[inline]
    pub fn has_broken(&self) -> bool {
        self.issues.iter().any(|issue| issue.kind == IssueKind::Broken)
    }

    #[inline]
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Key;

    #[test]
    fn test_counts_by_kind() {
        let mut report = ResolveReport::new();
        let path: KeyPath = [Key::from("author")].into_iter().collect();
        report.issue("post.md", &path, "gone.json", IssueKind::Broken);
        report.issue("post.md", &path, "deep.json", IssueKind::DepthLimited);
        report.issue("post.md", &path, "gone2.json", IssueKind::Broken);

        assert_eq!(report.count(IssueKind::Broken), 2);
        assert_eq!(report.count(IssueKind::Cyclic), 0);
        assert!(report.has_broken());
        assert!(!report.is_clean());
    }

    #[test]
    fn test_substitutions_track_referenced_ids() {
        let mut report = ResolveReport::new();
        report.substituted("a.json");
        report.substituted("a.json");

        assert_eq!(report.substitutions(), 2);
        assert!(report.is_referenced("a.json"));
        assert!(!report.is_referenced("b.json"));
        assert!(report.is_clean());
    }

    #[test]
    fn test_issue_display() {
        let issue = ReferenceIssue {
            object_id: "post.md".into(),
            path: [Key::from("sections"), Key::from(0usize), Key::from("author")]
                .into_iter()
                .collect(),
            target: "gone.json".into(),
            kind: IssueKind::Broken,
        };
        assert_eq!(
            issue.to_string(),
            "post.md: broken reference `gone.json` at sections.0.author"
        );
    }
}
