//! Reference field resolution.
//!
//! A string field whose value is the id of another object (for example
//! `author: "content/data/authors/john.json"`) is replaced with that
//! object's data, `url` included. Substituted objects are themselves
//! resolved, up to `max_depth` substitutions along one branch.
//!
//! ```text
//! post.md                          post.md
//! ├── title: "Post"        ──►     ├── title: "Post"
//! └── author: "john.json"          └── author
//!                                      ├── name: "John"
//!                                      ├── url: "content/data/authors/john"
//!                                      └── __metadata: {..}
//! ```
//!
//! The substitution chain is carried as the per-branch scope of
//! [`map_deep_scoped`], so sibling fields never share a depth budget.

mod report;

pub use report::{IssueKind, ReferenceIssue, ResolveReport};

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use super::deep::map_deep_scoped;
use super::url::url_from_path;
use crate::content::{ContentObject, JsonMap, KeyPath, METADATA_KEY, ObjectIndex, URL_KEY};
use crate::debug;

/// Extensions of strings considered reference candidates.
pub const CONTENT_EXTENSIONS: &[&str] = &["md", "mdx", "json", "yml", "yaml", "toml"];

/// Substitutions allowed along one branch unless configured otherwise.
pub const DEFAULT_MAX_DEPTH: usize = 2;

/// How to treat references to an object already on the current chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelfReferences {
    /// Inline anyway; the depth limit bounds the recursion.
    #[default]
    Inline,
    /// Leave the reference string in place.
    Skip,
}

/// Options of a resolution pass.
#[derive(Debug, Clone)]
pub struct ResolveOptions {
    /// Eligible field names. Empty means every field is eligible.
    pub field_names: FxHashSet<String>,
    /// Maximum substitutions chained along one branch.
    pub max_depth: usize,
    pub self_references: SelfReferences,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            field_names: FxHashSet::default(),
            max_depth: DEFAULT_MAX_DEPTH,
            self_references: SelfReferences::default(),
        }
    }
}

impl ResolveOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.field_names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_self_references(mut self, mode: SelfReferences) -> Self {
        self.self_references = mode;
        self
    }

    /// Whether the field at the end of `path` may hold a reference.
    fn is_eligible(&self, path: &KeyPath) -> bool {
        if self.field_names.is_empty() {
            return true;
        }
        path.last()
            .and_then(|key| key.as_field())
            .is_some_and(|name| self.field_names.contains(name))
    }
}

/// Whether `value` ends in one of the [`CONTENT_EXTENSIONS`].
pub fn has_content_extension(value: &str) -> bool {
    value
        .rsplit_once('.')
        .is_some_and(|(_, ext)| CONTENT_EXTENSIONS.contains(&ext))
}

// ============================================================================
// Substitution chain
// ============================================================================

/// Substitutions performed above the current node, outermost first.
#[derive(Debug, Clone, Default)]
struct Chain {
    links: Vec<Link>,
}

#[derive(Debug, Clone)]
struct Link {
    path: KeyPath,
    id: String,
}

impl Chain {
    #[inline]
    fn depth(&self) -> usize {
        self.links.len()
    }

    fn contains(&self, id: &str) -> bool {
        self.links.iter().any(|link| link.id == id)
    }

    fn extend(&self, path: &KeyPath, id: &str) -> Self {
        debug_assert!(self.links.iter().all(|link| path.starts_with(&link.path)));
        let mut links = self.links.clone();
        links.push(Link {
            path: path.clone(),
            id: id.to_string(),
        });
        Self { links }
    }
}

/// Id of a mapping that is an already inlined object.
fn inlined_id(map: &JsonMap) -> Option<&str> {
    map.get(METADATA_KEY)?.get("id")?.as_str()
}

// ============================================================================
// Resolver
// ============================================================================

/// Resolves references of individual objects against an index.
pub struct Resolver<'a> {
    index: &'a ObjectIndex,
    options: &'a ResolveOptions,
}

impl<'a> Resolver<'a> {
    pub fn new(index: &'a ObjectIndex, options: &'a ResolveOptions) -> Self {
        Self { index, options }
    }

    /// Resolve the reference fields of one object.
    pub fn resolve_object(&self, object: ContentObject, report: &mut ResolveReport) -> ContentObject {
        let ContentObject { metadata, fields } = object;
        let root_id = metadata.id.clone();

        let resolved = map_deep_scoped(JsonValue::Object(fields), Chain::default(), |node, path, chain| {
            self.visit(node, path, chain, &root_id, report)
        });

        match resolved {
            JsonValue::Object(fields) => ContentObject::new(metadata, fields),
            _ => unreachable!("the root mapping of an object is never substituted"),
        }
    }

    fn visit(
        &self,
        node: JsonValue,
        path: &KeyPath,
        chain: &Chain,
        root_id: &str,
        report: &mut ResolveReport,
    ) -> (JsonValue, Option<Chain>) {
        if path.is_root() {
            return (node, None);
        }

        // An object inlined by an earlier pass is a link of the chain too,
        // which keeps repeated passes within `max_depth`.
        if let JsonValue::Object(map) = &node {
            let link = inlined_id(map)
                .filter(|_| !path.contains_field(METADATA_KEY))
                .map(|id| chain.extend(path, id));
            return (node, link);
        }

        let JsonValue::String(target) = &node else {
            return (node, None);
        };
        match self.substitute(target, path, chain, root_id, report) {
            Some((replacement, link)) => (replacement, Some(link)),
            None => (node, None),
        }
    }

    fn substitute(
        &self,
        target: &str,
        path: &KeyPath,
        chain: &Chain,
        root_id: &str,
        report: &mut ResolveReport,
    ) -> Option<(JsonValue, Chain)> {
        if !self.options.is_eligible(path)
            || !has_content_extension(target)
            || path.contains_field(METADATA_KEY)
        {
            return None;
        }

        if chain.depth() >= self.options.max_depth {
            let kind = if self.index.contains(target) {
                IssueKind::DepthLimited
            } else {
                IssueKind::Broken
            };
            report.issue(root_id, path, target, kind);
            return None;
        }

        let Some(referenced) = self.index.get(target) else {
            report.issue(root_id, path, target, IssueKind::Broken);
            return None;
        };

        if target == root_id || chain.contains(target) {
            report.issue(root_id, path, target, IssueKind::Cyclic);
            if self.options.self_references == SelfReferences::Skip {
                return None;
            }
        }

        debug!("resolve"; "{}: {} -> {}", root_id, path, target);
        report.substituted(target);
        Some((with_url(referenced.clone()), chain.extend(path, target)))
    }
}

/// Set `url` on an object value from its `__metadata.relSourcePath`.
fn with_url(mut value: JsonValue) -> JsonValue {
    if let JsonValue::Object(map) = &mut value {
        let rel_source_path = map
            .get(METADATA_KEY)
            .and_then(|metadata| metadata.get("relSourcePath"))
            .and_then(JsonValue::as_str)
            .unwrap_or_default();
        let url = url_from_path(rel_source_path);
        map.insert(URL_KEY.to_string(), JsonValue::String(url));
    }
    value
}

// ============================================================================
// Pass
// ============================================================================

/// Resolve the reference fields of a whole object set.
///
/// The index is built from `objects` for this call only. Object order is
/// kept, and every object that was inlined somewhere gets its `url` set in
/// the output as well.
pub fn resolve_references(
    objects: Vec<ContentObject>,
    options: &ResolveOptions,
) -> (Vec<ContentObject>, ResolveReport) {
    let index = ObjectIndex::build(&objects);
    let resolver = Resolver::new(&index, options);
    let mut report = ResolveReport::new();

    let mut resolved: Vec<ContentObject> = objects
        .into_iter()
        .map(|object| resolver.resolve_object(object, &mut report))
        .collect();

    for object in &mut resolved {
        if report.is_referenced(object.id()) {
            let url = url_from_path(object.metadata.rel_source_path());
            object.fields.insert(URL_KEY.to_string(), JsonValue::String(url));
        }
    }

    (resolved, report)
}
