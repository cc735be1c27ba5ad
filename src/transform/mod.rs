//! Transformations over content object sets.
//!
//! - [`deep`]: generic rewriting of JSON trees
//! - [`flatten`]: frontmatter flattening of markdown objects
//! - [`resolve`]: reference field resolution
//! - [`url`]: URLs from source-relative paths

pub mod deep;
pub mod flatten;
pub mod resolve;
pub mod url;

pub use deep::{map_deep, map_deep_scoped};
pub use flatten::{flatten_frontmatter, flatten_object};
pub use resolve::{
    IssueKind, ReferenceIssue, ResolveOptions, ResolveReport, SelfReferences, resolve_references,
};
pub use url::url_from_path;
