//! Generic top-down rewriting of JSON trees.
//!
//! The transform sees every node (root included) before its children. When
//! it replaces a node, traversal continues into the replacement, so a
//! substituted subtree is itself rewritten.
//!
//! [`map_deep_scoped`] threads a per-branch scope through the walk: a scope
//! returned for a node is visible to that node's descendants only, never to
//! its siblings.

use serde_json::Value as JsonValue;

use crate::content::{Key, KeyPath};
use crate::debug;

/// Nesting depth below which values are returned untouched.
pub const NESTING_LIMIT: usize = 256;

/// Rewrite every node of `value` with `f(node, path)`.
pub fn map_deep<F>(value: JsonValue, mut f: F) -> JsonValue
where
    F: FnMut(JsonValue, &KeyPath) -> JsonValue,
{
    map_deep_scoped(value, (), |node, path, _| (f(node, path), None))
}

/// Rewrite every node of `value` with a scope threaded per branch.
///
/// `f(node, path, scope)` returns the replacement node and optionally a new
/// scope for the replacement's children. `None` keeps the current scope.
pub fn map_deep_scoped<S, F>(value: JsonValue, scope: S, mut f: F) -> JsonValue
where
    F: FnMut(JsonValue, &KeyPath, &S) -> (JsonValue, Option<S>),
{
    let mut path = KeyPath::root();
    walk(value, &mut path, &scope, &mut f)
}

fn walk<S, F>(value: JsonValue, path: &mut KeyPath, scope: &S, f: &mut F) -> JsonValue
where
    F: FnMut(JsonValue, &KeyPath, &S) -> (JsonValue, Option<S>),
{
    if path.len() > NESTING_LIMIT {
        debug!("transform"; "nesting limit reached at {}", path);
        return value;
    }

    let (value, child_scope) = f(value, path, scope);
    let scope = child_scope.as_ref().unwrap_or(scope);

    match value {
        JsonValue::Object(map) => JsonValue::Object(
            map.into_iter()
                .map(|(key, child)| {
                    path.push(Key::Field(key.clone()));
                    let child = walk(child, path, scope, f);
                    path.pop();
                    (key, child)
                })
                .collect(),
        ),
        JsonValue::Array(items) => JsonValue::Array(
            items
                .into_iter()
                .enumerate()
                .map(|(index, child)| {
                    path.push(Key::Index(index));
                    let child = walk(child, path, scope, f);
                    path.pop();
                    child
                })
                .collect(),
        ),
        leaf => leaf,
    }
}
