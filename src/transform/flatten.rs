//! Frontmatter flattening.
//!
//! Markdown sources deliver `{ frontmatter: {..}, markdown: "..." }`. Pages
//! and references are easier to consume with the frontmatter fields at the
//! top level and the body under `markdown_content`.

use serde_json::Value as JsonValue;

use crate::content::{ContentObject, JsonMap, METADATA_KEY, Metadata};
use crate::log;

/// Field holding parsed frontmatter on source objects.
pub const FRONTMATTER_KEY: &str = "frontmatter";

/// Field holding the raw markdown body on source objects.
pub const MARKDOWN_KEY: &str = "markdown";

/// Field receiving the markdown body on flattened objects.
pub const MARKDOWN_CONTENT_KEY: &str = "markdown_content";

/// Flatten every object carrying frontmatter. Order is preserved.
pub fn flatten_frontmatter(objects: Vec<ContentObject>) -> Vec<ContentObject> {
    objects.into_iter().map(flatten_object).collect()
}

/// Flatten a single object.
///
/// The result holds the frontmatter fields followed by `markdown_content`;
/// all other fields of the source object are dropped. Objects without a
/// mapping (or null) `frontmatter` are returned unchanged.
///
/// A frontmatter `__metadata` key replaces the object's metadata when it is
/// valid metadata and is dropped otherwise.
pub fn flatten_object(mut object: ContentObject) -> ContentObject {
    let flattenable = matches!(
        object.fields.get(FRONTMATTER_KEY),
        Some(JsonValue::Object(_) | JsonValue::Null)
    );
    if !flattenable {
        return object;
    }

    let mut fields = match object.fields.shift_remove(FRONTMATTER_KEY) {
        Some(JsonValue::Object(map)) => map,
        _ => JsonMap::new(),
    };

    let mut metadata = object.metadata;
    if let Some(value) = fields.shift_remove(METADATA_KEY) {
        match Metadata::from_value(&value) {
            Some(replacement) => metadata = replacement,
            None => log!(
                "flatten";
                "ignoring invalid `{}` in frontmatter of `{}`", METADATA_KEY, metadata.id
            ),
        }
    }

    let body = object
        .fields
        .shift_remove(MARKDOWN_KEY)
        .filter(is_truthy)
        .unwrap_or(JsonValue::Null);
    fields.insert(MARKDOWN_CONTENT_KEY.to_string(), body);

    ContentObject::new(metadata, fields)
}

/// Truthiness of a body value: empty strings, `false`, `0` and null count
/// as absent.
fn is_truthy(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null => false,
        JsonValue::Bool(b) => *b,
        JsonValue::Number(n) => n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        JsonValue::String(s) => !s.is_empty(),
        JsonValue::Array(_) | JsonValue::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: JsonValue) -> ContentObject {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_flatten_markdown_object() {
        let flattened = flatten_object(object(json!({
            "frontmatter": { "title": "T" },
            "markdown": "body text",
            "__metadata": { "id": "x" }
        })));

        assert_eq!(
            flattened.to_value(),
            json!({
                "title": "T",
                "markdown_content": "body text",
                "__metadata": { "id": "x" }
            })
        );
    }

    #[test]
    fn test_frontmatter_metadata_key_written_once() {
        let flattened = flatten_object(object(json!({
            "__metadata": { "id": "x" },
            "frontmatter": { "__metadata": "fm", "title": "T" }
        })));

        assert!(flattened.get("__metadata").is_none());
        assert_eq!(flattened.id(), "x");
        let text = serde_json::to_string(&flattened).unwrap();
        assert_eq!(text.matches("\"__metadata\"").count(), 1);
    }

    #[test]
    fn test_frontmatter_metadata_replaces_when_valid() {
        let flattened = flatten_object(object(json!({
            "__metadata": { "id": "x", "sourceName": "pages" },
            "frontmatter": { "__metadata": { "id": "y" }, "title": "T" }
        })));

        assert_eq!(
            flattened.to_value(),
            json!({ "__metadata": { "id": "y" }, "title": "T", "markdown_content": null })
        );
    }

    #[test]
    fn test_frontmatter_order_then_body() {
        let flattened = flatten_object(object(json!({
            "__metadata": { "id": "x" },
            "frontmatter": { "layout": "post", "title": "T" },
            "markdown": "body"
        })));
        let keys: Vec<_> = flattened.fields.keys().cloned().collect();
        assert_eq!(keys, vec!["layout", "title", "markdown_content"]);
    }

    #[test]
    fn test_missing_or_empty_body_is_null() {
        let no_body = flatten_object(object(json!({
            "__metadata": { "id": "x" },
            "frontmatter": { "title": "T" }
        })));
        assert_eq!(no_body.get("markdown_content"), Some(&JsonValue::Null));

        let empty_body = flatten_object(object(json!({
            "__metadata": { "id": "y" },
            "frontmatter": {},
            "markdown": ""
        })));
        assert_eq!(empty_body.get("markdown_content"), Some(&JsonValue::Null));
    }

    #[test]
    fn test_other_fields_dropped() {
        let flattened = flatten_object(object(json!({
            "__metadata": { "id": "x" },
            "frontmatter": { "title": "T" },
            "markdown": "b",
            "stray": 1
        })));
        assert!(flattened.get("stray").is_none());
        assert!(flattened.get("frontmatter").is_none());
        assert!(flattened.get("markdown").is_none());
    }

    #[test]
    fn test_null_frontmatter_flattens_to_body_only() {
        let flattened = flatten_object(object(json!({
            "__metadata": { "id": "x" },
            "frontmatter": null,
            "markdown": "b"
        })));
        assert_eq!(flattened.fields.len(), 1);
        assert_eq!(flattened.get("markdown_content"), Some(&json!("b")));
    }

    #[test]
    fn test_objects_without_frontmatter_pass_through() {
        let data = object(json!({ "__metadata": { "id": "a.json" }, "name": "A" }));
        assert_eq!(flatten_object(data.clone()), data);

        let odd = object(json!({ "__metadata": { "id": "b" }, "frontmatter": "title: T" }));
        assert_eq!(flatten_object(odd.clone()), odd);
    }

    #[test]
    fn test_flatten_keeps_order_of_objects() {
        let objects = vec![
            object(json!({ "__metadata": { "id": "1" }, "frontmatter": {} })),
            object(json!({ "__metadata": { "id": "2" } })),
        ];
        let ids: Vec<_> = flatten_frontmatter(objects)
            .iter()
            .map(|o| o.id().to_string())
            .collect();
        assert_eq!(ids, vec!["1", "2"]);
    }
}
