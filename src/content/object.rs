//! Content objects as handed over by the source stage.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use thiserror::Error;

use super::{JsonMap, METADATA_KEY};

/// Source-stage bookkeeping attached to every object under `__metadata`.
///
/// Keys the source adds beyond the three known ones are kept in `extra`
/// so they survive a round trip through the pipeline. Absent keys stay
/// absent on output.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// Unique identity, typically the source file path.
    pub id: String,
    /// Name of the source the object came from (e.g. `pages`, `data`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,
    /// Path relative to the source root, used to derive URLs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rel_source_path: Option<String>,
    #[serde(flatten, default)]
    pub extra: JsonMap,
}

impl Metadata {
    pub fn new(
        id: impl Into<String>,
        source_name: impl Into<String>,
        rel_source_path: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source_name: Some(source_name.into()),
            rel_source_path: Some(rel_source_path.into()),
            extra: JsonMap::new(),
        }
    }

    #[inline]
    pub fn source_name(&self) -> &str {
        self.source_name.as_deref().unwrap_or_default()
    }

    /// Source-relative path, empty when the source gave none.
    #[inline]
    pub fn rel_source_path(&self) -> &str {
        self.rel_source_path.as_deref().unwrap_or_default()
    }

    /// Read metadata back from a `__metadata` value.
    ///
    /// Returns `None` unless the value is a mapping with a string `id`.
    pub fn from_value(value: &JsonValue) -> Option<Self> {
        value.get("id")?.as_str()?;
        serde_json::from_value(value.clone()).ok()
    }
}

/// A content object: arbitrary fields plus its [`Metadata`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentObject {
    #[serde(rename = "__metadata")]
    pub metadata: Metadata,
    #[serde(flatten)]
    pub fields: JsonMap,
}

impl ContentObject {
    pub fn new(metadata: Metadata, fields: JsonMap) -> Self {
        Self { metadata, fields }
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.metadata.id
    }

    #[inline]
    pub fn source_name(&self) -> &str {
        self.metadata.source_name()
    }

    /// Look up a top-level field.
    #[inline]
    pub fn get(&self, field: &str) -> Option<&JsonValue> {
        self.fields.get(field)
    }

    /// Convert into a single JSON mapping with `__metadata` first.
    pub fn into_value(self) -> JsonValue {
        let mut map = JsonMap::with_capacity(self.fields.len() + 1);
        map.insert(METADATA_KEY.to_string(), metadata_value(&self.metadata));
        map.extend(self.fields);
        JsonValue::Object(map)
    }

    /// Same as [`into_value`](Self::into_value) without consuming the object.
    pub fn to_value(&self) -> JsonValue {
        self.clone().into_value()
    }

    /// Split a JSON mapping back into metadata and fields.
    ///
    /// The mapping must carry a `__metadata` value with a string `id`.
    pub fn from_value(value: JsonValue) -> Option<Self> {
        let JsonValue::Object(mut map) = value else {
            return None;
        };
        let metadata = Metadata::from_value(map.get(METADATA_KEY)?)?;
        map.shift_remove(METADATA_KEY);
        Some(Self::new(metadata, map))
    }
}

fn metadata_value(metadata: &Metadata) -> JsonValue {
    serde_json::to_value(metadata).unwrap_or(JsonValue::Null)
}

// ============================================================================
// Input decoding
// ============================================================================

/// Errors raised while reading an object set.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("invalid JSON input")]
    Json(#[from] serde_json::Error),

    #[error("input must be a JSON array of content objects")]
    NotAnArray,

    #[error("input nests deeper than {MAX_INPUT_DEPTH} levels")]
    TooDeep,

    #[error("object #{index} is invalid: {source}")]
    Object {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Deepest bracket nesting accepted on input.
///
/// Decoding runs without serde_json's 128-level recursion limit; this bound
/// takes its place.
pub const MAX_INPUT_DEPTH: usize = 1024;

/// Decode a JSON document holding an array of content objects.
///
/// Each element is decoded on its own so a malformed object is reported
/// with its position in the array.
pub fn decode_objects(json: &str) -> Result<Vec<ContentObject>, InputError> {
    if nesting_depth(json) > MAX_INPUT_DEPTH {
        return Err(InputError::TooDeep);
    }

    let mut de = serde_json::Deserializer::from_str(json);
    de.disable_recursion_limit();
    let value = JsonValue::deserialize(&mut de)?;
    de.end()?;

    let JsonValue::Array(items) = value else {
        return Err(InputError::NotAnArray);
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item).map_err(|source| InputError::Object { index, source })
        })
        .collect()
}

/// Maximum bracket nesting of a JSON text, ignoring brackets in strings.
///
/// Malformed text is left to the parser to report.
fn nesting_depth(json: &str) -> usize {
    let (mut depth, mut max) = (0usize, 0usize);
    let (mut in_string, mut escaped) = (false, false);

    for byte in json.bytes() {
        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match byte {
            b'"' => in_string = true,
            b'[' | b'{' => {
                depth += 1;
                max = max.max(depth);
            }
            b']' | b'}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    max
}
