//! Read-only lookup of objects by id.

use rustc_hash::FxHashMap;
use serde_json::Value as JsonValue;

use super::ContentObject;
use crate::log;

/// Maps every object id to the object's JSON form (`__metadata` included).
///
/// Built fresh for each resolution pass and never mutated afterwards;
/// substitutions clone out of it.
#[derive(Debug, Default)]
pub struct ObjectIndex {
    objects: FxHashMap<String, JsonValue>,
}

impl ObjectIndex {
    /// Index an object set. On duplicate ids the later object wins.
    pub fn build(objects: &[ContentObject]) -> Self {
        let mut map = FxHashMap::with_capacity_and_hasher(objects.len(), Default::default());
        for object in objects {
            if map.insert(object.id().to_string(), object.to_value()).is_some() {
                log!("warning"; "duplicate object id `{}`, keeping the last one", object.id());
            }
        }
        Self { objects: map }
    }

    #[inline]
    pub fn get(&self, id: &str) -> Option<&JsonValue> {
        self.objects.get(id)
    }

    #[inline]
    pub fn contains(&self, id: &str) -> bool {
        self.objects.contains_key(id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
