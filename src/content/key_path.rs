//! Locations inside an object's nested structure.

use std::fmt;

use serde::{Serialize, Serializer};

/// One step into a nested value: a mapping field or a sequence index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Field(String),
    Index(usize),
}

impl Key {
    /// The field name, or `None` for sequence indices.
    #[inline]
    pub fn as_field(&self) -> Option<&str> {
        match self {
            Self::Field(name) => Some(name),
            Self::Index(_) => None,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(name) => f.write_str(name),
            Self::Index(index) => write!(f, "{index}"),
        }
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Self::Field(name.to_string())
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl Serialize for Key {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Field(name) => serializer.serialize_str(name),
            Self::Index(index) => serializer.serialize_u64(*index as u64),
        }
    }
}

/// Ordered sequence of keys from an object's root to a value.
///
/// Displayed dot-joined: `sections.0.author`. The root path is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct KeyPath(Vec<Key>);

impl KeyPath {
    pub const fn root() -> Self {
        Self(Vec::new())
    }

    #[inline]
    pub fn push(&mut self, key: Key) {
        self.0.push(key);
    }

    #[inline]
    pub fn pop(&mut self) -> Option<Key> {
        self.0.pop()
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn last(&self) -> Option<&Key> {
        self.0.last()
    }

    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.0.iter()
    }

    /// Whether any step of the path is the field `name`.
    pub fn contains_field(&self, name: &str) -> bool {
        self.0.iter().any(|key| key.as_field() == Some(name))
    }

    /// Segment-wise prefix test: `author` is a prefix of `author.name`
    /// but not of `authors`.
    pub fn starts_with(&self, prefix: &KeyPath) -> bool {
        self.0.starts_with(&prefix.0)
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, key) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{key}")?;
        }
        Ok(())
    }
}

impl<K: Into<Key>> FromIterator<K> for KeyPath {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(keys: &[Key]) -> KeyPath {
        keys.iter().cloned().collect()
    }

    #[test]
    fn test_display() {
        let p = path(&["sections".into(), 0usize.into(), "author".into()]);
        assert_eq!(p.to_string(), "sections.0.author");
        assert_eq!(KeyPath::root().to_string(), "");
    }

    #[test]
    fn test_segment_prefix() {
        let author = path(&["author".into()]);
        let nested = path(&["author".into(), "name".into()]);
        let authors = path(&["authors".into()]);

        assert!(nested.starts_with(&author));
        assert!(!authors.starts_with(&author));
        assert!(author.starts_with(&KeyPath::root()));
    }

    #[test]
    fn test_contains_field_ignores_indices() {
        let p = path(&["__metadata".into(), 3usize.into()]);
        assert!(p.contains_field("__metadata"));
        assert!(!p.contains_field("3"));
    }

    #[test]
    fn test_serialize_mixed_keys() {
        let p = path(&["items".into(), 2usize.into()]);
        assert_eq!(serde_json::to_string(&p).unwrap(), r#"["items",2]"#);
    }
}
