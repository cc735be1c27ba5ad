//! Type-safe config field path.

/// A type-safe wrapper for config field paths.
///
/// Used with `#[derive(Config)]` to generate compile-time checked
/// field path accessors.
///
/// # Example
///
/// ```ignore
/// #[derive(Config)]
/// #[config(section = "resolve")]
/// pub struct ResolveConfig {
///     pub max_depth: usize,
/// }
///
/// // Generated:
/// impl ResolveConfig {
///     pub const FIELDS: ResolveConfigFields = ...;
/// }
///
/// // Usage:
/// diag.error(ResolveConfig::FIELDS.max_depth, "must be at least 1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}
