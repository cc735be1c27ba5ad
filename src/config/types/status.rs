//! Field status types for config validation.
//!
//! Generated `validate_field_status` methods call into this module when a
//! field (or section) with a special status is set to a non-default value.

use super::FieldPath;
use crate::config::ConfigDiagnostics;

/// Field status for validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    Experimental,
    NotImplemented,
    Deprecated,
}

impl FieldStatus {
    /// Get status label for display.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Experimental => "experimental",
            Self::NotImplemented => "not implemented",
            Self::Deprecated => "deprecated",
        }
    }
}

/// Check field status and report diagnostics
pub fn check_field_status(field_path: &str, status: FieldStatus, diag: &mut ConfigDiagnostics) {
    report(leak(field_path.to_string()), status, "field", diag);
}

/// Check section-level status and report diagnostics
pub fn check_section_status(section: &str, status: FieldStatus, diag: &mut ConfigDiagnostics) {
    report(leak(format!("[{section}]")), status, "section", diag);
}

fn report(path: FieldPath, status: FieldStatus, what: &str, diag: &mut ConfigDiagnostics) {
    if status == FieldStatus::Experimental && diag.allow_experimental {
        return;
    }

    match status {
        FieldStatus::NotImplemented => diag.error_with_hint(
            path,
            format!("this {what} is not implemented yet"),
            format!("remove this {what} or wait for a future release"),
        ),
        FieldStatus::Deprecated => diag.warn(
            path,
            format!("this {what} is deprecated and will be removed in a future version"),
        ),
        FieldStatus::Experimental => diag.experimental_hint(path),
    }
}

/// Field paths are `&'static str`; dynamic ones live for the whole run.
fn leak(path: String) -> FieldPath {
    FieldPath::new(Box::leak(path.into_boxed_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_experimental_field_is_hinted() {
        let mut diag = ConfigDiagnostics::new();
        check_field_status("resolve.self_references", FieldStatus::Experimental, &mut diag);

        assert!(diag.errors().is_empty());
        assert_eq!(diag.hints().len(), 1);
        assert_eq!(diag.hints()[0].as_str(), "resolve.self_references");
    }

    #[test]
    fn test_experimental_allowed_is_silent() {
        let mut diag = ConfigDiagnostics::with_allow_experimental(true);
        check_field_status("resolve.self_references", FieldStatus::Experimental, &mut diag);
        assert!(diag.hints().is_empty());
    }

    #[test]
    fn test_not_implemented_section_is_an_error() {
        let mut diag = ConfigDiagnostics::new();
        check_section_status("watch", FieldStatus::NotImplemented, &mut diag);

        assert_eq!(diag.errors().len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "[watch]");
    }

    #[test]
    fn test_deprecated_is_a_warning() {
        let mut diag = ConfigDiagnostics::new();
        check_field_status("flatten.old", FieldStatus::Deprecated, &mut diag);

        assert!(diag.errors().is_empty());
        assert_eq!(diag.warnings().len(), 1);
    }
}
