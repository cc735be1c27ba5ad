//! Logging utilities with colored output.
//!
//! This module provides:
//! - `log!` macro for formatted terminal output with colored prefixes
//! - `debug!` macro for output only shown with `--verbose`
//! - `summary_*` helpers for the one-line result of a command
//!
//! Everything is written to stderr: stdout carries the JSON produced by
//! the pipeline and must stay machine-readable.
//!
//! # Example
//!
//! ```ignore
//! log!("resolve"; "resolving {} objects", count);
//! debug!("resolve"; "substituted {} at {}", id, path);
//! ```

use owo_colors::OwoColorize;
use std::{
    io::{Write, stderr},
    sync::atomic::{AtomicBool, Ordering},
};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when --verbose is enabled)
///
/// # Usage
/// ```ignore
/// debug!("module"; "debug info: {}", value);
/// ```
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored module prefix
#[inline]
pub fn log(module: &str, message: &str) {
    let module_lower = module.to_ascii_lowercase();
    let prefix = colorize_prefix(module, &module_lower);

    let mut stderr = stderr().lock();
    writeln!(stderr, "{prefix} {message}").ok();
    stderr.flush().ok();
}

/// Apply color to a module prefix based on module type
#[inline]
fn colorize_prefix(module: &str, module_lower: &str) -> String {
    let prefix = format!("[{module}]");
    match module_lower {
        "resolve" | "pages" => prefix.bright_blue().bold().to_string(),
        "check" => prefix.bright_green().bold().to_string(),
        "error" => prefix.bright_red().bold().to_string(),
        "hint" => prefix.bright_cyan().bold().to_string(),
        _ => prefix.bright_yellow().bold().to_string(),
    }
}

// ============================================================================
// Command Summary
// ============================================================================

/// Print the final success line of a command (✓ prefix, green).
pub fn summary_success(message: &str) {
    summary(format!("{}", "✓".green()), message);
}

/// Print the final failure line of a command (✗ prefix, red) with detail.
pub fn summary_error(summary_line: &str, detail: &str) {
    let message = if detail.is_empty() {
        summary_line.to_string()
    } else {
        format!("{summary_line}\n{detail}")
    };
    summary(format!("{}", "✗".red()), &message);
}

/// Print a warning summary line (⚠ prefix, yellow).
pub fn summary_warning(message: &str) {
    summary(format!("{}", "⚠".yellow()), message);
}

fn summary(symbol: String, message: &str) {
    let mut stderr = stderr().lock();
    writeln!(stderr, "{}", summary_line(&symbol, message)).ok();
    stderr.flush().ok();
}

fn summary_line(symbol: &str, message: &str) -> String {
    if symbol.is_empty() {
        message.to_string()
    } else {
        format!("{symbol} {message}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_contains_module() {
        let prefix = colorize_prefix("resolve", "resolve");
        assert!(prefix.contains("[resolve]"));

        let prefix = colorize_prefix("Warning", "warning");
        assert!(prefix.contains("[Warning]"));
    }

    #[test]
    fn test_summary_line_with_symbol() {
        assert_eq!(summary_line("✓", "done"), "✓ done");
        assert_eq!(summary_line("", "done"), "done");
    }

    #[test]
    fn test_verbose_toggle() {
        set_verbose(true);
        assert!(is_verbose());
        set_verbose(false);
        assert!(!is_verbose());
    }
}
