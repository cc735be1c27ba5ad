//! Page assembly: turn resolved page objects into render-ready entries.

mod entry;

pub use entry::{PageEntry, build_pages};
