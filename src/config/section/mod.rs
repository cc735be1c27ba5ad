//! Configuration section definitions.
//!
//! Each module corresponds to a section in `weft.toml`:
//!
//! | Module    | TOML Section | Purpose                              |
//! |-----------|--------------|--------------------------------------|
//! | `resolve` | `[resolve]`  | Reference fields and depth           |
//! | `flatten` | `[flatten]`  | Frontmatter flattening               |
//! | `pages`   | `[pages]`    | Page assembly                        |
//! | `source`  | `[source]`   | Default input and output files       |

mod flatten;
mod pages;
mod resolve;
mod source;

pub use flatten::FlattenConfig;
pub use pages::PagesConfig;
pub use resolve::ResolveConfig;
pub use source::SourceConfig;
