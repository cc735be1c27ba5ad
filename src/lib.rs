//! weft: a content pipeline stage for static sites.
//!
//! Takes the object set produced by a source stage, flattens markdown
//! frontmatter, inlines objects referenced by string fields, and assembles
//! page entries for a render stage.
//!
//! | Module      | Purpose                                          |
//! |-------------|--------------------------------------------------|
//! | `content`   | Content objects, metadata, key paths, id index   |
//! | `transform` | Deep mapper, flattener, resolver, URL deriver    |
//! | `page`      | Page entries for rendering                       |
//! | `pipeline`  | Flatten + resolve as one configured run          |
//! | `config`    | `weft.toml` loading and validation               |
//! | `cli`       | Command-line interface                           |

pub mod cli;
pub mod config;
pub mod content;
pub mod logger;
pub mod page;
pub mod pipeline;
pub mod transform;
pub mod utils;
