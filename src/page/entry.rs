//! Page entries handed to the render stage.
//!
//! Every object of the pages source becomes one entry:
//!
//! ```text
//! { path: "blog/hello", site: {..config..}, meta: {..__metadata..}, page: {..fields..} }
//! ```

use serde::Serialize;

use crate::content::{ContentObject, JsonMap, Metadata};
use crate::log;
use crate::transform::url_from_path;

/// A page ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageEntry {
    /// Site-relative URL derived from the page's source path.
    pub path: String,
    /// Site-wide data object, without its metadata.
    pub site: Option<JsonMap>,
    pub meta: Metadata,
    /// Page fields, without metadata.
    pub page: JsonMap,
}

/// Assemble page entries from a resolved object set.
///
/// Objects whose `sourceName` equals `source` become pages, in input order.
/// The first object with id `site_id` is attached to every entry as `site`;
/// when none exists a warning is logged and `site` is null.
pub fn build_pages(objects: &[ContentObject], source: &str, site_id: &str) -> Vec<PageEntry> {
    let site = objects
        .iter()
        .find(|object| object.id() == site_id)
        .map(|object| object.fields.clone());

    let pages: Vec<&ContentObject> = objects
        .iter()
        .filter(|object| object.source_name() == source)
        .collect();

    if site.is_none() && !pages.is_empty() {
        log!("pages"; "site object `{}` not found, pages get no site data", site_id);
    }

    pages
        .into_iter()
        .map(|object| PageEntry {
            path: url_from_path(object.metadata.rel_source_path()),
            site: site.clone(),
            meta: object.metadata.clone(),
            page: object.fields.clone(),
        })
        .collect()
}
