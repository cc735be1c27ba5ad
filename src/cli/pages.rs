//! `weft pages`: assemble render-ready page entries.

use anyhow::Result;

use super::args::IoArgs;
use super::common::{input_path, output_path, run_pipeline, write_json};
use crate::config::WeftConfig;
use crate::log;
use crate::page::build_pages;
use crate::utils::plural_count;

/// Execute pages command
pub fn run_pages(io: &IoArgs, config: &WeftConfig) -> Result<()> {
    let output = run_pipeline(input_path(io.input.as_deref(), config), config)?;
    let pages = build_pages(&output.objects, &config.pages.source, &config.pages.site_id);

    if pages.is_empty() {
        log!(
            "pages";
            "no objects with sourceName `{}`",
            config.pages.source
        );
    } else {
        log!("pages"; "assembled {}", plural_count(pages.len(), "page"));
    }

    write_json(&pages, output_path(io.output.as_deref(), config), io.pretty)
}
