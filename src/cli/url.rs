//! `weft url`: print derived URLs, one per line.

use std::io::{self, Write};

use anyhow::Result;

use crate::transform::url_from_path;

/// Execute url command
pub fn run_url(paths: &[String]) -> Result<()> {
    let mut stdout = io::stdout().lock();
    for path in paths {
        writeln!(stdout, "{}", url_from_path(path))?;
    }
    stdout.flush()?;
    Ok(())
}
