//! `idxreport redirects` – redirect target of every old-structure URL.

use anyhow::Result;
use idxreport_core::page::PageTable;
use idxreport_core::redirect::redirect_map;
use idxreport_core::report::render_redirects;
use std::io;

pub fn run_redirects(table: &PageTable) -> Result<()> {
    let entries = redirect_map(table);
    render_redirects(&mut io::stdout().lock(), &entries)?;
    Ok(())
}
