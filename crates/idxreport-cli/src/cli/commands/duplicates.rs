//! `idxreport duplicates` – /clinic/ vs /clinics/ duplicate candidates.

use anyhow::Result;
use idxreport_core::duplicates::{find_duplicates, MatchMode};
use idxreport_core::page::PageTable;
use idxreport_core::report::render_duplicates;
use std::io::{self, Write};

pub fn run_duplicates(table: &PageTable, mode: MatchMode) -> Result<()> {
    let scan = find_duplicates(table, mode);
    let mut out = io::stdout().lock();
    render_duplicates(&mut out, &scan)?;
    out.flush()?;
    Ok(())
}
