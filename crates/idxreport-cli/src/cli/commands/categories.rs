//! `idxreport categories` – issues breakdown only.

use anyhow::Result;
use idxreport_core::classify;
use idxreport_core::config::ReportConfig;
use idxreport_core::page::PageTable;
use idxreport_core::report::render_categories;
use std::io::{self, Write};

pub fn run_categories(table: &PageTable, cfg: &ReportConfig) -> Result<()> {
    let buckets = classify::classify(table);
    let mut out = io::stdout().lock();
    render_categories(&mut out, &buckets, cfg.sample_limit)?;
    out.flush()?;
    Ok(())
}
