//! `idxreport report` – full report to stdout.

use anyhow::Result;
use idxreport_core::config::ReportConfig;
use idxreport_core::duplicates::MatchMode;
use idxreport_core::page::PageTable;
use idxreport_core::report::Report;
use std::io;

pub fn run_report(table: &PageTable, cfg: &ReportConfig, mode: MatchMode) -> Result<()> {
    let report = Report::build(table, mode);
    report.render(&mut io::stdout().lock(), cfg.sample_limit)?;
    Ok(())
}
