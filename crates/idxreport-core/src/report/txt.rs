//! Plain-text section writers.

use std::io::{self, Write};

use crate::classify::CategoryBuckets;
use crate::duplicates::DuplicateScan;
use crate::redirect::RedirectEntry;
use crate::summary::{CrawlDate, Summary};

pub fn render_summary<W: Write>(out: &mut W, summary: &Summary) -> io::Result<()> {
    writeln!(out, "=== ANALYSIS OF NON-INDEXED PAGES ===\n")?;
    writeln!(out, "Total non-indexed pages: {}", summary.total)?;
    writeln!(
        out,
        "Last crawled dates range: {} to {}\n",
        CrawlDate(summary.earliest),
        CrawlDate(summary.latest)
    )
}

/// One block per non-empty bucket: count, first `sample_limit` URLs, overflow line.
pub fn render_categories<W: Write>(
    out: &mut W,
    buckets: &CategoryBuckets,
    sample_limit: usize,
) -> io::Result<()> {
    writeln!(out, "=== ISSUES BREAKDOWN ===\n")?;
    for bucket in buckets.iter() {
        writeln!(out, "{}: {} pages", bucket.category.label(), bucket.urls.len())?;
        for url in bucket.urls.iter().take(sample_limit) {
            writeln!(out, "  - {url}")?;
        }
        if bucket.urls.len() > sample_limit {
            writeln!(out, "  ... and {} more", bucket.urls.len() - sample_limit)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

pub fn render_duplicates<W: Write>(out: &mut W, scan: &DuplicateScan) -> io::Result<()> {
    writeln!(out, "=== POTENTIAL DUPLICATE CONTENT ISSUES ===\n")?;
    writeln!(out, "Old clinic URLs (/clinic/): {}", scan.old_urls.len())?;
    writeln!(out, "New clinic URLs (/clinics/): {}", scan.new_urls.len())?;
    for pair in &scan.pairs {
        writeln!(out, "DUPLICATE FOUND:")?;
        writeln!(out, "  Old: {}", pair.old_url)?;
        writeln!(out, "  New: {}", pair.new_url)?;
        writeln!(out)?;
    }
    Ok(())
}

pub fn render_redirects<W: Write>(out: &mut W, entries: &[RedirectEntry]) -> io::Result<()> {
    let seen = entries.iter().filter(|e| e.target_in_export).count();
    writeln!(out, "=== CLINIC REDIRECT MAP ===\n")?;
    writeln!(out, "Old clinic URLs (/clinic/): {}", entries.len())?;
    writeln!(out, "Redirect targets seen in export: {seen}\n")?;
    for entry in entries {
        match (&entry.target, entry.target_in_export) {
            (Some(target), true) => {
                writeln!(out, "  {} -> {} (in export)", entry.old_url, target)?
            }
            (Some(target), false) => writeln!(out, "  {} -> {}", entry.old_url, target)?,
            (None, _) => writeln!(out, "  {} -> no redirect rule", entry.old_url)?,
        }
    }
    out.flush()
}
