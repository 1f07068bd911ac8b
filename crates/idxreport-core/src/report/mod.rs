//! Report assembly: run every analysis over the table, then render as plain text.
//!
//! All sections are computed before anything is written, so a failing run
//! never leaves a half-printed report behind.

mod txt;

pub use txt::{render_categories, render_duplicates, render_redirects, render_summary};

use std::io::{self, Write};

use crate::classify::{self, CategoryBuckets};
use crate::duplicates::{self, DuplicateScan, MatchMode};
use crate::page::PageTable;
use crate::summary::Summary;

/// Default number of example URLs shown per category.
pub const DEFAULT_SAMPLE_LIMIT: usize = 5;

/// Every section of the non-indexed pages report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub summary: Summary,
    pub buckets: CategoryBuckets,
    pub duplicates: DuplicateScan,
}

impl Report {
    pub fn build(table: &PageTable, mode: MatchMode) -> Self {
        let report = Self {
            summary: Summary::of(table),
            buckets: classify::classify(table),
            duplicates: duplicates::find_duplicates(table, mode),
        };
        tracing::info!(
            total = report.summary.total,
            categories = report.buckets.len(),
            duplicates = report.duplicates.pairs.len(),
            "report built"
        );
        report
    }

    /// Writes summary, issues breakdown and duplicate sections, in that order.
    pub fn render<W: Write>(&self, out: &mut W, sample_limit: usize) -> io::Result<()> {
        render_summary(out, &self.summary)?;
        render_categories(out, &self.buckets, sample_limit)?;
        render_duplicates(out, &self.duplicates)?;
        out.flush()
    }
}
