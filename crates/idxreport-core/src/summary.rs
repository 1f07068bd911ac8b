//! Row count and crawl-date range.

use chrono::NaiveDateTime;
use std::fmt;

use crate::page::PageTable;

/// Printed for an end of the range when no row has a crawl date.
pub const MISSING_DATE: &str = "NaT";

const DATE_DISPLAY: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub earliest: Option<NaiveDateTime>,
    pub latest: Option<NaiveDateTime>,
}

impl Summary {
    /// Absent crawl dates are skipped; both ends are `None` only when every row lacks one.
    pub fn of(table: &PageTable) -> Self {
        let dates = || table.records().iter().filter_map(|r| r.last_crawled);
        Self {
            total: table.len(),
            earliest: dates().min(),
            latest: dates().max(),
        }
    }
}

/// Formats one end of the crawl range.
pub struct CrawlDate(pub Option<NaiveDateTime>);

impl fmt::Display for CrawlDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(dt) => write!(f, "{}", dt.format(DATE_DISPLAY)),
            None => f.write_str(MISSING_DATE),
        }
    }
}
