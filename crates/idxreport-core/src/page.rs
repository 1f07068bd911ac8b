//! Page records: one row of the non-indexed pages export.

use chrono::NaiveDateTime;

/// A single exported row. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRecord {
    pub url: String,
    /// `None` when the crawl cell was empty.
    pub last_crawled: Option<NaiveDateTime>,
}

impl PageRecord {
    pub fn new(url: impl Into<String>, last_crawled: Option<NaiveDateTime>) -> Self {
        Self {
            url: url.into(),
            last_crawled,
        }
    }
}

/// All data rows of the sheet, in sheet order (header row excluded).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageTable {
    records: Vec<PageRecord>,
}

impl PageTable {
    pub fn new(records: Vec<PageRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[PageRecord] {
        &self.records
    }

    /// URLs in table order.
    pub fn urls(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.url.as_str())
    }
}

impl FromIterator<PageRecord> for PageTable {
    fn from_iter<I: IntoIterator<Item = PageRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
