//! Header lookup for the two columns the report reads.

use calamine::Data;

use crate::error::LoadError;

/// Header titles of the URL and crawl-date columns.
#[derive(Debug, Clone, Copy)]
pub struct ColumnNames<'a> {
    pub url: &'a str,
    pub crawled: &'a str,
}

/// Positions of the named columns within a row.
#[derive(Debug, Clone, Copy)]
pub(super) struct ColumnIndex {
    url: usize,
    crawled: usize,
}

static EMPTY: Data = Data::Empty;

impl ColumnIndex {
    /// Finds both columns in `header`. The crawl column is looked up first,
    /// matching the order the report reads them in.
    pub(super) fn locate(header: &[Data], names: &ColumnNames<'_>) -> Result<Self, LoadError> {
        let crawled = position(header, names.crawled)?;
        let url = position(header, names.url)?;
        Ok(Self { url, crawled })
    }

    pub(super) fn url_cell<'r>(&self, row: &'r [Data]) -> &'r Data {
        row.get(self.url).unwrap_or(&EMPTY)
    }

    pub(super) fn crawled_cell<'r>(&self, row: &'r [Data]) -> &'r Data {
        row.get(self.crawled).unwrap_or(&EMPTY)
    }
}

fn position(header: &[Data], name: &str) -> Result<usize, LoadError> {
    header
        .iter()
        .position(|cell| matches!(cell, Data::String(s) if s == name))
        .ok_or_else(|| LoadError::MissingColumn(name.to_string()))
}
