//! Load and data-shape errors raised while reading the page export.

use std::path::PathBuf;
use thiserror::Error;

/// Failure while turning a spreadsheet into a [`PageTable`](crate::page::PageTable).
///
/// Every variant is fatal: the report is never produced from a partially
/// loaded table.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File is missing, unreadable, or not a spreadsheet format we recognise.
    #[error("open workbook {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    /// Workbook opened but has no sheet with the requested name.
    #[error("sheet {sheet:?} not found (available: {})", available.join(", "))]
    SheetNotFound {
        sheet: String,
        available: Vec<String>,
    },

    /// Sheet exists but its cells could not be decoded.
    #[error("read sheet {sheet:?}: {source}")]
    Sheet {
        sheet: String,
        #[source]
        source: calamine::Error,
    },

    /// Header row has no column with this exact title.
    #[error("column {0:?} not found in header row")]
    MissingColumn(String),

    /// URL cell holds something other than text (number, bool, empty, error).
    /// `row` is the 1-based sheet row, header included.
    #[error("row {row}: URL cell is not text ({found})")]
    NonTextUrl { row: usize, found: String },

    /// Crawl cell is neither empty nor a recognisable date.
    #[error("row {row}: {column:?} value {found:?} is not a date")]
    NonDateCrawled {
        row: usize,
        column: String,
        found: String,
    },
}
