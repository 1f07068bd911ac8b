//! Spreadsheet loader: read one sheet of the export into a [`PageTable`].
//!
//! The first row of the sheet is the header row; the URL and crawl columns are
//! found by exact header text. Format is auto-detected from the file (xlsx,
//! xlsm, xlsb, xls, ods).

mod cell;
mod columns;

use calamine::{open_workbook_auto, Data, Range, Reader};
use std::path::Path;

use crate::config::ReportConfig;
use crate::error::LoadError;
use crate::page::{PageRecord, PageTable};

pub use columns::ColumnNames;
use columns::ColumnIndex;

/// Loads the sheet named in `cfg` from `cfg.input_path`.
pub fn load_from_config(cfg: &ReportConfig) -> Result<PageTable, LoadError> {
    let names = ColumnNames {
        url: &cfg.url_column,
        crawled: &cfg.crawled_column,
    };
    load_page_table(&cfg.input_path, &cfg.sheet, &names)
}

/// Opens `path`, reads `sheet` and converts every data row into a [`PageRecord`].
pub fn load_page_table(
    path: &Path,
    sheet: &str,
    names: &ColumnNames<'_>,
) -> Result<PageTable, LoadError> {
    let mut workbook = open_workbook_auto(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let available = workbook.sheet_names();
    if !available.iter().any(|s| s == sheet) {
        return Err(LoadError::SheetNotFound {
            sheet: sheet.to_string(),
            available,
        });
    }

    let range = workbook
        .worksheet_range(sheet)
        .map_err(|source| LoadError::Sheet {
            sheet: sheet.to_string(),
            source,
        })?;
    tracing::debug!(
        path = %path.display(),
        sheet,
        height = range.height(),
        width = range.width(),
        "worksheet loaded"
    );

    table_from_range(&range, names)
}

/// Converts an in-memory cell range (header row first) into a [`PageTable`].
pub fn table_from_range(
    range: &Range<Data>,
    names: &ColumnNames<'_>,
) -> Result<PageTable, LoadError> {
    let mut rows = range.rows();
    let header = rows.next().unwrap_or(&[]);
    let index = ColumnIndex::locate(header, names)?;

    // Sheet row numbers (1-based) for error messages.
    let first_row = range.start().map_or(0, |(row, _)| row as usize) + 1;

    let mut records = Vec::with_capacity(range.height().saturating_sub(1));
    for (offset, row) in rows.enumerate() {
        let row_number = first_row + offset + 1;
        let url = cell::url_text(index.url_cell(row), row_number)?;
        let last_crawled =
            cell::crawl_date(index.crawled_cell(row), row_number, names.crawled)?;
        records.push(PageRecord::new(url, last_crawled));
    }

    tracing::info!(rows = records.len(), "page table built");
    Ok(PageTable::new(records))
}
