//! Cell conversion for URL and crawl-date values.

use calamine::Data;
use chrono::{NaiveDate, NaiveDateTime};

use crate::error::LoadError;

/// Text layouts accepted for crawl dates stored as strings.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// URL cells must hold text. Anything else (including an empty cell) is a data-shape error.
pub(super) fn url_text(cell: &Data, row: usize) -> Result<String, LoadError> {
    match cell {
        Data::String(s) => Ok(s.clone()),
        other => Err(LoadError::NonTextUrl {
            row,
            found: describe(other),
        }),
    }
}

/// Empty cells are absent dates; date cells and ISO-looking text are parsed.
pub(super) fn crawl_date(
    cell: &Data,
    row: usize,
    column: &str,
) -> Result<Option<NaiveDateTime>, LoadError> {
    let parsed = match cell {
        Data::Empty => return Ok(None),
        Data::String(s) if s.trim().is_empty() => return Ok(None),
        Data::DateTime(dt) => dt.as_datetime(),
        Data::DateTimeIso(s) | Data::String(s) => parse_date_text(s),
        _ => None,
    };
    parsed.map(Some).ok_or_else(|| LoadError::NonDateCrawled {
        row,
        column: column.to_string(),
        found: cell.to_string(),
    })
}

pub(super) fn parse_date_text(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(s, DATE_FORMAT)
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

fn describe(cell: &Data) -> String {
    match cell {
        Data::Empty => "empty cell".to_string(),
        Data::Int(_) | Data::Float(_) => format!("number {cell}"),
        Data::Bool(_) => format!("bool {cell}"),
        Data::Error(e) => format!("error {e:?}"),
        Data::DateTime(_) | Data::DateTimeIso(_) => format!("date {cell}"),
        Data::DurationIso(_) => format!("duration {cell}"),
        Data::String(_) => format!("text {cell}"),
    }
}
