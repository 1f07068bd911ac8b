//! Integration test: load the bundled xlsx export and render the full report.
//!
//! The fixture has a `Table` sheet with real date cells, one text date and one
//! empty crawl cell.

use std::path::PathBuf;

use idxreport_core::config::ReportConfig;
use idxreport_core::duplicates::MatchMode;
use idxreport_core::error::LoadError;
use idxreport_core::redirect::redirect_map;
use idxreport_core::report::{Report, DEFAULT_SAMPLE_LIMIT};
use idxreport_core::sheet::{self, ColumnNames};

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/non_indexed.xlsx")
}

fn fixture_config() -> ReportConfig {
    ReportConfig::default().with_overrides(Some(fixture()), None)
}

#[test]
fn fixture_loads_in_sheet_order() {
    let table = sheet::load_from_config(&fixture_config()).unwrap();
    let urls: Vec<&str> = table.urls().collect();
    assert_eq!(
        urls,
        vec![
            "https://example.com/clinic/foo",
            "https://example.com/clinics/foo",
            "https://example.com/clinics/bar/reviews/",
            "https://example.com/education/sleep-and-anxiety/",
            "https://example.com/clinic/baz",
        ]
    );
    assert!(table.records()[2].last_crawled.is_none());
    assert!(table.records()[0].last_crawled.is_some());
}

#[test]
fn fixture_full_report() {
    let table = sheet::load_from_config(&fixture_config()).unwrap();
    let report = Report::build(&table, MatchMode::Substring);
    let mut buf = Vec::new();
    report.render(&mut buf, DEFAULT_SAMPLE_LIMIT).unwrap();
    let text = String::from_utf8(buf).unwrap();

    let expected = "\
=== ANALYSIS OF NON-INDEXED PAGES ===

Total non-indexed pages: 5
Last crawled dates range: 2024-04-28 00:00:00 to 2024-05-03 08:30:00

=== ISSUES BREAKDOWN ===

Old URL Structure (/clinic/): 2 pages
  - https://example.com/clinic/foo
  - https://example.com/clinic/baz

Clinic Pages: 2 pages
  - https://example.com/clinics/foo
  - https://example.com/clinics/bar/reviews/

Review Pages: 1 pages
  - https://example.com/clinics/bar/reviews/

Education Pages: 1 pages
  - https://example.com/education/sleep-and-anxiety/

=== POTENTIAL DUPLICATE CONTENT ISSUES ===

Old clinic URLs (/clinic/): 2
New clinic URLs (/clinics/): 2
DUPLICATE FOUND:
  Old: https://example.com/clinic/foo
  New: https://example.com/clinics/foo

";
    assert_eq!(text, expected);
}

#[test]
fn fixture_redirect_map() {
    let table = sheet::load_from_config(&fixture_config()).unwrap();
    let map = redirect_map(&table);
    assert_eq!(map.len(), 2);
    assert!(map[0].target_in_export);
    assert_eq!(
        map[1].target.as_deref(),
        Some("https://example.com/clinics/baz")
    );
    assert!(!map[1].target_in_export);
}

#[test]
fn unknown_sheet_lists_available_sheets() {
    let names = ColumnNames {
        url: "URL",
        crawled: "Last crawled",
    };
    match sheet::load_page_table(&fixture(), "Sheet1", &names) {
        Err(LoadError::SheetNotFound { sheet, available }) => {
            assert_eq!(sheet, "Sheet1");
            assert_eq!(available, vec!["Table".to_string()]);
        }
        other => panic!("expected SheetNotFound, got {other:?}"),
    }
}

#[test]
fn renamed_column_in_config_is_missing() {
    let mut cfg = fixture_config();
    cfg.url_column = "Address".to_string();
    assert!(matches!(
        sheet::load_from_config(&cfg),
        Err(LoadError::MissingColumn(name)) if name == "Address"
    ));
}

#[test]
fn missing_input_fails_before_any_output() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = ReportConfig::default().with_overrides(Some(dir.path().join("gone.xlsx")), None);
    let err = sheet::load_from_config(&cfg).unwrap_err();
    assert!(matches!(err, LoadError::Open { .. }));
    assert!(err.to_string().contains("gone.xlsx"));
}
