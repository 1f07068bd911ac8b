//! Tests for the global --input / --sheet overrides.

use super::parse;
use crate::cli::CliCommand;
use std::path::Path;

#[test]
fn cli_parse_without_overrides() {
    let cli = parse(&["idxreport", "report"]);
    assert!(cli.input.is_none());
    assert!(cli.sheet.is_none());
}

#[test]
fn cli_parse_overrides_before_command() {
    let cli = parse(&[
        "idxreport",
        "--input",
        "/tmp/export.xlsx",
        "--sheet",
        "Pages",
        "duplicates",
    ]);
    assert_eq!(cli.input.as_deref(), Some(Path::new("/tmp/export.xlsx")));
    assert_eq!(cli.sheet.as_deref(), Some("Pages"));
    assert!(matches!(
        cli.command,
        Some(CliCommand::Duplicates { exact: false })
    ));
}

#[test]
fn cli_parse_overrides_after_command() {
    let cli = parse(&["idxreport", "redirects", "--input", "export.ods"]);
    assert_eq!(cli.input.as_deref(), Some(Path::new("export.ods")));
    assert!(matches!(cli.command, Some(CliCommand::Redirects)));
}

#[test]
fn cli_parse_overrides_without_command() {
    let cli = parse(&["idxreport", "--sheet", "Table"]);
    assert_eq!(cli.sheet.as_deref(), Some("Table"));
    assert!(cli.command.is_none());
}
