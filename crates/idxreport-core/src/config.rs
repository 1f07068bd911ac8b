use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Location of the export the report was first written against.
pub const DEFAULT_INPUT_PATH: &str = "/home/ubuntu/upload/indexedpages.xlsx";

/// Settings loaded from `~/.config/idxreport/config.toml`.
///
/// Only where the data lives and how much of it is echoed are configurable;
/// the URL categories are fixed in [`crate::classify`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Spreadsheet to analyze (xlsx, xls, xlsb or ods).
    pub input_path: PathBuf,
    /// Sheet holding the export.
    pub sheet: String,
    /// Header of the column with page URLs.
    pub url_column: String,
    /// Header of the column with last crawl dates.
    pub crawled_column: String,
    /// Example URLs printed per category before the "... and N more" line.
    pub sample_limit: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            sheet: "Table".to_string(),
            url_column: "URL".to_string(),
            crawled_column: "Last crawled".to_string(),
            sample_limit: 5,
        }
    }
}

impl ReportConfig {
    /// Applies command-line overrides on top of the file values.
    pub fn with_overrides(mut self, input: Option<PathBuf>, sheet: Option<String>) -> Self {
        if let Some(input) = input {
            self.input_path = input;
        }
        if let Some(sheet) = sheet {
            self.sheet = sheet;
        }
        self
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("idxreport")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ReportConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as [`load_or_init`] but against an explicit path (used by tests).
pub fn load_or_init_at(path: &Path) -> Result<ReportConfig> {
    if !path.exists() {
        let default_cfg = ReportConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create config dir {}", parent.display()))?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ReportConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = ReportConfig::default();
        assert_eq!(cfg.input_path, PathBuf::from(DEFAULT_INPUT_PATH));
        assert_eq!(cfg.sheet, "Table");
        assert_eq!(cfg.url_column, "URL");
        assert_eq!(cfg.crawled_column, "Last crawled");
        assert_eq!(cfg.sample_limit, 5);
    }

    #[test]
    fn config_toml_partial_file_keeps_defaults() {
        let toml = r#"
            input_path = "/data/export.xlsx"
            sample_limit = 10
        "#;
        let cfg: ReportConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.input_path, PathBuf::from("/data/export.xlsx"));
        assert_eq!(cfg.sample_limit, 10);
        assert_eq!(cfg.sheet, "Table");
        assert_eq!(cfg.url_column, "URL");
    }

    #[test]
    fn overrides_replace_only_given_values() {
        let cfg = ReportConfig::default().with_overrides(None, Some("Sheet1".into()));
        assert_eq!(cfg.input_path, PathBuf::from(DEFAULT_INPUT_PATH));
        assert_eq!(cfg.sheet, "Sheet1");

        let cfg = ReportConfig::default().with_overrides(Some("/tmp/x.ods".into()), None);
        assert_eq!(cfg.input_path, PathBuf::from("/tmp/x.ods"));
        assert_eq!(cfg.sheet, "Table");
    }

    #[test]
    fn load_or_init_writes_default_then_reads_it_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let first = load_or_init_at(&path).unwrap();
        assert!(path.exists());
        assert_eq!(first, ReportConfig::default());

        fs::write(&path, "sheet = \"Export\"\n").unwrap();
        let second = load_or_init_at(&path).unwrap();
        assert_eq!(second.sheet, "Export");
        assert_eq!(second.crawled_column, "Last crawled");
    }

    #[test]
    fn load_or_init_rejects_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "sample_limit = \"many\"\n").unwrap();
        assert!(load_or_init_at(&path).is_err());
    }
}
