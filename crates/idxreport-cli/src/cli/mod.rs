//! CLI for idxreport.

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use idxreport_core::config;
use idxreport_core::duplicates::MatchMode;
use idxreport_core::sheet;
use std::path::PathBuf;

use commands::{run_categories, run_duplicates, run_redirects, run_report};

/// Top-level CLI for idxreport.
#[derive(Debug, Parser)]
#[command(name = "idxreport")]
#[command(
    about = "Classify a non-indexed pages export and report /clinic/ vs /clinics/ duplicates",
    long_about = None
)]
pub struct Cli {
    /// Spreadsheet export to analyze (overrides `input_path` in config.toml).
    #[arg(long, global = true, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Sheet holding the export (overrides `sheet` in config.toml).
    #[arg(long, global = true, value_name = "NAME")]
    pub sheet: Option<String>,

    /// Defaults to `report` when omitted.
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the full report: summary, issues breakdown and duplicate candidates.
    Report {
        /// Only pair URLs whose rewritten form equals a /clinics/ URL exactly.
        #[arg(long)]
        exact: bool,
    },

    /// Print the issues breakdown only.
    Categories,

    /// Print the duplicate content section only.
    Duplicates {
        /// Only pair URLs whose rewritten form equals a /clinics/ URL exactly.
        #[arg(long)]
        exact: bool,
    },

    /// Show where each /clinic/ URL is redirected under the /clinics/ structure.
    Redirects,
}

fn match_mode(exact: bool) -> MatchMode {
    if exact {
        MatchMode::Exact
    } else {
        MatchMode::Substring
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?.with_overrides(cli.input, cli.sheet);
        tracing::debug!("loaded config: {:?}", cfg);

        let table = sheet::load_from_config(&cfg).context("load non-indexed pages export")?;

        match cli.command.unwrap_or(CliCommand::Report { exact: false }) {
            CliCommand::Report { exact } => run_report(&table, &cfg, match_mode(exact))?,
            CliCommand::Categories => run_categories(&table, &cfg)?,
            CliCommand::Duplicates { exact } => run_duplicates(&table, match_mode(exact))?,
            CliCommand::Redirects => run_redirects(&table)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
