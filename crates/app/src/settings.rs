//! Handles settings for the application.
//!
//! Settings are layered: an optional TOML file (`config/costing.toml` unless
//! `--config` says otherwise), then `COSTING__*` environment variables, then
//! command-line flags.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::Result;

const DEFAULT_CONFIG_PATH: &str = "config/costing";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Json,
    Csv,
}

impl ReportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ReportFormat::Json => "json",
            ReportFormat::Csv => "csv",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct App {
    pub level: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Report {
    pub format: ReportFormat,
    /// Decimal places monetary values and rates are rounded to.
    pub decimals: u32,
    pub output_dir: Option<PathBuf>,
    pub include_notices: bool,
}

impl Default for Report {
    fn default() -> Self {
        Self {
            format: ReportFormat::Json,
            decimals: 2,
            output_dir: None,
            include_notices: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FinancialYear {
    /// Month (1-12) financial years start in; used for documents that do not
    /// name their year.
    pub start_month: u32,
}

impl Default for FinancialYear {
    fn default() -> Self {
        Self { start_month: 8 }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub app: App,
    pub report: Report,
    pub financial_year: FinancialYear,
}

#[derive(Debug, Parser)]
#[command(name = "costing")]
#[command(about = "Cost allocation and charge-out rates for facility cost centers")]
pub struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    pub config: Option<String>,
    /// Write one report per financial year into this directory instead of stdout.
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
    /// Report format.
    #[arg(long, value_enum)]
    pub format: Option<ReportFormat>,
    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "COSTING_LOG")]
    pub log_level: Option<String>,
    /// Financial-year input documents (JSON).
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,
}

impl Settings {
    /// Build settings from the config file and environment, then apply CLI
    /// overrides.
    pub fn new(args: &Args) -> Result<Self> {
        let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
        let mut settings: Settings = Config::builder()
            .add_source(File::with_name(config_path).required(args.config.is_some()))
            .add_source(Environment::with_prefix("COSTING").separator("__"))
            .build()?
            .try_deserialize()?;

        if let Some(output_dir) = &args.output_dir {
            settings.report.output_dir = Some(output_dir.clone());
        }
        if let Some(format) = args.format {
            settings.report.format = format;
        }
        if let Some(level) = &args.log_level {
            settings.app.level = level.clone();
        }

        Ok(settings)
    }
}
