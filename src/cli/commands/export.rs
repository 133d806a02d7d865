//! Portfolio export command

use anyhow::Result;
use clap::{Args, ValueEnum};
use std::path::PathBuf;

use crate::api::{ExportFormat, PortfolioApi};
use crate::data_paths::DataPaths;
use crate::display;
use crate::export::write_export;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Format {
    Json,
    Csv,
}

impl From<Format> for ExportFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Json => ExportFormat::Json,
            Format::Csv => ExportFormat::Csv,
        }
    }
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Export format
    #[arg(long, short = 'f', value_enum, default_value = "json")]
    pub format: Format,

    /// Output directory (default: <data-dir>/exports)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

pub async fn execute(api: &dyn PortfolioApi, data_paths: DataPaths, args: ExportArgs) -> Result<()> {
    let spinner = display::spinner("Exporting portfolio...");
    let result = api.export_portfolio(args.format.into()).await;
    spinner.finish_and_clear();
    let response = result?;

    let dir = args.output.unwrap_or_else(|| data_paths.exports());
    let path = write_export(&response, &dir)?;

    println!("✅ Portfolio exported to {}", path.display());
    Ok(())
}
