//! CLI module for coinfolio
//!
//! Command-line interface for the crypto portfolio tracker API client. Uses
//! clap for argument parsing and a structured command pattern: one module per
//! subcommand, each with its own Args struct and execute function.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

use crate::api::ApiClient;
use crate::config::ApiConfig;
use crate::data_paths::{DataPaths, DEFAULT_DATA_DIR};
use crate::logging::{self, LoggingConfig};

use commands::add::AddArgs;
use commands::analytics::AnalyticsArgs;
use commands::coins::CoinsArgs;
use commands::export::ExportArgs;
use commands::growth::GrowthArgs;
use commands::portfolio::PortfolioArgs;
use commands::remove::RemoveArgs;
use commands::search::SearchArgs;
use commands::status::StatusArgs;
use commands::unwatch::UnwatchArgs;
use commands::watch::WatchArgs;
use commands::watchlist::WatchlistArgs;

#[derive(Parser)]
#[command(name = "coinfolio")]
#[command(version)]
#[command(about = "CLI client for the crypto portfolio tracker API", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API base URL (overrides COINFOLIO_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Data directory path (default: ./data)
    #[arg(long, global = true, default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Browse the market coin list
    Coins(CoinsArgs),

    /// Show the top growth coins
    Growth(GrowthArgs),

    /// Search coins by name or symbol
    Search(SearchArgs),

    /// Show portfolio holdings and summary
    Portfolio(PortfolioArgs),

    /// Add a holding to the portfolio
    Add(AddArgs),

    /// Remove a holding from the portfolio
    Remove(RemoveArgs),

    /// Show the watchlist
    Watchlist(WatchlistArgs),

    /// Add a coin to the watchlist
    Watch(WatchArgs),

    /// Remove a coin from the watchlist
    Unwatch(UnwatchArgs),

    /// Show portfolio or market analytics
    Analytics(AnalyticsArgs),

    /// Export the portfolio to a local file
    Export(ExportArgs),

    /// Check API connectivity
    Status(StatusArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        let data_paths = DataPaths::new(&self.data_dir);
        data_paths.ensure_directories()?;

        logging::init_logging(LoggingConfig::new(data_paths.clone(), self.verbose > 0))?;

        let config = ApiConfig::resolve(self.api_url.as_deref());
        let client = ApiClient::new(&config)?;
        tracing::debug!("Using API base URL {}", client.base_url());

        match self.command {
            Commands::Coins(args) => commands::coins::execute(&client, args).await,
            Commands::Growth(args) => commands::growth::execute(&client, args).await,
            Commands::Search(args) => commands::search::execute(&client, args).await,
            Commands::Portfolio(args) => commands::portfolio::execute(&client, args).await,
            Commands::Add(args) => commands::add::execute(&client, args).await,
            Commands::Remove(args) => commands::remove::execute(&client, args).await,
            Commands::Watchlist(args) => commands::watchlist::execute(&client, args).await,
            Commands::Watch(args) => commands::watch::execute(&client, args).await,
            Commands::Unwatch(args) => commands::unwatch::execute(&client, args).await,
            Commands::Analytics(args) => commands::analytics::execute(&client, args).await,
            Commands::Export(args) => commands::export::execute(&client, data_paths, args).await,
            Commands::Status(args) => commands::status::execute(&client, args).await,
        }
    }
}
