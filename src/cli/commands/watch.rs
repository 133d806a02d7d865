//! Watch-coin command

use anyhow::Result;
use clap::Args;
use owo_colors::OwoColorize;

use crate::api::{ApiError, PortfolioApi};
use crate::display;
use crate::state::WatchlistStore;

#[derive(Args, Debug)]
pub struct WatchArgs {
    /// Coin id, symbol or search term
    pub coin: String,
}

pub async fn execute(api: &dyn PortfolioApi, args: WatchArgs) -> Result<()> {
    let spinner = display::spinner("Looking up coin...");
    let resolved = super::resolve_coin(api, &args.coin).await;
    spinner.finish_and_clear();
    let coin = resolved?;

    let spinner = display::spinner("Adding to watchlist...");
    let mut store = WatchlistStore::new();
    let result = store.watch(api, &coin).await;
    spinner.finish_and_clear();

    match result {
        Ok(()) => {
            println!("✅ Watching {} ({})", coin.name.bright_cyan(), coin.symbol);
            Ok(())
        }
        Err(e) => {
            if let ApiError::Http { status: 409, .. } = e {
                println!("⚠️  {} is already on the watchlist", coin.name);
            } else {
                println!("❌ Failed to watch {}: {}", coin.name, e);
            }
            Err(e.into())
        }
    }
}
