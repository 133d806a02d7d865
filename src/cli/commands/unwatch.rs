//! Unwatch-coin command

use anyhow::Result;
use clap::Args;

use crate::api::PortfolioApi;
use crate::display;
use crate::state::WatchlistStore;

#[derive(Args, Debug)]
pub struct UnwatchArgs {
    /// Watchlist entry id (see 'coinfolio watchlist')
    pub id: u64,
}

pub async fn execute(api: &dyn PortfolioApi, args: UnwatchArgs) -> Result<()> {
    let spinner = display::spinner("Removing from watchlist...");
    let mut store = WatchlistStore::new();

    let result = async {
        store.refresh(api).await?;
        store.unwatch(api, args.id).await
    }
    .await;
    spinner.finish_and_clear();

    match result {
        Ok(()) => {
            println!("✅ Removed watchlist entry {}", args.id);
            Ok(())
        }
        Err(e) => {
            println!("❌ Failed to remove watchlist entry {}: {}", args.id, e);
            Err(e.into())
        }
    }
}
