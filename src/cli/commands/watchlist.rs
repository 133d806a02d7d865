//! Watchlist overview command

use anyhow::Result;
use clap::Args;
use owo_colors::OwoColorize;

use crate::api::PortfolioApi;
use crate::display;
use crate::state::WatchlistStore;

#[derive(Args, Debug)]
pub struct WatchlistArgs {}

pub async fn execute(api: &dyn PortfolioApi, _args: WatchlistArgs) -> Result<()> {
    let spinner = display::spinner("Fetching watchlist...");
    let mut store = WatchlistStore::new();
    let result = store.refresh(api).await;
    spinner.finish_and_clear();
    result?;

    if store.entries().is_empty() {
        println!("{}", "Watchlist is empty".bright_black().italic());
        println!("💡 Track a coin with 'coinfolio watch <coin-id>'");
        return Ok(());
    }

    println!("\n👀 Watchlist\n");
    println!("{}", display::watchlist_table(store.entries()));
    Ok(())
}
