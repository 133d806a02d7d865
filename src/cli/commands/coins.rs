//! Market listing command

use anyhow::Result;
use clap::Args;
use owo_colors::OwoColorize;

use crate::api::PortfolioApi;
use crate::display;
use crate::state::MarketStore;

#[derive(Args, Debug)]
pub struct CoinsArgs {
    /// Optional server-side filter term
    pub query: Option<String>,

    /// Page number
    #[arg(long, short = 'p', default_value = "1")]
    pub page: u32,

    /// Coins per page (server caps at 100)
    #[arg(long, default_value = "50")]
    pub per_page: u32,
}

pub async fn execute(api: &dyn PortfolioApi, args: CoinsArgs) -> Result<()> {
    let spinner = display::spinner("Fetching market coins...");

    let mut store = MarketStore::new();
    let result = store
        .load_page(api, args.page, args.per_page, args.query.as_deref())
        .await;
    spinner.finish_and_clear();
    result?;

    if store.coins().is_empty() {
        println!("{}", "No coins returned for this page".bright_black());
        return Ok(());
    }

    println!("\n🪙 Market Coins\n");
    println!("{}", display::coins_table(store.coins(), false));

    match store.total() {
        Some(total) => println!(
            "\nPage {} ({} per page) | {} of {} coins",
            store.page(),
            store.per_page(),
            store.coins().len(),
            total
        ),
        None => println!(
            "\nPage {} ({} per page) | {} coins",
            store.page(),
            store.per_page(),
            store.coins().len()
        ),
    }
    Ok(())
}
