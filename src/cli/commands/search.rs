//! Coin search command

use anyhow::Result;
use clap::Args;
use owo_colors::OwoColorize;

use crate::api::PortfolioApi;
use crate::display;
use crate::search::{CoinSearcher, MIN_QUERY_LEN};

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search term (name, symbol or coin id)
    pub query: String,
}

pub async fn execute(api: &dyn PortfolioApi, args: SearchArgs) -> Result<()> {
    if args.query.trim().len() < MIN_QUERY_LEN {
        println!(
            "{}",
            format!("Enter at least {} characters to search", MIN_QUERY_LEN).bright_black()
        );
        return Ok(());
    }

    let spinner = display::spinner("Searching coins...");
    let searcher = CoinSearcher::new();
    let result = searcher.search(api, &args.query).await;
    spinner.finish_and_clear();

    let results = result?.into_results();
    if results.is_empty() {
        println!("No coins matched {:?}", args.query);
        return Ok(());
    }

    println!("\n🔍 Results for {:?}\n", args.query);
    println!("{}", display::coins_table(&results, false));
    println!(
        "\n💡 Add one to your portfolio with 'coinfolio add <coin-id> --quantity <amount>'"
    );
    Ok(())
}
