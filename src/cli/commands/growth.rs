//! Top growth coins command

use anyhow::Result;
use clap::Args;
use owo_colors::OwoColorize;

use crate::api::PortfolioApi;
use crate::display;

#[derive(Args, Debug)]
pub struct GrowthArgs {
    /// Maximum number of coins to display
    #[arg(long, short = 'n', default_value = "10")]
    pub limit: u32,
}

pub async fn execute(api: &dyn PortfolioApi, args: GrowthArgs) -> Result<()> {
    let spinner = display::spinner("Fetching top growth coins...");
    let result = api.top_growth(args.limit).await;
    spinner.finish_and_clear();
    let coins = result?;

    if coins.is_empty() {
        println!("{}", "No growth data available".bright_black());
        return Ok(());
    }

    println!("\n📈 Top Growth Coins\n");
    println!("{}", display::coins_table(&coins, true));
    Ok(())
}
