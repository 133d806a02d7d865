//! Portfolio overview command

use anyhow::Result;
use clap::Args;
use owo_colors::OwoColorize;

use crate::api::PortfolioApi;
use crate::display;
use crate::state::PortfolioStore;

#[derive(Args, Debug)]
pub struct PortfolioArgs {
    /// Skip the summary block and print only the holdings table
    #[arg(long)]
    pub no_summary: bool,
}

pub async fn execute(api: &dyn PortfolioApi, args: PortfolioArgs) -> Result<()> {
    println!("\n📊 Portfolio Overview");

    let spinner = display::spinner("Fetching portfolio...");
    let mut store = PortfolioStore::new();
    let result = store.refresh(api).await;
    spinner.finish_and_clear();
    result?;

    if !args.no_summary {
        display::print_summary(store.summary());
    }

    if store.entries().is_empty() {
        println!("\n{}", "No holdings yet".bright_black().italic());
        println!("💡 Add one with 'coinfolio add <coin-id> --quantity <amount>'");
        return Ok(());
    }

    println!("\n{}", display::portfolio_table(store.entries()));
    Ok(())
}
