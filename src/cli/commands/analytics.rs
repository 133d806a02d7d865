//! Analytics command

use anyhow::Result;
use clap::Args;

use crate::api::PortfolioApi;
use crate::display;

#[derive(Args, Debug)]
pub struct AnalyticsArgs {
    /// Show market-wide analytics instead of portfolio analytics
    #[arg(long, short = 'm')]
    pub market: bool,
}

pub async fn execute(api: &dyn PortfolioApi, args: AnalyticsArgs) -> Result<()> {
    let spinner = display::spinner("Fetching analytics...");
    let result = if args.market {
        api.market_analytics().await
    } else {
        api.portfolio_analytics().await
    };
    spinner.finish_and_clear();
    let payload = result?;

    if args.market {
        println!("\n🌐 Market Analytics\n");
    } else {
        println!("\n📊 Portfolio Analytics\n");
    }
    println!("{}", display::analytics_table(&payload));
    Ok(())
}
