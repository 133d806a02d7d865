//! API connectivity check

use anyhow::Result;
use clap::Args;
use owo_colors::OwoColorize;

use crate::api::PortfolioApi;
use crate::display;

#[derive(Args, Debug)]
pub struct StatusArgs {}

pub async fn execute(api: &dyn PortfolioApi, _args: StatusArgs) -> Result<()> {
    let spinner = display::spinner("Checking API...");
    let result = api.health().await;
    spinner.finish_and_clear();

    match result {
        Ok(health) => {
            println!("✅ API status: {}", health.status.bright_green());
            if let Some(timestamp) = health.timestamp {
                println!("🕒 Server time: {}", timestamp);
            }
            Ok(())
        }
        Err(e) => {
            println!("❌ API unreachable: {}", e);
            println!("💡 Check the base URL (--api-url or COINFOLIO_API_URL)");
            Err(e.into())
        }
    }
}
