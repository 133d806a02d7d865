//! Add-holding command

use anyhow::Result;
use clap::Args;
use owo_colors::OwoColorize;

use crate::api::PortfolioApi;
use crate::display;
use crate::state::{AddEntryForm, PortfolioStore};

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Coin id, symbol or search term (resolved via coin search)
    pub coin: String,

    /// Amount held
    #[arg(long, short = 'q')]
    pub quantity: String,

    /// Price paid per coin (enables P&L figures)
    #[arg(long, short = 'p')]
    pub purchase_price: Option<String>,

    /// Free-form note attached to the holding
    #[arg(long)]
    pub notes: Option<String>,
}

pub async fn execute(api: &dyn PortfolioApi, args: AddArgs) -> Result<()> {
    let spinner = display::spinner("Looking up coin...");
    let resolved = super::resolve_coin(api, &args.coin).await;
    spinner.finish_and_clear();
    let coin = resolved?;

    let form = AddEntryForm {
        coin_id: coin.id.clone(),
        coin_name: coin.name.clone(),
        symbol: coin.symbol.clone(),
        quantity: args.quantity,
        purchase_price: args.purchase_price.unwrap_or_default(),
        notes: args.notes.unwrap_or_default(),
    };

    let spinner = display::spinner("Adding to portfolio...");
    let mut store = PortfolioStore::new();
    let result = store.add(api, &form).await;
    spinner.finish_and_clear();

    match result {
        Ok(entry) => {
            println!(
                "✅ Added {} {} ({}) as entry {}",
                entry.quantity.normalize(),
                entry.coin_name.bright_cyan(),
                entry.symbol,
                entry.id
            );
            println!("💡 See the full portfolio with 'coinfolio portfolio'");
            Ok(())
        }
        Err(e) => {
            println!("❌ Failed to add holding: {}", e);
            Err(e.into())
        }
    }
}
