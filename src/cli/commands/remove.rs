//! Remove-holding command

use anyhow::Result;
use clap::Args;

use crate::api::PortfolioApi;
use crate::display;
use crate::state::PortfolioStore;

#[derive(Args, Debug)]
pub struct RemoveArgs {
    /// Portfolio entry id (see 'coinfolio portfolio')
    pub id: u64,
}

pub async fn execute(api: &dyn PortfolioApi, args: RemoveArgs) -> Result<()> {
    let spinner = display::spinner("Removing holding...");
    let mut store = PortfolioStore::new();

    // Populate local state first so the removal mirrors the view flow:
    // fetch, confirm the delete server-side, then drop the row locally.
    let result = async {
        store.refresh(api).await?;
        store.remove(api, args.id).await
    }
    .await;
    spinner.finish_and_clear();

    match result {
        Ok(()) => {
            println!("✅ Removed portfolio entry {}", args.id);
            Ok(())
        }
        Err(e) => {
            println!("❌ Failed to remove entry {}: {}", args.id, e);
            Err(e.into())
        }
    }
}
