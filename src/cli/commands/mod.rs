//! CLI Commands module
//!
//! One module per subcommand, each with a dedicated Args struct and an
//! execute function taking the gateway client.

use anyhow::{anyhow, Result};

use crate::api::{Coin, PortfolioApi};
use crate::search::CoinSearcher;

pub mod add;
pub mod analytics;
pub mod coins;
pub mod export;
pub mod growth;
pub mod portfolio;
pub mod remove;
pub mod search;
pub mod status;
pub mod unwatch;
pub mod watch;
pub mod watchlist;

/// Resolve a user-supplied term to one market coin via the search endpoint
///
/// Prefers an exact id match, then an exact symbol match, then the first
/// result the server ranked highest.
pub(crate) async fn resolve_coin(api: &dyn PortfolioApi, term: &str) -> Result<Coin> {
    let searcher = CoinSearcher::new();
    let results = searcher.search(api, term).await?.into_results();

    if results.is_empty() {
        return Err(anyhow!("No coin found for {:?}", term));
    }

    let lowered = term.to_lowercase();
    let picked = results
        .iter()
        .find(|coin| coin.id == lowered)
        .or_else(|| {
            results
                .iter()
                .find(|coin| coin.symbol.eq_ignore_ascii_case(term))
        })
        .unwrap_or(&results[0]);

    Ok(picked.clone())
}
