//! Coin autocomplete search
//!
//! Two rules from the reference behavior: queries under the length threshold
//! never hit the network, and when requests overlap only the latest one may
//! populate results. Each search takes a monotonically increasing ticket; a
//! response is discarded if a newer ticket was issued while it was in flight.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::api::{ApiError, Coin, PortfolioApi};

/// Queries shorter than this return empty without a network call
pub const MIN_QUERY_LEN: usize = 2;

/// Server-side result cap per query
pub const SEARCH_LIMIT: u32 = 10;

/// Outcome of one search request
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// This was the latest request; its results stand
    Applied(Vec<Coin>),
    /// A newer request was issued while this one was in flight
    Stale,
}

impl SearchOutcome {
    /// Results if this response won, empty otherwise
    pub fn into_results(self) -> Vec<Coin> {
        match self {
            SearchOutcome::Applied(coins) => coins,
            SearchOutcome::Stale => Vec::new(),
        }
    }
}

/// Sequenced autocomplete searcher for one search input
#[derive(Debug, Default)]
pub struct CoinSearcher {
    seq: AtomicU64,
}

impl CoinSearcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one search for the current input value
    ///
    /// A sub-threshold query still takes a ticket so that an in-flight longer
    /// query can no longer apply once the input has shrunk.
    pub async fn search(
        &self,
        api: &dyn PortfolioApi,
        query: &str,
    ) -> Result<SearchOutcome, ApiError> {
        let ticket = self.seq.fetch_add(1, Ordering::SeqCst) + 1;

        let query = query.trim();
        if query.len() < MIN_QUERY_LEN {
            return Ok(SearchOutcome::Applied(Vec::new()));
        }

        let results = api.search_coins(query, SEARCH_LIMIT).await?;

        if self.seq.load(Ordering::SeqCst) != ticket {
            tracing::debug!("Discarding stale search response for {:?}", query);
            return Ok(SearchOutcome::Stale);
        }
        Ok(SearchOutcome::Applied(results))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::MockApi;
    use std::time::Duration;

    fn market() -> Vec<Coin> {
        vec![
            MockApi::coin("bitcoin", "Bitcoin", "BTC"),
            MockApi::coin("ethereum", "Ethereum", "ETH"),
            MockApi::coin("bitcoin-cash", "Bitcoin Cash", "BCH"),
        ]
    }

    #[tokio::test]
    async fn test_short_query_skips_network() {
        let api = MockApi::with_coins(market());
        let searcher = CoinSearcher::new();

        let outcome = searcher.search(&api, "b").await.unwrap();
        assert_eq!(outcome, SearchOutcome::Applied(Vec::new()));
        assert_eq!(api.request_count(), 0);

        let outcome = searcher.search(&api, "").await.unwrap();
        assert!(outcome.into_results().is_empty());
        assert_eq!(api.request_count(), 0);
    }

    #[tokio::test]
    async fn test_search_truncates_and_matches() {
        let api = MockApi::with_coins(market());
        let searcher = CoinSearcher::new();

        let results = searcher.search(&api, "bit").await.unwrap().into_results();
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|coin| coin.id.contains("bitcoin")));
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_earlier_response_is_discarded() {
        let mut api = MockApi::with_coins(market());
        // "bit" resolves after "eth" even though it was issued first
        api.search_delays
            .insert("bit".to_string(), Duration::from_millis(50));
        api.search_delays
            .insert("eth".to_string(), Duration::from_millis(10));

        let searcher = CoinSearcher::new();
        let (first, second) =
            tokio::join!(searcher.search(&api, "bit"), searcher.search(&api, "eth"));

        assert_eq!(first.unwrap(), SearchOutcome::Stale);

        let winning = second.unwrap().into_results();
        assert_eq!(winning.len(), 1);
        assert_eq!(winning[0].id, "ethereum");
    }

    #[tokio::test(start_paused = true)]
    async fn test_shrunk_input_invalidates_inflight_query() {
        let mut api = MockApi::with_coins(market());
        api.search_delays
            .insert("bit".to_string(), Duration::from_millis(50));

        let searcher = CoinSearcher::new();
        let (slow, cleared) = tokio::join!(searcher.search(&api, "bit"), searcher.search(&api, "b"));

        // Backspacing below the threshold cleared the results; the old query
        // must not resurrect them
        assert_eq!(slow.unwrap(), SearchOutcome::Stale);
        assert_eq!(cleared.unwrap(), SearchOutcome::Applied(Vec::new()));
    }
}
