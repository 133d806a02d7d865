//! Per-view state stores
//!
//! Each store owns the in-memory collection backing one view: constructed
//! fresh, populated from the gateway, discarded when the view goes away.
//! Nothing is shared across views and local state only changes after the
//! server confirms a mutation, so a failed call can never corrupt a store.

use tracing::{debug, info, warn};

use crate::api::{
    ApiError, Coin, CoinsPage, NewWatchlistEntry, PortfolioApi, PortfolioEntry, PortfolioSummary,
    WatchlistEntry,
};

pub mod form;

pub use form::AddEntryForm;

/// Holdings plus the server-computed summary for the portfolio view
#[derive(Debug, Default)]
pub struct PortfolioStore {
    entries: Vec<PortfolioEntry>,
    summary: PortfolioSummary,
}

impl PortfolioStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[PortfolioEntry] {
        &self.entries
    }

    pub fn summary(&self) -> &PortfolioSummary {
        &self.summary
    }

    pub fn contains(&self, id: u64) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    /// Replace local state with the server's current portfolio
    pub async fn refresh(&mut self, api: &dyn PortfolioApi) -> Result<(), ApiError> {
        let response = api.fetch_portfolio().await?;
        self.entries = response.portfolio;
        self.summary = response.summary;
        debug!("Portfolio refreshed: {} holdings", self.entries.len());
        Ok(())
    }

    /// Validate the form, submit the creation request and append the
    /// server-returned record
    ///
    /// Validation failures return before any network call. On failure of the
    /// POST itself the store is left untouched.
    pub async fn add(
        &mut self,
        api: &dyn PortfolioApi,
        form: &AddEntryForm,
    ) -> Result<PortfolioEntry, ApiError> {
        let body = form.validate()?;

        let created = api.create_entry(&body).await?;
        info!(
            "Added {} ({}) to portfolio as entry {}",
            created.coin_name, created.symbol, created.id
        );
        self.entries.push(created.clone());
        Ok(created)
    }

    /// Delete a holding, removing it locally only once the server confirms
    pub async fn remove(&mut self, api: &dyn PortfolioApi, id: u64) -> Result<(), ApiError> {
        api.delete_entry(id).await?;
        self.entries.retain(|entry| entry.id != id);
        info!("Removed portfolio entry {}", id);
        Ok(())
    }
}

/// Tracked coins for the watchlist view
#[derive(Debug, Default)]
pub struct WatchlistStore {
    entries: Vec<WatchlistEntry>,
}

impl WatchlistStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[WatchlistEntry] {
        &self.entries
    }

    pub fn contains(&self, id: u64) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    pub async fn refresh(&mut self, api: &dyn PortfolioApi) -> Result<(), ApiError> {
        self.entries = api.fetch_watchlist().await?;
        debug!("Watchlist refreshed: {} entries", self.entries.len());
        Ok(())
    }

    /// Start tracking a coin; the server rejects duplicates with a 409
    pub async fn watch(&mut self, api: &dyn PortfolioApi, coin: &Coin) -> Result<(), ApiError> {
        let body = NewWatchlistEntry {
            coin_id: coin.id.clone(),
            coin_name: coin.name.clone(),
            symbol: coin.symbol.clone(),
        };
        api.add_watch(&body).await?;
        info!("Added {} ({}) to watchlist", coin.name, coin.symbol);

        // The create response carries no record; re-fetch for the enriched
        // row. The watch itself already persisted, so a refresh failure only
        // leaves the local view stale and must not be reported as a failed
        // watch.
        if let Err(e) = self.refresh(api).await {
            warn!("Watchlist refresh after adding {} failed: {}", coin.id, e);
        }
        Ok(())
    }

    /// Stop tracking, removing locally only once the server confirms
    pub async fn unwatch(&mut self, api: &dyn PortfolioApi, id: u64) -> Result<(), ApiError> {
        api.remove_watch(id).await?;
        self.entries.retain(|entry| entry.id != id);
        info!("Removed watchlist entry {}", id);
        Ok(())
    }
}

/// One page of the market listing
#[derive(Debug, Default)]
pub struct MarketStore {
    coins: Vec<Coin>,
    page: u32,
    per_page: u32,
    total: Option<u64>,
}

impl MarketStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn coins(&self) -> &[Coin] {
        &self.coins
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn total(&self) -> Option<u64> {
        self.total
    }

    pub async fn load_page(
        &mut self,
        api: &dyn PortfolioApi,
        page: u32,
        per_page: u32,
        search: Option<&str>,
    ) -> Result<(), ApiError> {
        let CoinsPage {
            coins,
            total,
            page: server_page,
            per_page: server_per_page,
        } = api.list_coins(page, per_page, search).await?;

        self.coins = coins;
        self.page = server_page.unwrap_or(page);
        self.per_page = server_per_page.unwrap_or(per_page);
        self.total = total;
        debug!("Market page {} loaded: {} coins", self.page, self.coins.len());
        Ok(())
    }
}
