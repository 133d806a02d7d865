//! HTTP gateway client for the portfolio tracker API
//!
//! The client is a thin request/response shim: it injects JSON headers,
//! normalizes non-2xx responses into [`ApiError::Http`] and hands parsed
//! bodies back verbatim. Callers trust the server's shape; no figure is
//! recomputed on this side of the wire.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::config::ApiConfig;

pub mod error;
pub mod types;

pub use error::ApiError;
pub use types::*;

/// Export formats understood by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }
}

/// Operations the client performs against the portfolio API
///
/// The trait is the seam between view state and the network: commands and
/// stores talk to `dyn PortfolioApi`, so tests can swap in an in-memory
/// gateway.
#[async_trait]
pub trait PortfolioApi: Send + Sync {
    /// `GET /coins/all`: paginated market listing, optional server-side filter
    async fn list_coins(
        &self,
        page: u32,
        per_page: u32,
        search: Option<&str>,
    ) -> Result<CoinsPage, ApiError>;

    /// `GET /coins/top-growth`: includes 1y change figures
    async fn top_growth(&self, limit: u32) -> Result<Vec<Coin>, ApiError>;

    /// `GET /coins/search`: autocomplete lookup
    async fn search_coins(&self, query: &str, limit: u32) -> Result<Vec<Coin>, ApiError>;

    /// `GET /portfolio`: holdings plus server-computed summary
    async fn fetch_portfolio(&self) -> Result<PortfolioResponse, ApiError>;

    /// `POST /portfolio`: returns the created record; a body with
    /// `success: false` is an error
    async fn create_entry(&self, entry: &NewPortfolioEntry) -> Result<PortfolioEntry, ApiError>;

    /// `DELETE /portfolio/{id}`
    async fn delete_entry(&self, id: u64) -> Result<(), ApiError>;

    /// `GET /watchlist`
    async fn fetch_watchlist(&self) -> Result<Vec<WatchlistEntry>, ApiError>;

    /// `POST /watchlist`: server answers 409 for duplicates
    async fn add_watch(&self, entry: &NewWatchlistEntry) -> Result<(), ApiError>;

    /// `DELETE /watchlist/{id}`
    async fn remove_watch(&self, id: u64) -> Result<(), ApiError>;

    /// `GET /analytics/portfolio`
    async fn portfolio_analytics(&self) -> Result<serde_json::Value, ApiError>;

    /// `GET /analytics/market`
    async fn market_analytics(&self) -> Result<serde_json::Value, ApiError>;

    /// `GET /export/portfolio`
    async fn export_portfolio(&self, format: ExportFormat) -> Result<ExportResponse, ApiError>;

    /// `GET /health`
    async fn health(&self) -> Result<HealthResponse, ApiError>;
}

/// reqwest-backed gateway client
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        debug!("GET {}", url);

        let response = self.client.get(&url).query(query).send().await?;
        Self::decode(response).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        debug!("POST {}", url);

        let response = self.client.post(&url).json(body).send().await?;
        Self::decode(response).await
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let url = self.url(path);
        debug!("DELETE {}", url);

        let response = self.client.delete(&url).send().await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::http_error(response).await)
        }
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        if !response.status().is_success() {
            return Err(Self::http_error(response).await);
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Pull the server's `{"error": ...}` message out of a failed response,
    /// falling back to the raw body text
    async fn http_error(response: Response) -> ApiError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();

        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|payload| payload.error)
            .unwrap_or_else(|_| {
                if body.is_empty() {
                    "no error details".to_string()
                } else {
                    body
                }
            });

        debug!("API error - status: {}, message: {}", status, message);
        ApiError::Http { status, message }
    }
}

#[async_trait]
impl PortfolioApi for ApiClient {
    async fn list_coins(
        &self,
        page: u32,
        per_page: u32,
        search: Option<&str>,
    ) -> Result<CoinsPage, ApiError> {
        let mut query = vec![
            ("page", page.to_string()),
            ("per_page", per_page.to_string()),
        ];
        if let Some(term) = search {
            query.push(("search", term.to_string()));
        }
        self.get_json("/coins/all", &query).await
    }

    async fn top_growth(&self, limit: u32) -> Result<Vec<Coin>, ApiError> {
        let response: TopGrowthResponse = self
            .get_json("/coins/top-growth", &[("limit", limit.to_string())])
            .await?;
        Ok(response.coins)
    }

    async fn search_coins(&self, query: &str, limit: u32) -> Result<Vec<Coin>, ApiError> {
        let response: SearchResponse = self
            .get_json(
                "/coins/search",
                &[("q", query.to_string()), ("limit", limit.to_string())],
            )
            .await?;
        Ok(response.results)
    }

    async fn fetch_portfolio(&self) -> Result<PortfolioResponse, ApiError> {
        self.get_json("/portfolio", &[]).await
    }

    async fn create_entry(&self, entry: &NewPortfolioEntry) -> Result<PortfolioEntry, ApiError> {
        let response: CreateEntryResponse = self.post_json("/portfolio", entry).await?;
        response.into_entry()
    }

    async fn delete_entry(&self, id: u64) -> Result<(), ApiError> {
        self.delete(&format!("/portfolio/{}", id)).await
    }

    async fn fetch_watchlist(&self) -> Result<Vec<WatchlistEntry>, ApiError> {
        let response: WatchlistResponse = self.get_json("/watchlist", &[]).await?;
        Ok(response.watchlist)
    }

    async fn add_watch(&self, entry: &NewWatchlistEntry) -> Result<(), ApiError> {
        let _: serde_json::Value = self.post_json("/watchlist", entry).await?;
        Ok(())
    }

    async fn remove_watch(&self, id: u64) -> Result<(), ApiError> {
        self.delete(&format!("/watchlist/{}", id)).await
    }

    async fn portfolio_analytics(&self) -> Result<serde_json::Value, ApiError> {
        let response: PortfolioAnalyticsResponse =
            self.get_json("/analytics/portfolio", &[]).await?;
        Ok(response.analytics)
    }

    async fn market_analytics(&self) -> Result<serde_json::Value, ApiError> {
        let response: MarketAnalyticsResponse = self.get_json("/analytics/market", &[]).await?;
        Ok(response.market_analytics)
    }

    async fn export_portfolio(&self, format: ExportFormat) -> Result<ExportResponse, ApiError> {
        self.get_json(
            "/export/portfolio",
            &[("format", format.as_str().to_string())],
        )
        .await
    }

    async fn health(&self) -> Result<HealthResponse, ApiError> {
        self.get_json("/health", &[]).await
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory gateway used by store and search tests

    use super::*;
    use rust_decimal::Decimal;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    pub(crate) struct MockApi {
        pub portfolio: Mutex<Vec<PortfolioEntry>>,
        pub watchlist: Mutex<Vec<WatchlistEntry>>,
        pub coins: Vec<Coin>,
        /// Per-query artificial latency, for response-ordering tests
        pub search_delays: HashMap<String, Duration>,
        pub fail_deletes: bool,
        /// Answer creations with `success: false` bodies
        pub reject_creates: bool,
        pub fail_watchlist_fetches: bool,
        requests: AtomicUsize,
        next_id: AtomicU64,
    }

    impl MockApi {
        pub fn new() -> Self {
            Self {
                portfolio: Mutex::new(Vec::new()),
                watchlist: Mutex::new(Vec::new()),
                coins: Vec::new(),
                search_delays: HashMap::new(),
                fail_deletes: false,
                reject_creates: false,
                fail_watchlist_fetches: false,
                requests: AtomicUsize::new(0),
                next_id: AtomicU64::new(1),
            }
        }

        pub fn with_coins(coins: Vec<Coin>) -> Self {
            Self {
                coins,
                ..Self::new()
            }
        }

        /// Total HTTP-equivalent requests the mock has served
        pub fn request_count(&self) -> usize {
            self.requests.load(Ordering::SeqCst)
        }

        fn record_request(&self) {
            self.requests.fetch_add(1, Ordering::SeqCst);
        }

        pub fn coin(id: &str, name: &str, symbol: &str) -> Coin {
            Coin {
                id: id.to_string(),
                name: name.to_string(),
                symbol: symbol.to_string(),
                current_price: Decimal::ZERO,
                price_change_percentage_24h: Decimal::ZERO,
                price_change_percentage_1y: None,
                market_cap: Decimal::ZERO,
                market_cap_rank: None,
            }
        }
    }

    #[async_trait]
    impl PortfolioApi for MockApi {
        async fn list_coins(
            &self,
            page: u32,
            per_page: u32,
            _search: Option<&str>,
        ) -> Result<CoinsPage, ApiError> {
            self.record_request();
            Ok(CoinsPage {
                coins: self.coins.clone(),
                total: Some(self.coins.len() as u64),
                page: Some(page),
                per_page: Some(per_page),
            })
        }

        async fn top_growth(&self, limit: u32) -> Result<Vec<Coin>, ApiError> {
            self.record_request();
            Ok(self.coins.iter().take(limit as usize).cloned().collect())
        }

        async fn search_coins(&self, query: &str, limit: u32) -> Result<Vec<Coin>, ApiError> {
            self.record_request();
            if let Some(delay) = self.search_delays.get(query) {
                tokio::time::sleep(*delay).await;
            }

            let needle = query.to_lowercase();
            Ok(self
                .coins
                .iter()
                .filter(|coin| {
                    coin.id.to_lowercase().contains(&needle)
                        || coin.name.to_lowercase().contains(&needle)
                        || coin.symbol.to_lowercase().contains(&needle)
                })
                .take(limit as usize)
                .cloned()
                .collect())
        }

        async fn fetch_portfolio(&self) -> Result<PortfolioResponse, ApiError> {
            self.record_request();
            let portfolio = self.portfolio.lock().unwrap().clone();
            let summary = PortfolioSummary {
                total_holdings: portfolio.len() as u32,
                ..PortfolioSummary::default()
            };
            Ok(PortfolioResponse { portfolio, summary })
        }

        async fn create_entry(
            &self,
            entry: &NewPortfolioEntry,
        ) -> Result<PortfolioEntry, ApiError> {
            self.record_request();
            if self.reject_creates {
                return CreateEntryResponse {
                    success: false,
                    data: None,
                    error: Some("Failed to add to portfolio".to_string()),
                }
                .into_entry();
            }

            let created = PortfolioEntry {
                id: self.next_id.fetch_add(1, Ordering::SeqCst),
                coin_id: entry.coin_id.clone(),
                coin_name: entry.coin_name.clone(),
                symbol: entry.symbol.clone(),
                quantity: entry.quantity.parse().unwrap_or_default(),
                purchase_price: entry
                    .purchase_price
                    .as_deref()
                    .and_then(|price| price.parse().ok()),
                notes: entry.notes.clone(),
                current_price: Decimal::ZERO,
                current_value: Decimal::ZERO,
                profit_loss: None,
                profit_loss_percentage: None,
                change_24h: Decimal::ZERO,
                created_at: None,
            };
            self.portfolio.lock().unwrap().push(created.clone());
            Ok(created)
        }

        async fn delete_entry(&self, id: u64) -> Result<(), ApiError> {
            self.record_request();
            if self.fail_deletes {
                return Err(ApiError::Http {
                    status: 500,
                    message: "Internal server error".to_string(),
                });
            }

            let mut portfolio = self.portfolio.lock().unwrap();
            let before = portfolio.len();
            portfolio.retain(|entry| entry.id != id);
            if portfolio.len() == before {
                return Err(ApiError::Http {
                    status: 404,
                    message: "Portfolio item not found".to_string(),
                });
            }
            Ok(())
        }

        async fn fetch_watchlist(&self) -> Result<Vec<WatchlistEntry>, ApiError> {
            self.record_request();
            if self.fail_watchlist_fetches {
                return Err(ApiError::Http {
                    status: 500,
                    message: "Internal server error".to_string(),
                });
            }
            Ok(self.watchlist.lock().unwrap().clone())
        }

        async fn add_watch(&self, entry: &NewWatchlistEntry) -> Result<(), ApiError> {
            self.record_request();
            let mut watchlist = self.watchlist.lock().unwrap();
            if watchlist.iter().any(|item| item.coin_id == entry.coin_id) {
                return Err(ApiError::Http {
                    status: 409,
                    message: "Coin already in watchlist".to_string(),
                });
            }
            watchlist.push(WatchlistEntry {
                id: self.next_id.fetch_add(1, Ordering::SeqCst),
                coin_id: entry.coin_id.clone(),
                coin_name: entry.coin_name.clone(),
                symbol: entry.symbol.clone(),
                current_price: Decimal::ZERO,
                change_24h: Decimal::ZERO,
                market_cap: Decimal::ZERO,
                added_at: None,
            });
            Ok(())
        }

        async fn remove_watch(&self, id: u64) -> Result<(), ApiError> {
            self.record_request();
            if self.fail_deletes {
                return Err(ApiError::Http {
                    status: 500,
                    message: "Internal server error".to_string(),
                });
            }

            let mut watchlist = self.watchlist.lock().unwrap();
            let before = watchlist.len();
            watchlist.retain(|entry| entry.id != id);
            if watchlist.len() == before {
                return Err(ApiError::Http {
                    status: 404,
                    message: "Watchlist item not found".to_string(),
                });
            }
            Ok(())
        }

        async fn portfolio_analytics(&self) -> Result<serde_json::Value, ApiError> {
            self.record_request();
            Ok(serde_json::json!({ "total_value": 0 }))
        }

        async fn market_analytics(&self) -> Result<serde_json::Value, ApiError> {
            self.record_request();
            Ok(serde_json::json!({ "total_market_cap": 0 }))
        }

        async fn export_portfolio(&self, format: ExportFormat) -> Result<ExportResponse, ApiError> {
            self.record_request();
            let portfolio = self.portfolio.lock().unwrap().clone();
            match format {
                ExportFormat::Json => Ok(ExportResponse {
                    data: serde_json::to_value(&portfolio)?,
                    filename: "portfolio_export_test.json".to_string(),
                }),
                ExportFormat::Csv => Ok(ExportResponse {
                    data: serde_json::Value::String(
                        "coin_id,coin_name,symbol,quantity\n".to_string(),
                    ),
                    filename: "portfolio_export_test.csv".to_string(),
                }),
            }
        }

        async fn health(&self) -> Result<HealthResponse, ApiError> {
            self.record_request();
            Ok(HealthResponse {
                status: "healthy".to_string(),
                timestamp: None,
            })
        }
    }
}
