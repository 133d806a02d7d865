//! Typed models for the portfolio tracker API
//!
//! The server is authoritative for every derived figure (current value, P&L,
//! allocation, summary totals). These types mirror the wire shapes; nothing
//! here recomputes money locally.

use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::ApiError;

/// Market coin as listed by `/coins/all`, `/coins/top-growth` and `/coins/search`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    pub id: String,

    pub name: String,

    pub symbol: String,

    #[serde(default)]
    pub current_price: Decimal,

    #[serde(default)]
    pub price_change_percentage_24h: Decimal,

    /// Only populated by the top-growth endpoint
    #[serde(default)]
    pub price_change_percentage_1y: Option<Decimal>,

    #[serde(default)]
    pub market_cap: Decimal,

    #[serde(default)]
    pub market_cap_rank: Option<u32>,
}

/// A holding as returned by `GET /portfolio`, enriched server-side with
/// current market data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioEntry {
    pub id: u64,

    pub coin_id: String,

    pub coin_name: String,

    pub symbol: String,

    pub quantity: Decimal,

    pub purchase_price: Option<Decimal>,

    #[serde(default)]
    pub notes: Option<String>,

    #[serde(default)]
    pub current_price: Decimal,

    #[serde(default)]
    pub current_value: Decimal,

    /// Present only when a purchase price was recorded
    #[serde(default)]
    pub profit_loss: Option<Decimal>,

    #[serde(default)]
    pub profit_loss_percentage: Option<Decimal>,

    #[serde(default)]
    pub change_24h: Decimal,

    #[serde(default, with = "lenient_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

/// A tracked coin without an associated holding
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchlistEntry {
    pub id: u64,

    pub coin_id: String,

    pub coin_name: String,

    pub symbol: String,

    #[serde(default)]
    pub current_price: Decimal,

    #[serde(default)]
    pub change_24h: Decimal,

    #[serde(default)]
    pub market_cap: Decimal,

    #[serde(default, with = "lenient_timestamp")]
    pub added_at: Option<DateTime<Utc>>,
}

/// Server-computed aggregate returned with every portfolio fetch
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PortfolioSummary {
    #[serde(default)]
    pub total_value: Decimal,

    #[serde(default)]
    pub total_profit_loss: Decimal,

    #[serde(default)]
    pub total_profit_loss_percentage: Decimal,

    #[serde(default)]
    pub total_holdings: u32,
}

/// Body for `POST /portfolio`
///
/// Numeric fields travel as strings, exactly as the form submits them; the
/// server owns parsing and persistence.
#[derive(Debug, Clone, Serialize)]
pub struct NewPortfolioEntry {
    pub coin_id: String,
    pub coin_name: String,
    pub symbol: String,
    pub quantity: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Body for `POST /watchlist`
#[derive(Debug, Clone, Serialize)]
pub struct NewWatchlistEntry {
    pub coin_id: String,
    pub coin_name: String,
    pub symbol: String,
}

/// `GET /coins/all` envelope
#[derive(Debug, Clone, Deserialize)]
pub struct CoinsPage {
    pub coins: Vec<Coin>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub per_page: Option<u32>,
}

/// `GET /coins/top-growth` envelope
#[derive(Debug, Clone, Deserialize)]
pub struct TopGrowthResponse {
    pub coins: Vec<Coin>,
}

/// `GET /coins/search` envelope
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<Coin>,
}

/// `GET /portfolio` envelope
#[derive(Debug, Clone, Deserialize)]
pub struct PortfolioResponse {
    pub portfolio: Vec<PortfolioEntry>,
    #[serde(default)]
    pub summary: PortfolioSummary,
}

/// `POST /portfolio` envelope
///
/// The server can answer 2xx with `success: false`; such a response is not a
/// confirmed creation.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEntryResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Option<PortfolioEntry>,
    #[serde(default)]
    pub error: Option<String>,
}

impl CreateEntryResponse {
    /// The created record, or the server's rejection message
    pub fn into_entry(self) -> Result<PortfolioEntry, ApiError> {
        if !self.success {
            let message = self
                .error
                .unwrap_or_else(|| "entry was not created".to_string());
            return Err(ApiError::Rejected(message));
        }
        self.data
            .ok_or_else(|| ApiError::Rejected("created entry missing from response".to_string()))
    }
}

/// `GET /watchlist` envelope
#[derive(Debug, Clone, Deserialize)]
pub struct WatchlistResponse {
    pub watchlist: Vec<WatchlistEntry>,
}

/// `GET /analytics/portfolio` envelope; the analytics shape is owned by the
/// server and rendered generically
#[derive(Debug, Clone, Deserialize)]
pub struct PortfolioAnalyticsResponse {
    pub analytics: serde_json::Value,
}

/// `GET /analytics/market` envelope
#[derive(Debug, Clone, Deserialize)]
pub struct MarketAnalyticsResponse {
    pub market_analytics: serde_json::Value,
}

/// `GET /export/portfolio` envelope
///
/// `data` is a JSON array for `format=json` and a pre-rendered CSV string for
/// `format=csv`.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportResponse {
    pub data: serde_json::Value,
    pub filename: String,
}

/// `GET /health` envelope
#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Error payload the server attaches to non-2xx responses
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// The server emits timestamps either as RFC 3339 or as SQLite's
/// `YYYY-MM-DD HH:MM:SS`; accept both and treat anything else as absent.
mod lenient_timestamp {
    use super::*;
    use serde::{Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(ts) => serializer.serialize_str(&ts.to_rfc3339()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(parse))
    }

    fn parse(raw: &str) -> Option<DateTime<Utc>> {
        if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
            return Some(ts.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
            .ok()
            .map(|naive| naive.and_utc())
    }
}
