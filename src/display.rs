//! Table rendering and value formatting for CLI output
//!
//! All money and percentage figures are rendered exactly as the server
//! returned them; formatting here is presentation only.

use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use rust_decimal::Decimal;
use std::time::Duration;

use crate::api::{Coin, PortfolioEntry, PortfolioSummary, WatchlistEntry};

/// Call-scoped loading indicator around a network fetch
pub fn spinner(message: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}

pub fn fmt_usd(value: Decimal) -> String {
    format!("${:.2}", value)
}

/// Coin prices keep more precision than aggregate dollar figures
pub fn fmt_price(value: Decimal) -> String {
    if value.abs() < Decimal::ONE {
        format!("${:.6}", value)
    } else {
        format!("${:.2}", value)
    }
}

pub fn fmt_pct(value: Decimal) -> String {
    if value >= Decimal::ZERO {
        format!("+{:.2}%", value)
    } else {
        format!("{:.2}%", value)
    }
}

pub fn fmt_signed_usd(value: Decimal) -> String {
    if value >= Decimal::ZERO {
        format!("+${:.2}", value)
    } else {
        format!("-${:.2}", value.abs())
    }
}

fn colored_pct(value: Decimal) -> String {
    let rendered = fmt_pct(value);
    if value >= Decimal::ZERO {
        rendered.green().to_string()
    } else {
        rendered.red().to_string()
    }
}

fn colored_signed_usd(value: Decimal) -> String {
    let rendered = fmt_signed_usd(value);
    if value >= Decimal::ZERO {
        rendered.green().to_string()
    } else {
        rendered.red().to_string()
    }
}

fn base_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

/// Market listing table; `show_1y` adds the 1y column for top-growth output
pub fn coins_table(coins: &[Coin], show_1y: bool) -> Table {
    let mut header = vec!["Rank", "Name", "Symbol", "Price", "24h"];
    if show_1y {
        header.push("1y");
    }
    header.push("Market Cap");

    let mut table = base_table(header);
    for coin in coins {
        let rank = coin
            .market_cap_rank
            .map(|rank| format!("#{}", rank))
            .unwrap_or_else(|| "-".to_string());

        let mut row = vec![
            rank,
            coin.name.clone(),
            coin.symbol.clone(),
            fmt_price(coin.current_price),
            colored_pct(coin.price_change_percentage_24h),
        ];
        if show_1y {
            row.push(
                coin.price_change_percentage_1y
                    .map(colored_pct)
                    .unwrap_or_else(|| "N/A".to_string()),
            );
        }
        row.push(fmt_usd(coin.market_cap));
        table.add_row(row);
    }
    table
}

pub fn portfolio_table(entries: &[PortfolioEntry]) -> Table {
    let mut table = base_table(vec![
        "ID", "Coin", "Symbol", "Quantity", "Buy Price", "Price", "Value", "P&L", "P&L %", "24h",
    ]);

    for entry in entries {
        table.add_row(vec![
            entry.id.to_string(),
            entry.coin_name.clone(),
            entry.symbol.clone(),
            format!("{}", entry.quantity.normalize()),
            entry
                .purchase_price
                .map(fmt_price)
                .unwrap_or_else(|| "N/A".to_string()),
            fmt_price(entry.current_price),
            fmt_usd(entry.current_value),
            entry
                .profit_loss
                .map(colored_signed_usd)
                .unwrap_or_else(|| "N/A".to_string()),
            entry
                .profit_loss_percentage
                .map(colored_pct)
                .unwrap_or_else(|| "N/A".to_string()),
            colored_pct(entry.change_24h),
        ]);
    }
    table
}

pub fn watchlist_table(entries: &[WatchlistEntry]) -> Table {
    let mut table = base_table(vec![
        "ID",
        "Coin",
        "Symbol",
        "Price",
        "24h",
        "Market Cap",
        "Added",
    ]);

    for entry in entries {
        table.add_row(vec![
            entry.id.to_string(),
            entry.coin_name.clone(),
            entry.symbol.clone(),
            fmt_price(entry.current_price),
            colored_pct(entry.change_24h),
            fmt_usd(entry.market_cap),
            entry
                .added_at
                .map(|ts| ts.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "N/A".to_string()),
        ]);
    }
    table
}

/// Summary block printed above the holdings table; all figures come from the
/// server's summary object
pub fn print_summary(summary: &PortfolioSummary) {
    println!("\n{}", "PORTFOLIO SUMMARY".bright_yellow());
    println!("{}", "─".repeat(50).bright_black());
    println!(
        "💰 Total Value: {}",
        fmt_usd(summary.total_value).bright_green()
    );
    println!(
        "📈 Total P&L: {} ({})",
        colored_signed_usd(summary.total_profit_loss),
        colored_pct(summary.total_profit_loss_percentage)
    );
    println!("📦 Holdings: {}", summary.total_holdings);
}

/// Generic renderer for server-shaped analytics objects
pub fn analytics_table(payload: &serde_json::Value) -> Table {
    let mut table = base_table(vec!["Metric", "Value"]);

    match payload.as_object() {
        Some(fields) => {
            for (key, value) in fields {
                table.add_row(vec![key.clone(), value_cell(value)]);
            }
        }
        None => {
            table.add_row(vec!["payload".to_string(), value_cell(payload)]);
        }
    }
    table
}

fn value_cell(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(text) => text.clone(),
        serde_json::Value::Null => "N/A".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(raw: &str) -> Decimal {
        raw.parse().unwrap()
    }

    #[test]
    fn test_fmt_pct_signs() {
        assert_eq!(fmt_pct(dec("2.1")), "+2.10%");
        assert_eq!(fmt_pct(dec("-1.346")), "-1.35%");
        assert_eq!(fmt_pct(dec("0")), "+0.00%");
    }

    #[test]
    fn test_fmt_signed_usd() {
        assert_eq!(fmt_signed_usd(dec("7500")), "+$7500.00");
        assert_eq!(fmt_signed_usd(dec("-12.5")), "-$12.50");
    }

    #[test]
    fn test_fmt_price_precision() {
        assert_eq!(fmt_price(dec("45000")), "$45000.00");
        assert_eq!(fmt_price(dec("0.00001234")), "$0.000012");
    }

    #[test]
    fn test_analytics_table_rows_match_payload() {
        let payload = serde_json::json!({
            "total_value": 22500.0,
            "best_performer": {"id": "bitcoin"},
            "period": "1y"
        });

        let table = analytics_table(&payload);
        assert_eq!(table.row_iter().count(), 3);
    }
}
