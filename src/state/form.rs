//! Add-holding form validation
//!
//! Validation runs entirely client-side and fails before any network call is
//! made. Numeric fields stay strings on the wire; the server owns parsing.

use rust_decimal::Decimal;

use crate::api::{ApiError, NewPortfolioEntry};

/// User input for adding a portfolio entry
#[derive(Debug, Clone, Default)]
pub struct AddEntryForm {
    pub coin_id: String,
    pub coin_name: String,
    pub symbol: String,
    pub quantity: String,
    pub purchase_price: String,
    pub notes: String,
}

impl AddEntryForm {
    /// Validate the form and produce the POST body
    pub fn validate(&self) -> Result<NewPortfolioEntry, ApiError> {
        for (field, value) in [
            ("coin_id", &self.coin_id),
            ("coin_name", &self.coin_name),
            ("symbol", &self.symbol),
            ("quantity", &self.quantity),
        ] {
            if value.trim().is_empty() {
                return Err(ApiError::Validation(format!(
                    "Missing required field: {}",
                    field
                )));
            }
        }

        let quantity: Decimal = self
            .quantity
            .trim()
            .parse()
            .map_err(|_| ApiError::Validation("Quantity must be a number".to_string()))?;
        if quantity <= Decimal::ZERO {
            return Err(ApiError::Validation(
                "Quantity must be a positive number".to_string(),
            ));
        }

        let purchase_price = match self.purchase_price.trim() {
            "" => None,
            raw => {
                let price: Decimal = raw.parse().map_err(|_| {
                    ApiError::Validation("Purchase price must be a number".to_string())
                })?;
                if price < Decimal::ZERO {
                    return Err(ApiError::Validation(
                        "Purchase price cannot be negative".to_string(),
                    ));
                }
                Some(raw.to_string())
            }
        };

        let notes = match self.notes.trim() {
            "" => None,
            raw => Some(raw.to_string()),
        };

        Ok(NewPortfolioEntry {
            coin_id: self.coin_id.trim().to_string(),
            coin_name: self.coin_name.trim().to_string(),
            symbol: self.symbol.trim().to_string(),
            quantity: self.quantity.trim().to_string(),
            purchase_price,
            notes,
        })
    }
}
