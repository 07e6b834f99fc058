//! Quote result model and JSON encoding helpers.
//!
//! A `PriceQuote` is what every model hands back to its caller: the model name,
//! the final price in cents precision, the currency, and two model-specific
//! records, `breakdown` (the factors that produced the price) and `metadata`
//! (attributes derived from or echoed from the request).

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::calendar::round_cents;
use crate::result::Result;

/// Currency a price is quoted in. Every model quotes in euro.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum Currency {
    /// Euro.
    #[default]
    EUR,
}

/// Priced quote for a single request.
///
/// `B` and `M` are the model's breakdown and metadata records; the serialized
/// form carries exactly the keys `model_name`, `price`, `currency`,
/// `breakdown`, `metadata`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote<B, M> {
    /// Fixed identifier of the model that produced the quote.
    pub model_name: String,
    /// Final price rounded to two decimals.
    pub price: f64,
    /// Currency of `price`.
    pub currency: Currency,
    /// Factors that produced the price.
    pub breakdown: B,
    /// Contextual attributes of the request.
    pub metadata: M,
}

impl<B, M> PriceQuote<B, M> {
    /// Builds a quote from the unrounded product of all factors.
    ///
    /// Only the final price is rounded here; callers pass the raw product so that
    /// display rounding of individual factors never leaks into the price.
    pub fn new(model_name: &str, raw_price: f64, breakdown: B, metadata: M) -> Self {
        PriceQuote {
            model_name: model_name.to_string(),
            price: round_cents(raw_price),
            currency: Currency::EUR,
            breakdown,
            metadata,
        }
    }
}

impl<B: Serialize, M: Serialize> PriceQuote<B, M> {
    /// Encode the quote as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Liveness of a model. A model that can be called at all is healthy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum HealthStatus {
    /// The model is ready to price requests.
    Healthy,
}

/// Health check payload, `{"status": "healthy", "model": <model name>}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    /// Current status.
    pub status: HealthStatus,
    /// Model name the status belongs to.
    pub model: String,
}

impl Health {
    /// Healthy status for `model`.
    pub fn healthy(model: &str) -> Self {
        Health {
            status: HealthStatus::Healthy,
            model: model.to_string(),
        }
    }

    /// Encode the health payload as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[derive(Serialize)]
    struct Empty {}

    #[test]
    fn price_is_rounded_and_tagged_eur() {
        let quote = PriceQuote::new("Test", 1234.5678, Empty {}, Empty {});
        assert_eq!(quote.price, 1234.57);
        assert_eq!(quote.currency, Currency::EUR);
        assert_eq!(quote.currency.to_string(), "EUR");
    }

    #[test]
    fn quote_serializes_with_fixed_top_level_keys() {
        let quote = PriceQuote::new("Test", 10.0, Empty {}, Empty {});
        let value: Value = serde_json::from_str(&quote.to_json().unwrap()).unwrap();

        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 5);
        for key in ["model_name", "price", "currency", "breakdown", "metadata"] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
        assert_eq!(value["currency"], json!("EUR"));
    }

    #[test]
    fn health_serializes_lowercase_status() {
        let health = Health::healthy("Model X");
        let value: Value = serde_json::from_str(&health.to_json().unwrap()).unwrap();
        assert_eq!(value, json!({"status": "healthy", "model": "Model X"}));
        assert_eq!(health.status.to_string(), "healthy");
    }
}
