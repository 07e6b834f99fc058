//! Model A — age based pricing.
//!
//! The driver's age selects one of five bands; each band fixes a base price
//! range and an age factor. The quote is `base × age_factor × variation`.
#![warn(missing_docs)]
pub mod band;

use chrono::NaiveDate;
use log::debug;
use quote_common::calendar::{completed_years, round_cents};
use quote_common::model::{draw_base_price, draw_variation};
use quote_common::{PriceQuote, PricingModel, QuoteRequest};
use rand::Rng;
use serde::{Deserialize, Serialize};

pub use band::AgeBand;

/// Fixed identifier reported by Model A.
pub const MODEL_NAME: &str = "Model A - Age Based Pricing";

/// Factors behind a Model A price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breakdown {
    /// Base price drawn from the band range, rounded for display.
    pub base_price: f64,
    /// Band multiplier.
    pub age_factor: f64,
    /// Market-noise multiplier, rounded for display.
    pub variation_factor: f64,
}

/// Request context echoed with a Model A price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Driver age in whole years.
    pub driver_age: i32,
    /// `"<brand> <model>"`.
    pub car: String,
    /// Postal code as supplied.
    pub postal_code: String,
}

/// Quote produced by Model A.
pub type Quote = PriceQuote<Breakdown, Metadata>;

/// Age based pricing model.
#[derive(Debug, Clone, Default)]
pub struct ModelA;

impl ModelA {
    /// Create a new instance of ModelA
    pub fn new() -> Self {
        ModelA
    }
}

impl PricingModel for ModelA {
    type Breakdown = Breakdown;
    type Metadata = Metadata;

    fn name(&self) -> &str {
        MODEL_NAME
    }

    /// Price `request` by driver age.
    ///
    /// Age in whole years as of `today` selects an [`AgeBand`]; the base price is
    /// drawn from the band range, then the variation.
    ///
    /// - request: driver and car attributes; `birthdate` drives the band.
    /// - today: evaluation date for the age.
    /// - rng: random source for base price and variation.
    /// - Returns: `base × age_factor × variation`, rounded to cents, with breakdown.
    fn calculate_price_at<R: Rng + ?Sized>(
        &self,
        request: &QuoteRequest,
        today: NaiveDate,
        rng: &mut R,
    ) -> Quote {
        let age = completed_years(request.birthdate, today);
        let band = AgeBand::from_age(age);
        debug!("{}: driver age {} -> band {}", MODEL_NAME, age, band);

        let base_price = draw_base_price(rng, band.base_price_range());
        let age_factor = band.factor();
        let variation = draw_variation(rng);

        Quote::new(
            MODEL_NAME,
            base_price * age_factor * variation,
            Breakdown {
                base_price: round_cents(base_price),
                age_factor,
                variation_factor: round_cents(variation),
            },
            Metadata {
                driver_age: age,
                car: request.car(),
                postal_code: request.postal_code.clone(),
            },
        )
    }
}
