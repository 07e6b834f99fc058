//! Model B — experience based pricing.
//!
//! Years since the driving license was issued select a band with its own base
//! price range and experience factor. A location factor derived from the
//! postal code scales the price further:
//! `base × experience_factor × location_factor × variation`.
#![warn(missing_docs)]
pub mod band;
pub mod location;

use chrono::NaiveDate;
use log::debug;
use quote_common::calendar::{completed_years, round_cents};
use quote_common::model::{draw_base_price, draw_variation};
use quote_common::{PriceQuote, PricingModel, QuoteRequest};
use rand::Rng;
use serde::{Deserialize, Serialize};

pub use band::ExperienceBand;
pub use location::location_factor;

/// Fixed identifier reported by Model B.
pub const MODEL_NAME: &str = "Model B - Experience Based Pricing";

/// Factors behind a Model B price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breakdown {
    /// Base price drawn from the band range, rounded for display.
    pub base_price: f64,
    /// Band multiplier.
    pub experience_factor: f64,
    /// Postal code multiplier, rounded for display.
    pub location_factor: f64,
    /// Market-noise multiplier, rounded for display.
    pub variation_factor: f64,
}

/// Request context echoed with a Model B price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Whole years since the license was issued.
    pub driving_experience_years: i32,
    /// `"<brand> <model>"`.
    pub car: String,
    /// Postal code as supplied.
    pub postal_code: String,
}

/// Quote produced by Model B.
pub type Quote = PriceQuote<Breakdown, Metadata>;

/// Experience based pricing model.
#[derive(Debug, Clone, Default)]
pub struct ModelB;

impl ModelB {
    /// Create a new instance of ModelB
    pub fn new() -> Self {
        ModelB
    }
}

impl PricingModel for ModelB {
    type Breakdown = Breakdown;
    type Metadata = Metadata;

    fn name(&self) -> &str {
        MODEL_NAME
    }

    /// Price `request` by driving experience and location.
    ///
    /// Whole years since `driver_license_date` select an [`ExperienceBand`]; the
    /// postal code contributes a deterministic [`location_factor`].
    ///
    /// - request: driver and car attributes; license date and postal code drive the price.
    /// - today: evaluation date for the experience years.
    /// - rng: random source for base price and variation.
    /// - Returns: `base × experience_factor × location_factor × variation`, rounded to cents.
    fn calculate_price_at<R: Rng + ?Sized>(
        &self,
        request: &QuoteRequest,
        today: NaiveDate,
        rng: &mut R,
    ) -> Quote {
        let experience_years = completed_years(request.driver_license_date, today);
        let band = ExperienceBand::from_years(experience_years);

        let base_price = draw_base_price(rng, band.base_price_range());
        let experience_factor = band.factor();
        let location = location_factor(&request.postal_code);
        let variation = draw_variation(rng);
        debug!(
            "{}: experience {} -> band {}, postal code {:?} -> location {:.2}",
            MODEL_NAME, experience_years, band, request.postal_code, location
        );

        Quote::new(
            MODEL_NAME,
            base_price * experience_factor * location * variation,
            Breakdown {
                base_price: round_cents(base_price),
                experience_factor,
                location_factor: round_cents(location),
                variation_factor: round_cents(variation),
            },
            Metadata {
                driving_experience_years: experience_years,
                car: request.car(),
                postal_code: request.postal_code.clone(),
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn request(license: NaiveDate, postal_code: &str) -> QuoteRequest {
        QuoteRequest::new(date(1990, 1, 1), license, "Civic", "Honda", postal_code)
    }

    #[test]
    fn model_name_is_fixed() {
        assert_eq!(ModelB::new().name(), "Model B - Experience Based Pricing");
    }

    #[test]
    fn experience_is_counted_from_license_not_birth() {
        let mut rng = StdRng::seed_from_u64(2);
        let quote = ModelB::new().calculate_price_at(
            &request(date(2022, 1, 2), "1000 AA"),
            date(2024, 1, 1),
            &mut rng,
        );
        assert_eq!(quote.metadata.driving_experience_years, 1);
        assert_eq!(quote.breakdown.experience_factor, 1.6);
    }

    #[test]
    fn price_uses_unrounded_factors() {
        let req = request(date(2010, 1, 1), "3014 NM");
        let mut rng = StdRng::seed_from_u64(17);
        let quote = ModelB::new().calculate_price_at(&req, date(2024, 1, 1), &mut rng);

        let mut replay = StdRng::seed_from_u64(17);
        let base = draw_base_price(&mut replay, ExperienceBand::From10.base_price_range());
        let variation = draw_variation(&mut replay);
        let location = location_factor("3014 NM");

        assert_eq!(quote.price, round_cents(base * 0.85 * location * variation));
        assert_eq!(quote.breakdown.location_factor, round_cents(location));
    }

    #[test]
    fn location_factor_ignores_randomness() {
        let req = request(date(2018, 5, 5), "1011 AB");
        let model = ModelB::new();
        let first = model.calculate_price_at(&req, date(2024, 1, 1), &mut StdRng::seed_from_u64(1));
        let second = model.calculate_price_at(&req, date(2024, 1, 1), &mut StdRng::seed_from_u64(99));
        assert_eq!(first.breakdown.location_factor, second.breakdown.location_factor);
    }
}
