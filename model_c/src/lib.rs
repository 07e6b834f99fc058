//! Model C — brand based pricing.
//!
//! The car brand is classified as luxury, premium or economy; each category
//! has its own base price range and brand factor. A coarse age adjustment is
//! applied on top: `base × brand_factor × age_adjustment × variation`.
#![warn(missing_docs)]
pub mod brand;

use std::collections::HashSet;

use chrono::NaiveDate;
use log::debug;
use quote_common::calendar::{completed_years, round_cents};
use quote_common::model::{draw_base_price, draw_variation};
use quote_common::{PriceQuote, PricingModel, QuoteRequest};
use rand::Rng;
use serde::{Deserialize, Serialize};

pub use brand::{BrandCategory, LUXURY_BRANDS, PREMIUM_BRANDS, age_adjustment};

/// Fixed identifier reported by Model C.
pub const MODEL_NAME: &str = "Model C - Brand Based Pricing";

/// Factors behind a Model C price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breakdown {
    /// Base price drawn from the category range, rounded for display.
    pub base_price: f64,
    /// Resolved brand category.
    pub brand_category: BrandCategory,
    /// Category multiplier.
    pub brand_factor: f64,
    /// Driver age multiplier.
    pub age_adjustment: f64,
    /// Market-noise multiplier, rounded for display.
    pub variation_factor: f64,
}

/// Request context echoed with a Model C price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Driver age in whole years.
    pub driver_age: i32,
    /// Brand as supplied.
    pub car_brand: String,
    /// Model as supplied.
    pub car_model: String,
    /// Postal code as supplied.
    pub postal_code: String,
}

/// Quote produced by Model C.
pub type Quote = PriceQuote<Breakdown, Metadata>;

/// Brand based pricing model.
///
/// Holds the luxury and premium brand sets, lower-cased. Anything outside both
/// sets is economy.
#[derive(Debug, Clone)]
pub struct ModelC {
    luxury_brands: HashSet<String>,
    premium_brands: HashSet<String>,
}

impl Default for ModelC {
    fn default() -> Self {
        Self::with_brands(LUXURY_BRANDS.iter().copied(), PREMIUM_BRANDS.iter().copied())
    }
}

impl ModelC {
    /// Create a new instance of ModelC with the standard brand lists.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a model with custom brand lists. Matching is case-insensitive.
    pub fn with_brands<'a>(
        luxury: impl IntoIterator<Item = &'a str>,
        premium: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        ModelC {
            luxury_brands: luxury.into_iter().map(str::to_lowercase).collect(),
            premium_brands: premium.into_iter().map(str::to_lowercase).collect(),
        }
    }

    /// Classify `brand` into a price category.
    ///
    /// Matching ignores case. A brand listed in both sets is luxury.
    ///
    /// - brand: brand name as supplied by the caller.
    /// - Returns: `Luxury`, `Premium`, or `Economy` for anything unlisted.
    pub fn classify(&self, brand: &str) -> BrandCategory {
        let brand = brand.to_lowercase();
        if self.luxury_brands.contains(&brand) {
            BrandCategory::Luxury
        } else if self.premium_brands.contains(&brand) {
            BrandCategory::Premium
        } else {
            BrandCategory::Economy
        }
    }
}

impl PricingModel for ModelC {
    type Breakdown = Breakdown;
    type Metadata = Metadata;

    fn name(&self) -> &str {
        MODEL_NAME
    }

    /// Price `request` by car brand, adjusted for driver age.
    ///
    /// - request: driver and car attributes; `car_brand` picks the [`BrandCategory`],
    ///   `birthdate` the [`age_adjustment`].
    /// - today: evaluation date for the age.
    /// - rng: random source for base price and variation.
    /// - Returns: `base × brand_factor × age_adjustment × variation`, rounded to cents.
    fn calculate_price_at<R: Rng + ?Sized>(
        &self,
        request: &QuoteRequest,
        today: NaiveDate,
        rng: &mut R,
    ) -> Quote {
        let category = self.classify(&request.car_brand);
        let base_price = draw_base_price(rng, category.base_price_range());
        let brand_factor = category.factor();

        let age = completed_years(request.birthdate, today);
        let age_adjustment = age_adjustment(age);
        debug!(
            "{}: brand {:?} -> {}, driver age {} -> adjustment {}",
            MODEL_NAME, request.car_brand, category, age, age_adjustment
        );

        let variation = draw_variation(rng);

        Quote::new(
            MODEL_NAME,
            base_price * brand_factor * age_adjustment * variation,
            Breakdown {
                base_price: round_cents(base_price),
                brand_category: category,
                brand_factor,
                age_adjustment,
                variation_factor: round_cents(variation),
            },
            Metadata {
                driver_age: age,
                car_brand: request.car_brand.clone(),
                car_model: request.car_model.clone(),
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

    #[test]
    fn model_name_is_fixed() {
        assert_eq!(ModelC::new().name(), "Model C - Brand Based Pricing");
    }

    #[test]
    fn classification_is_case_insensitive() {
        let model = ModelC::new();
        for brand in ["BMW", "bmw", "Bmw", "bMw"] {
            assert_eq!(model.classify(brand), BrandCategory::Luxury, "{brand}");
        }
        assert_eq!(model.classify("TOYOTA"), BrandCategory::Premium);
        assert_eq!(model.classify("Dacia"), BrandCategory::Economy);
        assert_eq!(model.classify(""), BrandCategory::Economy);
    }

    #[test]
    fn every_listed_brand_resolves() {
        let model = ModelC::new();
        for brand in LUXURY_BRANDS {
            assert_eq!(model.classify(brand), BrandCategory::Luxury);
        }
        for brand in PREMIUM_BRANDS {
            assert_eq!(model.classify(brand), BrandCategory::Premium);
        }
    }

    #[test]
    fn custom_brand_lists() {
        let model = ModelC::with_brands(["Rolls-Royce"], ["Skoda"]);
        assert_eq!(model.classify("rolls-royce"), BrandCategory::Luxury);
        assert_eq!(model.classify("SKODA"), BrandCategory::Premium);
        assert_eq!(model.classify("BMW"), BrandCategory::Economy);
    }

    #[test]
    fn price_uses_unrounded_factors() {
        let req = QuoteRequest::new(date(2002, 7, 1), date(2020, 1, 1), "911", "Porsche", "75001");
        let mut rng = StdRng::seed_from_u64(23);
        let quote = ModelC::new().calculate_price_at(&req, date(2024, 1, 1), &mut rng);

        let mut replay = StdRng::seed_from_u64(23);
        let base = draw_base_price(&mut replay, BrandCategory::Luxury.base_price_range());
        let variation = draw_variation(&mut replay);

        assert_eq!(quote.metadata.driver_age, 21);
        assert_eq!(quote.breakdown.age_adjustment, 1.15);
        assert_eq!(quote.price, round_cents(base * 1.4 * 1.15 * variation));
        assert_eq!(quote.metadata.car_brand, "Porsche");
        assert_eq!(quote.metadata.car_model, "911");
    }
}
