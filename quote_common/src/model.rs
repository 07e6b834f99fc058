//! The contract every pricing model implements.
//!
//! A model maps a [`QuoteRequest`] to a [`PriceQuote`] given a calendar date and
//! a random source. Both are parameters so that callers under test can pin the
//! date and seed the generator; [`PricingModel::calculate_price`] fills them in
//! with the local date and the thread-local generator for everyday use.

use std::ops::Range;

use chrono::NaiveDate;
use rand::Rng;
use serde::Serialize;

use crate::calendar::today;
use crate::quote::{Health, PriceQuote};
use crate::request::QuoteRequest;

/// Lower bound of the market-noise multiplier applied to every quote.
pub const VARIATION_MIN: f64 = 0.95;
/// Upper bound (inclusive) of the market-noise multiplier.
pub const VARIATION_MAX: f64 = 1.05;

/// Draw the market-noise multiplier applied to every quote.
///
/// The value is sampled uniformly from the closed interval
/// `[VARIATION_MIN, VARIATION_MAX]`.
///
/// - rng: random source; any `Rng`, including `dyn RngCore`.
/// - Returns: the variation multiplier, unrounded.
pub fn draw_variation<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.random_range(VARIATION_MIN..=VARIATION_MAX)
}

/// Draw a base price for a pricing tier.
///
/// - rng: random source; any `Rng`, including `dyn RngCore`.
/// - range: half-open tier range `[min, max)` in euro.
/// - Returns: the base price, unrounded.
pub fn draw_base_price<R: Rng + ?Sized>(rng: &mut R, range: Range<f64>) -> f64 {
    rng.random_range(range)
}

/// Two-operation contract shared by all pricing models.
pub trait PricingModel {
    /// Factors that produced a price.
    type Breakdown: Serialize;
    /// Contextual attributes echoed with a price.
    type Metadata: Serialize;

    /// Fixed model identifier.
    fn name(&self) -> &str;

    /// Price `request` as of `today`, drawing randomness from `rng`.
    ///
    /// The final price is the product of the unrounded base price and factors,
    /// rounded to cents once; breakdown entries are rounded separately for display.
    ///
    /// - request: applicant and vehicle attributes, trusted as valid.
    /// - today: evaluation date used for age and experience in whole years.
    /// - rng: random source for the base price and variation draws.
    /// - Returns: a fully-populated quote in euro.
    fn calculate_price_at<R: Rng + ?Sized>(
        &self,
        request: &QuoteRequest,
        today: NaiveDate,
        rng: &mut R,
    ) -> PriceQuote<Self::Breakdown, Self::Metadata>;

    /// Price `request` as of the local date using the thread-local generator.
    fn calculate_price(
        &self,
        request: &QuoteRequest,
    ) -> PriceQuote<Self::Breakdown, Self::Metadata> {
        self.calculate_price_at(request, today(), &mut rand::rng())
    }

    /// Report the model as healthy. Does not depend on previous calls.
    fn health_check(&self) -> Health {
        Health::healthy(self.name())
    }
}
