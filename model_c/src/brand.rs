//! Brand categories, their pricing tables, and the age adjustment.

use std::ops::Range;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Brands priced as luxury.
pub const LUXURY_BRANDS: [&str; 7] = [
    "bmw", "mercedes", "audi", "porsche", "lexus", "tesla", "jaguar",
];

/// Brands priced as premium.
pub const PREMIUM_BRANDS: [&str; 6] = ["volvo", "volkswagen", "mazda", "subaru", "honda", "toyota"];

/// Price category of a car brand.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum BrandCategory {
    /// High-end brands.
    Luxury,
    /// Mid-range brands.
    Premium,
    /// Everything else.
    Economy,
}

impl BrandCategory {
    /// Base price range `[min, max)` in euro.
    pub fn base_price_range(&self) -> Range<f64> {
        match self {
            BrandCategory::Luxury => 750.0..1100.0,
            BrandCategory::Premium => 500.0..800.0,
            BrandCategory::Economy => 400.0..650.0,
        }
    }

    /// Brand multiplier.
    pub fn factor(&self) -> f64 {
        match self {
            BrandCategory::Luxury => 1.4,
            BrandCategory::Premium => 1.1,
            BrandCategory::Economy => 1.0,
        }
    }
}

/// Coarse driver age multiplier: young drivers pay more, 50+ slightly more.
pub fn age_adjustment(age: i32) -> f64 {
    if age < 25 {
        1.15
    } else if age >= 50 {
        1.05
    } else {
        1.0
    }
}
