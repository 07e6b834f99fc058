//! Age bands and their pricing tables.

use std::ops::Range;

use strum_macros::{Display, EnumIter};

/// Threshold band over driver age in whole years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum AgeBand {
    /// Younger than 25.
    #[strum(to_string = "<25")]
    Under25,
    /// 25 to 29.
    #[strum(to_string = "25-29")]
    From25To29,
    /// 30 to 49.
    #[strum(to_string = "30-49")]
    From30To49,
    /// 50 to 64.
    #[strum(to_string = "50-64")]
    From50To64,
    /// 65 and older.
    #[strum(to_string = ">=65")]
    From65,
}

impl AgeBand {
    /// Select the band for `age`. Thresholds are checked in ascending order.
    pub fn from_age(age: i32) -> Self {
        match age {
            a if a < 25 => AgeBand::Under25,
            a if a < 30 => AgeBand::From25To29,
            a if a < 50 => AgeBand::From30To49,
            a if a < 65 => AgeBand::From50To64,
            _ => AgeBand::From65,
        }
    }

    /// Base price range `[min, max)` in euro.
    pub fn base_price_range(&self) -> Range<f64> {
        match self {
            AgeBand::Under25 => 800.0..1200.0,
            AgeBand::From25To29 => 600.0..900.0,
            AgeBand::From30To49 => 400.0..700.0,
            AgeBand::From50To64 => 500.0..800.0,
            AgeBand::From65 => 600.0..1000.0,
        }
    }

    /// Age multiplier.
    pub fn factor(&self) -> f64 {
        match self {
            AgeBand::Under25 => 1.5,
            AgeBand::From25To29 => 1.2,
            AgeBand::From30To49 => 1.0,
            AgeBand::From50To64 => 1.1,
            AgeBand::From65 => 1.3,
        }
    }
}
