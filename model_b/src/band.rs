//! Driving experience bands and their pricing tables.

use std::ops::Range;

use strum_macros::{Display, EnumIter};

/// Threshold band over whole years of driving experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum ExperienceBand {
    /// Less than 2 years.
    #[strum(to_string = "<2")]
    Under2,
    /// 2 to 4 years.
    #[strum(to_string = "2-4")]
    From2To4,
    /// 5 to 9 years.
    #[strum(to_string = "5-9")]
    From5To9,
    /// 10 years or more.
    #[strum(to_string = ">=10")]
    From10,
}

impl ExperienceBand {
    /// Select the band for `years` of experience.
    pub fn from_years(years: i32) -> Self {
        match years {
            y if y < 2 => ExperienceBand::Under2,
            y if y < 5 => ExperienceBand::From2To4,
            y if y < 10 => ExperienceBand::From5To9,
            _ => ExperienceBand::From10,
        }
    }

    /// Base price range `[min, max)` in euro.
    pub fn base_price_range(&self) -> Range<f64> {
        match self {
            ExperienceBand::Under2 => 900.0..1300.0,
            ExperienceBand::From2To4 => 650.0..950.0,
            ExperienceBand::From5To9 => 500.0..750.0,
            ExperienceBand::From10 => 400.0..650.0,
        }
    }

    /// Experience multiplier.
    pub fn factor(&self) -> f64 {
        match self {
            ExperienceBand::Under2 => 1.6,
            ExperienceBand::From2To4 => 1.3,
            ExperienceBand::From5To9 => 1.0,
            ExperienceBand::From10 => 0.85,
        }
    }
}
