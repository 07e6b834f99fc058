//! Postal code location factor.
//!
//! The factor is a pure function of the postal code text: the sum of its
//! character codes modulo 20 picks one of twenty steps between 0.90 and 1.09.

/// Number of distinct location steps.
const LOCATION_STEPS: u64 = 20;
/// Factor of step zero.
const LOCATION_BASE: f64 = 0.9;

/// Sum of the Unicode scalar values of `postal_code`.
pub fn postal_hash(postal_code: &str) -> u64 {
    postal_code.chars().map(|c| u64::from(u32::from(c))).sum()
}

/// Location multiplier in `[0.90, 1.09]` for `postal_code`.
pub fn location_factor(postal_code: &str) -> f64 {
    let step = (postal_hash(postal_code) % LOCATION_STEPS) as f64;
    LOCATION_BASE + step / 100.0
}
