//! Quote request shared by all pricing models.
//!
//! Requests are built by the caller and treated as already validated; the only
//! fallible path is [`QuoteRequest::parse`], which turns raw text dates into
//! calendar dates.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::QuoteError;
use crate::result::Result;

/// Date format accepted by [`QuoteRequest::parse`].
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Applicant and vehicle attributes a price is computed from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// Driver date of birth.
    pub birthdate: NaiveDate,
    /// Date the driving license was issued.
    pub driver_license_date: NaiveDate,
    /// Car model name (e.g., `Golf`).
    pub car_model: String,
    /// Car brand name (e.g., `Volkswagen`).
    pub car_brand: String,
    /// Postal code of the registered address.
    pub postal_code: String,
}

impl QuoteRequest {
    /// Creates a request from already-typed values.
    pub fn new(
        birthdate: NaiveDate,
        driver_license_date: NaiveDate,
        car_model: &str,
        car_brand: &str,
        postal_code: &str,
    ) -> Self {
        QuoteRequest {
            birthdate,
            driver_license_date,
            car_model: String::from(car_model),
            car_brand: String::from(car_brand),
            postal_code: String::from(postal_code),
        }
    }

    /// Creates a request from text, parsing both dates as `YYYY-MM-DD`.
    ///
    /// Returns [`QuoteError::InvalidDate`] when either date is malformed or does
    /// not exist on the calendar (e.g., `2023-02-30`).
    pub fn parse(
        birthdate: &str,
        driver_license_date: &str,
        car_model: &str,
        car_brand: &str,
        postal_code: &str,
    ) -> Result<Self> {
        Ok(Self::new(
            parse_date("birthdate", birthdate)?,
            parse_date("driver_license_date", driver_license_date)?,
            car_model,
            car_brand,
            postal_code,
        ))
    }

    /// Human-readable car description, `"<brand> <model>"`.
    pub fn car(&self) -> String {
        format!("{} {}", self.car_brand, self.car_model)
    }
}

/// Parses a single `YYYY-MM-DD` date, tagging failures with the request field name.
pub fn parse_date(field: &'static str, raw: &str) -> Result<NaiveDate> {
    let value = raw.trim();
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|e| QuoteError::InvalidDate {
        field,
        value: value.to_string(),
        reason: e.to_string(),
    })
}
