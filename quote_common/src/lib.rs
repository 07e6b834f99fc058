//!
//! Common types and utilities shared by the pricing models and the CLI.
//!
//! This crate aggregates:
//! - `error` — unified error type `QuoteError` used across the workspace.
//! - `result` — handy `Result<T, QuoteError>` alias.
//! - `request` — the `QuoteRequest` every model prices.
//! - `quote` — the `PriceQuote` record, `Currency` and `Health` payloads.
//! - `calendar` — whole-year arithmetic and cent rounding.
//! - `model` — the `PricingModel` contract and the shared variation draw.
#![warn(missing_docs)]
pub mod calendar;
pub mod error;
pub mod model;
pub mod quote;
pub mod request;
pub mod result;

pub use error::QuoteError;
pub use model::PricingModel;
pub use quote::{Currency, Health, HealthStatus, PriceQuote};
pub use request::QuoteRequest;
pub use result::Result;
